pub mod context;
pub mod error;
pub mod events;
pub mod output;
pub mod terminal;
pub mod theme;
