//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (services, ports)
//! - Does NOT contain placement rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `AppendUseCase` - Orchestrates read, place, compile, write

pub mod append;

pub use append::{AppendOptions, AppendResult, AppendUseCase};
