//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating the use case with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Argument definitions and conversion into `AppendOptions`
//! - `factory` - Creates the use case with proper dependencies (dependency injection)
//!
//! ## Usage
//!
//! ```ignore
//! use append_sw::presentation::factory;
//!
//! let use_case = factory::create_append_use_case(&settings);
//! let result = use_case.execute(&options)?;
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen};
pub use factory::create_append_use_case;
