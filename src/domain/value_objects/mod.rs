//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod build_env;
mod mode;

pub use build_env::{BuildConfig, BuildEnv};
pub use mode::Mode;
