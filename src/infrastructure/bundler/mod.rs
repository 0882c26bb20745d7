//! Bundler Implementations
//!
//! Concrete implementations of the Bundler port.

mod dotenv;
mod esbuild;

pub use dotenv::{load_env_file, parse_env};
pub use esbuild::{EsbuildBundler, DEFAULT_BUNDLER_PROGRAM};
