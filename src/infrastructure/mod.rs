//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system with atomic writes
//! - `bundler/` - esbuild-compatible bundler process and dotenv loading

pub mod bundler;
pub mod fs;

// Re-export for convenience
pub use bundler::{load_env_file, EsbuildBundler, DEFAULT_BUNDLER_PROGRAM};
pub use fs::LocalFs;
