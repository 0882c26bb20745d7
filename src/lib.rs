//! append-sw - merge custom code into a generated service worker
//!
//! Takes an entry file, places it next to (or into) the service worker that
//! the application build produced, and optionally runs an esbuild-compatible
//! bundler over the result.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::append::{AppendOptions, AppendResult, AppendUseCase};
pub use config::Settings;
pub use domain::ports::{AppendEvent, AppendEventSink, Bundler, FileSystem};
pub use domain::services::{Placement, WriteStrategy, SERVICE_WORKER_PATH};
pub use domain::value_objects::{BuildConfig, BuildEnv, Mode};
pub use error::{AppendSwError, AppendSwResult};
pub use infrastructure::{EsbuildBundler, LocalFs};
