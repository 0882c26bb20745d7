//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod append_events;
pub mod bundler;
pub mod file_system;

pub use append_events::{AppendEvent, AppendEventSink, NoopEventSink};
pub use bundler::{BundleError, BundleResult, Bundler};
pub use file_system::{FileSystem, FsError, FsResult};
