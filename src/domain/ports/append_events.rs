//! Append Event Port
//!
//! Observable progress for one run. The console sink turns these into
//! info/success lines; library callers can ignore them.

use std::path::PathBuf;

use crate::domain::services::WriteStrategy;
use crate::domain::value_objects::BuildEnv;

/// Event emitted while a run progresses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppendEvent {
    /// Entry file is about to be read
    Reading { entry: PathBuf },

    /// Entry content was placed into the target
    Placed {
        target: PathBuf,
        strategy: WriteStrategy,
    },

    /// Bundler started on the target
    Compiling { target: PathBuf, env: BuildEnv },

    /// Compilation was skipped on request
    CompileSkipped,

    /// Run finished; the target holds its final content
    Completed { target: PathBuf, compiled: bool },
}

/// Trait for receiving append events
pub trait AppendEventSink {
    fn on_event(&self, event: AppendEvent);
}

/// No-op event sink for silent operation
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEventSink;

impl AppendEventSink for NoopEventSink {
    fn on_event(&self, _event: AppendEvent) {}
}
