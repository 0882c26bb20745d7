//! Append Result

use std::path::PathBuf;

use crate::domain::services::WriteStrategy;

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendResult {
    /// File that now holds the final content
    pub target: PathBuf,
    /// How the entry was placed into the target
    pub strategy: WriteStrategy,
    /// Target did not exist before this run
    pub created: bool,
    /// Bundler output replaced the placed content
    pub compiled: bool,
    /// Size of the final content in bytes
    pub bytes_written: usize,
}
