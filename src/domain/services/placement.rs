//! Placement rules
//!
//! Decides where the entry file lands and how it is written. The mapping
//! `(mode, basename) -> Placement` is total and has no hidden state.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::Mode;

/// Service worker generated by the application build
pub const SERVICE_WORKER_PATH: &str = "build/service-worker.js";

const DEV_DIR: &str = "public";
const BUILD_DIR: &str = "build";

/// How the target file is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStrategy {
    /// Replace the target with the new content
    Overwrite,
    /// Read the target and write `existing + "\n" + content`
    Append,
}

/// Target path plus write strategy for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub target: PathBuf,
    pub strategy: WriteStrategy,
}

impl Placement {
    /// Compute the placement from a mode and the entry's base name
    pub fn new(mode: Mode, basename: &OsStr) -> Self {
        match mode {
            Mode::Dev => Self::overwrite(Path::new(DEV_DIR).join(basename)),
            Mode::Build => Self::overwrite(Path::new(BUILD_DIR).join(basename)),
            Mode::Replace => Self::overwrite(PathBuf::from(SERVICE_WORKER_PATH)),
            Mode::Default => Self {
                target: PathBuf::from(SERVICE_WORKER_PATH),
                strategy: WriteStrategy::Append,
            },
        }
    }

    /// Compute the placement for an entry path.
    ///
    /// Returns `None` when the path has no final component (`/`, `..`).
    pub fn for_entry(mode: Mode, entry: &Path) -> Option<Self> {
        entry.file_name().map(|name| Self::new(mode, name))
    }

    fn overwrite(target: PathBuf) -> Self {
        Self {
            target,
            strategy: WriteStrategy::Overwrite,
        }
    }

    /// Final file content given what is currently on disk
    pub fn content_for(&self, existing: Option<&str>, content: &str) -> String {
        match (self.strategy, existing) {
            (WriteStrategy::Append, Some(existing)) => merge(existing, content),
            _ => content.to_string(),
        }
    }
}

/// Append `content` to `existing`, separated by exactly one newline
pub fn merge(existing: &str, content: &str) -> String {
    let mut merged = String::with_capacity(existing.len() + 1 + content.len());
    merged.push_str(existing);
    merged.push('\n');
    merged.push_str(content);
    merged
}
