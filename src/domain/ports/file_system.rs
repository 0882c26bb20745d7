//! FileSystem port - abstraction over file I/O operations
//!
//! This trait allows the orchestrator to read and write files
//! without depending on concrete implementations (local, mock).

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation error, carrying the path it happened on
#[derive(Debug)]
pub struct FsError {
    pub path: PathBuf,
    pub source: std::io::Error,
}

impl FsError {
    pub fn new(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }

    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::new(
            path,
            std::io::Error::new(ErrorKind::NotFound, "No such file or directory"),
        )
    }

    pub fn kind(&self) -> ErrorKind {
        self.source.kind()
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.source)
    }
}

impl std::error::Error for FsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O with atomic writes
/// - `MockFileSystem` - in-memory for testing
pub trait FileSystem {
    /// Read file content as UTF-8 string
    fn read(&self, path: &Path) -> FsResult<String>;

    /// Write content to file, creating parent directories
    fn write(&self, path: &Path, content: &str) -> FsResult<()>;

    /// Check if file exists
    fn exists(&self, path: &Path) -> bool;
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn read(&self, path: &Path) -> FsResult<String> {
        (**self).read(path)
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        (**self).write(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }
}
