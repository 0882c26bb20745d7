//! Error types for append-sw
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`
//! and downcasts at the top level to pick the label and exit code.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{BundleError, FsError};

/// Result type alias for append-sw operations
pub type AppendSwResult<T> = Result<T, AppendSwError>;

/// Main error type for append-sw operations
#[derive(Error, Debug)]
pub enum AppendSwError {
    /// Bad or missing command-line arguments
    #[error("{message}")]
    Usage { message: String },

    /// Filesystem read or write failure
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The bundler reported errors or warnings
    #[error("{diagnostics}")]
    Compile { diagnostics: String },
}

impl AppendSwError {
    /// Category label printed before the message lines
    pub fn kind_label(&self) -> &'static str {
        match self {
            AppendSwError::Usage { .. } => "UsageError",
            AppendSwError::Io { .. } => "IOError",
            AppendSwError::Compile { .. } => "CompileError",
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            AppendSwError::Usage { .. } => 2,
            AppendSwError::Io { .. } | AppendSwError::Compile { .. } => 1,
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppendSwError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<FsError> for AppendSwError {
    fn from(err: FsError) -> Self {
        let FsError { path, source } = err;
        AppendSwError::Io { path, source }
    }
}

impl From<BundleError> for AppendSwError {
    fn from(err: BundleError) -> Self {
        match err {
            BundleError::Io { path, source } => AppendSwError::Io { path, source },
            other => AppendSwError::Compile {
                diagnostics: other.to_string(),
            },
        }
    }
}
