//! Bundler port
//!
//! The bundler is an external collaborator: it takes an entry path plus a
//! build configuration and returns the bundled source text.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::value_objects::BuildConfig;

pub type BundleResult<T> = Result<T, BundleError>;

/// Bundler failures
#[derive(Debug, Error)]
pub enum BundleError {
    /// The bundler program could not be started
    #[error("failed to launch bundler `{program}`: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Errors or warnings reported by the bundler (all fatal)
    #[error("{0}")]
    Diagnostics(String),

    /// Bundler output was not valid UTF-8
    #[error("bundler output is not valid UTF-8")]
    InvalidOutput,

    /// The env file exists but could not be read
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Turns an entry file into a single bundle
pub trait Bundler {
    /// Bundle `entry` and return the bundle text
    fn compile(&self, entry: &Path, config: &BuildConfig) -> BundleResult<String>;
}

impl<B: Bundler + ?Sized> Bundler for &B {
    fn compile(&self, entry: &Path, config: &BuildConfig) -> BundleResult<String> {
        (**self).compile(entry, config)
    }
}

impl<B: Bundler + ?Sized> Bundler for Box<B> {
    fn compile(&self, entry: &Path, config: &BuildConfig) -> BundleResult<String> {
        (**self).compile(entry, config)
    }
}
