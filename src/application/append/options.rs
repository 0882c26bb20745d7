//! Append Options
//!
//! The invocation configuration, built once from the command line.

use std::path::PathBuf;

use crate::domain::value_objects::{BuildConfig, BuildEnv, Mode};

/// Env file read when `--env` is absent or has no value
pub const DEFAULT_ENV_FILE: &str = "./.env";

/// Options for the append use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendOptions {
    /// Entry file given on the command line
    pub entry: PathBuf,
    /// Place the raw entry text without bundling
    pub skip_compile: bool,
    /// Dotenv file for build-time substitution
    pub env_file: PathBuf,
    /// Placement mode
    pub mode: Mode,
    /// Info and success output enabled
    pub logs_enabled: bool,
}

impl AppendOptions {
    pub fn new(entry: impl Into<PathBuf>) -> Self {
        Self {
            entry: entry.into(),
            skip_compile: false,
            env_file: PathBuf::from(DEFAULT_ENV_FILE),
            mode: Mode::Default,
            logs_enabled: true,
        }
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_skip_compile(mut self, skip: bool) -> Self {
        self.skip_compile = skip;
        self
    }

    pub fn with_env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = path.into();
        self
    }

    pub fn with_logs(mut self, enabled: bool) -> Self {
        self.logs_enabled = enabled;
        self
    }

    /// Bundler configuration derived from the mode and env file
    pub fn build_config(&self) -> BuildConfig {
        BuildConfig::new(BuildEnv::for_mode(self.mode), self.env_file.clone())
    }
}
