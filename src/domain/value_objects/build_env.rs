//! Build environment handed to the bundler

use std::path::PathBuf;

use super::Mode;

/// Optimization profile for the bundler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildEnv {
    Development,
    #[default]
    Production,
}

impl BuildEnv {
    /// `dev` builds for development, every other mode for production
    pub fn for_mode(mode: Mode) -> Self {
        if mode.is_dev() {
            BuildEnv::Development
        } else {
            BuildEnv::Production
        }
    }

    /// Value used for `NODE_ENV` / `BABEL_ENV`
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildEnv::Development => "development",
            BuildEnv::Production => "production",
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, BuildEnv::Production)
    }
}

impl std::fmt::Display for BuildEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the bundler needs besides the entry path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub env: BuildEnv,
    /// Dotenv file feeding `process.env.*` substitutions (ignored if absent)
    pub env_file: PathBuf,
}

impl BuildConfig {
    pub fn new(env: BuildEnv, env_file: impl Into<PathBuf>) -> Self {
        Self {
            env,
            env_file: env_file.into(),
        }
    }
}
