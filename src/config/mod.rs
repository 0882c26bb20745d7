//! Runtime settings
//!
//! Command-line flags win; `APPEND_SW_*` environment variables fill in
//! whatever the command line leaves unset.

use std::path::{Path, PathBuf};

use crate::infrastructure::DEFAULT_BUNDLER_PROGRAM;

/// Bundler executable override
pub const BUNDLER_ENV_VAR: &str = "APPEND_SW_BUNDLER";
/// Disable colored output
pub const NO_COLOR_ENV_VAR: &str = "APPEND_SW_NO_COLOR";
/// Disable info/success output
pub const NO_LOGS_ENV_VAR: &str = "APPEND_SW_NO_LOGS";

/// Project-local esbuild installed by npm
#[cfg(windows)]
pub const LOCAL_BUNDLER_PATH: &str = "node_modules/.bin/esbuild.cmd";
#[cfg(not(windows))]
pub const LOCAL_BUNDLER_PATH: &str = "node_modules/.bin/esbuild";

/// Resolved runtime settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Executable used for the compile step
    pub bundler_program: PathBuf,
    /// Colors forced off through the environment
    pub no_color: bool,
    /// Info/success output forced off through the environment
    pub no_logs: bool,
}

impl Settings {
    /// Resolve settings against the real process environment
    pub fn from_env(cli_bundler: Option<PathBuf>) -> Self {
        Self::resolve(cli_bundler, |key| std::env::var(key).ok(), Path::is_file)
    }

    /// Resolution order for the bundler:
    /// `--bundler`, then `APPEND_SW_BUNDLER`, then `node_modules/.bin/esbuild`,
    /// then `esbuild` on `PATH`.
    pub fn resolve(
        cli_bundler: Option<PathBuf>,
        get_env: impl Fn(&str) -> Option<String>,
        is_file: impl Fn(&Path) -> bool,
    ) -> Self {
        let bundler_program = cli_bundler
            .or_else(|| {
                get_env(BUNDLER_ENV_VAR)
                    .filter(|v| !v.trim().is_empty())
                    .map(PathBuf::from)
            })
            .or_else(|| {
                let local = PathBuf::from(LOCAL_BUNDLER_PATH);
                is_file(&local).then_some(local)
            })
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BUNDLER_PROGRAM));

        let no_color = get_env("NO_COLOR").is_some() || env_flag(&get_env, NO_COLOR_ENV_VAR);
        let no_logs = env_flag(&get_env, NO_LOGS_ENV_VAR);

        Self {
            bundler_program,
            no_color,
            no_logs,
        }
    }
}

fn env_flag(get_env: &impl Fn(&str) -> Option<String>, key: &str) -> bool {
    match get_env(key) {
        Some(val) => {
            let val = val.trim().to_lowercase();
            !val.is_empty() && val != "0" && val != "false"
        }
        None => false,
    }
}
