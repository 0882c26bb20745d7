//! esbuild Bundler
//!
//! Shells out to an esbuild-compatible executable. The bundle is streamed on
//! stdout and kept in memory; nothing besides the final target is written.
//! Any diagnostic on stderr is fatal, warnings included.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use super::dotenv::load_env_file;
use crate::domain::ports::{BundleError, BundleResult, Bundler};
use crate::domain::value_objects::BuildConfig;

/// Program used when nothing else is configured
pub const DEFAULT_BUNDLER_PROGRAM: &str = "esbuild";

/// Syntax level the service worker is transpiled down to
const TARGET: &str = "es2015";

/// Bundler backed by the esbuild CLI
#[derive(Debug, Clone)]
pub struct EsbuildBundler {
    program: PathBuf,
}

impl Default for EsbuildBundler {
    fn default() -> Self {
        Self::new(DEFAULT_BUNDLER_PROGRAM)
    }
}

impl EsbuildBundler {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Flags passed after the entry path
    pub fn build_args(config: &BuildConfig, env_vars: &[(String, String)]) -> Vec<String> {
        let mut args = vec![
            "--bundle".to_string(),
            "--log-level=warning".to_string(),
            "--color=false".to_string(),
            format!("--target={TARGET}"),
            "--legal-comments=none".to_string(),
        ];

        if config.env.is_production() {
            args.push("--minify".to_string());
        }

        let mode = config.env.as_str();
        args.push(define("NODE_ENV", mode));
        args.push(define("BABEL_ENV", mode));

        for (key, value) in env_vars {
            if key == "NODE_ENV" || key == "BABEL_ENV" {
                continue;
            }
            args.push(define(key, value));
        }

        args
    }
}

fn define(key: &str, value: &str) -> String {
    let literal = serde_json::Value::String(value.to_string());
    format!("--define:process.env.{key}={literal}")
}

impl Bundler for EsbuildBundler {
    fn compile(&self, entry: &Path, config: &BuildConfig) -> BundleResult<String> {
        let env_vars = load_env_file(&config.env_file)?;

        let output = Command::new(&self.program)
            .arg(entry)
            .args(Self::build_args(config, &env_vars))
            .env("NODE_ENV", config.env.as_str())
            .env("BABEL_ENV", config.env.as_str())
            .stdin(Stdio::null())
            .output()
            .map_err(|source| BundleError::Launch {
                program: self.program.display().to_string(),
                source,
            })?;

        let diagnostics = String::from_utf8_lossy(&output.stderr)
            .trim_end()
            .to_string();

        if !output.status.success() {
            if diagnostics.is_empty() {
                return Err(BundleError::Diagnostics(format!(
                    "{} exited with {}",
                    self.program.display(),
                    output.status
                )));
            }
            return Err(BundleError::Diagnostics(diagnostics));
        }

        if !diagnostics.is_empty() {
            return Err(BundleError::Diagnostics(diagnostics));
        }

        String::from_utf8(output.stdout).map_err(|_| BundleError::InvalidOutput)
    }
}
