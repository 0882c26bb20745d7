//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - `--env` takes an optional value; when given bare it means `./.env`.
//!   Put the entry first (`append-sw sw.js -e`) or use `--env=PATH`, otherwise
//!   a following positional is taken as the env path.
//! - `--mode` is lenient: unknown values select the append behavior.

use std::path::PathBuf;

use clap::Parser;

use crate::application::append::{AppendOptions, DEFAULT_ENV_FILE};
use crate::domain::value_objects::Mode;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// append-sw - merge custom code into a generated service worker
#[derive(Parser, Debug)]
#[command(name = "append-sw")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Without --mode the entry is appended to build/service-worker.js.\n\
                  dev writes public/<name>, build writes build/<name>, \
                  replace overwrites build/service-worker.js."
)]
pub struct Cli {
    /// Entry file with the code to add to the service worker
    #[arg(value_name = "ENTRY")]
    pub entry: PathBuf,

    /// Skip compilation
    #[arg(short, long)]
    pub skip_compile: bool,

    /// Path to environment variables file
    #[arg(
        short,
        long,
        value_name = "PATH",
        num_args = 0..=1,
        default_missing_value = DEFAULT_ENV_FILE
    )]
    pub env: Option<PathBuf>,

    /// Placement mode: dev, build or replace
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Disable info and success output (errors are always shown)
    #[arg(short, long)]
    pub no_logs: bool,

    /// Bundler executable (esbuild-compatible)
    #[arg(long, value_name = "PROGRAM")]
    pub bundler: Option<PathBuf>,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,
}

impl Cli {
    /// Mode selected on the command line
    pub fn mode(&self) -> Mode {
        self.mode
            .as_deref()
            .map(Mode::parse_lenient)
            .unwrap_or_default()
    }

    /// The raw `--mode` value when it was not recognized
    pub fn unrecognized_mode(&self) -> Option<&str> {
        self.mode
            .as_deref()
            .filter(|raw| Mode::recognize(raw).is_none())
    }

    /// Build the invocation config. `env_no_logs` comes from `APPEND_SW_NO_LOGS`.
    pub fn append_options(&self, env_no_logs: bool) -> AppendOptions {
        AppendOptions::new(self.entry.clone())
            .with_mode(self.mode())
            .with_skip_compile(self.skip_compile)
            .with_env_file(
                self.env
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_ENV_FILE)),
            )
            .with_logs(!(self.no_logs || env_no_logs))
    }
}
