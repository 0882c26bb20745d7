//! append-sw CLI - merge custom code into a generated service worker
//!
//! Usage: append-sw [OPTIONS] <ENTRY>
//!
//! Modes:
//!   (none)   append to build/service-worker.js
//!   dev      write public/<name>
//!   build    write build/<name>
//!   replace  overwrite build/service-worker.js

mod ui;

use anyhow::Result;
use clap::Parser;

use append_sw::presentation::{create_append_use_case, Cli};
use append_sw::{AppendOptions, Settings, SERVICE_WORKER_PATH};

use crate::ui::context::OutputStyle;
use crate::ui::events::ConsoleEventSink;
use crate::ui::output::Logger;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match ui::error::usage_error(&err) {
            Some(usage) => {
                let logger = Logger::new(true, OutputStyle::new(None, false));
                std::process::exit(ui::error::report(&usage, &logger));
            }
            None => err.exit(),
        },
    };

    let settings = Settings::from_env(cli.bundler.clone());
    let options = cli.append_options(settings.no_logs);
    let logger = Logger::new(
        options.logs_enabled,
        OutputStyle::new(cli.color, settings.no_color),
    );

    if let Err(err) = run(&cli, &settings, &options, &logger) {
        std::process::exit(ui::error::print_error(&err, &logger));
    }
}

fn run(cli: &Cli, settings: &Settings, options: &AppendOptions, logger: &Logger) -> Result<()> {
    if let Some(raw) = cli.unrecognized_mode() {
        logger.info(&format!(
            "Unknown mode '{}', appending to {}",
            raw, SERVICE_WORKER_PATH
        ));
    }

    let use_case = create_append_use_case(settings);
    let sink = ConsoleEventSink::new(logger);
    let result = use_case.execute_with_events(options, &sink)?;

    let verb = if result.created { "Created" } else { "Updated" };
    let detail = if result.compiled {
        format!("{} bytes, bundled", result.bytes_written)
    } else {
        format!("{} bytes", result.bytes_written)
    };
    logger.success(&format!(
        "{} {} {}",
        verb,
        result.target.display(),
        logger.dim(&format!("({})", detail))
    ));

    Ok(())
}
