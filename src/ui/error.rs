//! Top-level failure reporting

use append_sw::AppendSwError;

use crate::ui::output::Logger;

/// Print `err` on the error channel and return the exit code for it
pub fn print_error(err: &anyhow::Error, logger: &Logger) -> i32 {
    match err.downcast_ref::<AppendSwError>() {
        Some(err) => report(err, logger),
        None => {
            logger.error("Error", &format!("{:#}", err));
            1
        }
    }
}

pub fn report(err: &AppendSwError, logger: &Logger) -> i32 {
    logger.error(err.kind_label(), &err.to_string());
    err.exit_code()
}

/// Convert a clap parse failure into a usage error.
///
/// `--help` and `--version` are not failures and return `None`.
pub fn usage_error(err: &clap::Error) -> Option<AppendSwError> {
    use clap::error::ErrorKind;

    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => None,
        _ => {
            let rendered = err.render().to_string();
            let message = rendered
                .trim_end()
                .strip_prefix("error: ")
                .unwrap_or(rendered.trim_end())
                .to_string();
            Some(AppendSwError::Usage { message })
        }
    }
}
