use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use append_sw::presentation::ColorWhen;

/// How output is decorated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputStyle {
    pub color: bool,
    pub unicode: bool,
}

impl OutputStyle {
    pub fn new(cli_color: Option<ColorWhen>, env_no_color: bool) -> Self {
        Self::from_caps(cli_color, env_no_color, detect_capabilities())
    }

    pub(crate) fn from_caps(
        cli_color: Option<ColorWhen>,
        env_no_color: bool,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => {
                !env_no_color && caps.supports_color && !caps.is_ci
            }
        };

        Self {
            color,
            unicode: caps.supports_unicode,
        }
    }

    /// Undecorated output (tests, redirected streams)
    #[cfg(test)]
    pub fn plain() -> Self {
        Self {
            color: false,
            unicode: false,
        }
    }
}
