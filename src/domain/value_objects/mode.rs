//! Mode value object - selects the target file and write strategy

/// Placement mode for the entry file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Append to the generated build service worker
    #[default]
    Default,
    /// Copy into `public/` for the development server
    Dev,
    /// Copy into `build/` next to the generated service worker
    Build,
    /// Replace the generated build service worker
    Replace,
}

impl Mode {
    /// Values accepted by `--mode`
    pub const NAMED: [Mode; 3] = [Mode::Dev, Mode::Build, Mode::Replace];

    /// Recognize a `--mode` value.
    ///
    /// Returns `None` for anything other than `dev`, `build`, `replace`,
    /// `default` or `append`. Callers fall back to [`Mode::Default`].
    pub fn recognize(value: &str) -> Option<Mode> {
        match value.trim().to_ascii_lowercase().as_str() {
            "dev" => Some(Mode::Dev),
            "build" => Some(Mode::Build),
            "replace" => Some(Mode::Replace),
            "default" | "append" => Some(Mode::Default),
            _ => None,
        }
    }

    /// Lenient parse: unknown values select the append behavior
    pub fn parse_lenient(value: &str) -> Mode {
        Self::recognize(value).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Default => "default",
            Mode::Dev => "dev",
            Mode::Build => "build",
            Mode::Replace => "replace",
        }
    }

    /// Whether this mode targets the development server
    pub fn is_dev(&self) -> bool {
        matches!(self, Mode::Dev)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
