use crossterm::style::Color;

/// Design tokens for append-sw output.
///
/// All colors and icons used by the logger come from this module.
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const PROGRESS: &str = "●";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const PROGRESS: &str = "[..]";
}

/// Indentation for message lines under an error label
pub const DETAIL_INDENT: &str = "  ";
