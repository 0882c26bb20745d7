//! Three-channel logger
//!
//! info and success go to stdout and are dropped when logs are disabled;
//! error goes to stderr and is always written.

use std::io::{self, Write};

use crossterm::style::{Color, Stylize};

use crate::ui::context::OutputStyle;
use crate::ui::theme;

#[derive(Debug, Clone, Copy)]
pub struct Logger {
    enabled: bool,
    style: OutputStyle,
}

impl Logger {
    pub fn new(enabled: bool, style: OutputStyle) -> Self {
        Self { enabled, style }
    }

    pub fn info(&self, message: &str) {
        let _ = self.write_info(&mut io::stdout().lock(), message);
    }

    pub fn success(&self, message: &str) {
        let _ = self.write_success(&mut io::stdout().lock(), message);
    }

    pub fn error(&self, label: &str, message: &str) {
        let _ = self.write_error(&mut io::stderr().lock(), label, message);
    }

    pub fn write_info(&self, w: &mut impl Write, message: &str) -> io::Result<()> {
        if !self.enabled {
            return Ok(());
        }
        let icon = self.icon(theme::icons::PROGRESS, theme::icons_ascii::PROGRESS);
        writeln!(w, "{} {}", self.paint(icon, theme::colors::INFO), message)
    }

    pub fn write_success(&self, w: &mut impl Write, message: &str) -> io::Result<()> {
        if !self.enabled {
            return Ok(());
        }
        let icon = self.icon(theme::icons::SUCCESS, theme::icons_ascii::SUCCESS);
        writeln!(w, "{} {}", self.paint(icon, theme::colors::SUCCESS), message)
    }

    /// Label on the first line, then every message line indented
    pub fn write_error(&self, w: &mut impl Write, label: &str, message: &str) -> io::Result<()> {
        let icon = self.icon(theme::icons::ERROR, theme::icons_ascii::ERROR);
        writeln!(
            w,
            "{} {}",
            self.paint(icon, theme::colors::ERROR),
            self.paint(label, theme::colors::ERROR)
        )?;
        for line in message.lines() {
            writeln!(w, "{}{}", theme::DETAIL_INDENT, line)?;
        }
        w.flush()
    }

    /// Secondary text inside a message
    pub fn dim(&self, text: &str) -> String {
        self.paint(text, theme::colors::DIM)
    }

    fn icon(&self, unicode: &'static str, ascii: &'static str) -> &'static str {
        if self.style.unicode {
            unicode
        } else {
            ascii
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.style.color {
            format!("{}", text.with(color))
        } else {
            text.to_string()
        }
    }
}
