//! Dotenv loading for build-time `process.env.*` substitution

use std::io::ErrorKind;
use std::path::Path;

use crate::domain::ports::{BundleError, BundleResult};

/// Load `KEY=VALUE` pairs from `path`.
///
/// A missing file yields no variables. Any other read failure is an error.
pub fn load_env_file(path: &Path) -> BundleResult<Vec<(String, String)>> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(parse_env(&content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
        Err(source) => Err(BundleError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Parse dotenv text. Later keys override earlier ones; first-seen order is kept.
pub fn parse_env(content: &str) -> Vec<(String, String)> {
    let mut vars: Vec<(String, String)> = Vec::new();

    for line in content.lines() {
        let Some((key, value)) = parse_line(line) else {
            continue;
        };
        match vars.iter_mut().find(|(k, _)| *k == key) {
            Some(existing) => existing.1 = value,
            None => vars.push((key, value)),
        }
    }

    vars
}

fn parse_line(line: &str) -> Option<(String, String)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let line = line.strip_prefix("export ").unwrap_or(line);

    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    if !is_identifier(key) {
        return None;
    }

    Some((key.to_string(), unquote(value.trim()).to_string()))
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(rest) = value.strip_prefix(quote) {
            // Anything after the closing quote (an inline comment) is dropped.
            if let Some(end) = rest.find(quote) {
                return &rest[..end];
            }
        }
    }
    // Unquoted values may carry a trailing comment.
    match value.find(" #") {
        Some(idx) => value[..idx].trim_end(),
        None => value,
    }
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
