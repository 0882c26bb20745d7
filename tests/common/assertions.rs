//! Assertion macros with descriptive failure messages.

use std::path::Path;

/// List all files in a directory recursively (for debugging)
pub fn list_all_files(dir: &Path) -> Vec<String> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(list_all_files(&path));
            } else {
                files.push(path.display().to_string());
            }
        }
    }
    files
}

/// Assert that a file exists relative to the project root with exact content.
///
/// # Example
/// ```ignore
/// assert_written!(env, "public/sw-extra.js", "self.skipWaiting();");
/// ```
#[macro_export]
macro_rules! assert_written {
    ($env:expr, $path:expr, $content:expr) => {
        let full_path = $env.project_path($path);
        assert!(
            full_path.exists(),
            "Expected file at '{}', but it doesn't exist.\nFiles found:\n  {}",
            $path,
            $crate::common::list_all_files($env.root()).join("\n  ")
        );
        assert_eq!($env.read_file($path), $content, "content of {}", $path);
    };
}

/// Assert that a file was NOT written.
#[macro_export]
macro_rules! assert_not_written {
    ($env:expr, $path:expr) => {
        let full_path = $env.project_path($path);
        assert!(
            !full_path.exists(),
            "Expected no file at '{}', but it exists.",
            $path
        );
    };
}
