//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Local file system implementation
///
/// Writes go through a temp file in the target directory followed by a
/// rename, so readers never observe a half-written service worker.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        std::fs::read_to_string(path).map_err(|e| FsError::new(path, e))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent).map_err(|e| FsError::new(parent, e))?;

        // Keep the permissions of the file we replace; temp files start as 0600.
        let previous = std::fs::metadata(path).ok().map(|m| m.permissions());

        let mut tmp = NamedTempFile::new_in(parent).map_err(|e| FsError::new(path, e))?;
        tmp.write_all(content.as_bytes())
            .and_then(|()| tmp.flush())
            .map_err(|e| FsError::new(path, e))?;
        tmp.persist(path).map_err(|e| FsError::new(path, e.error))?;

        match previous {
            Some(perms) => std::fs::set_permissions(path, perms),
            None => set_default_permissions(path),
        }
        .map_err(|e| FsError::new(path, e))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

#[cfg(unix)]
fn set_default_permissions(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_default_permissions(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
