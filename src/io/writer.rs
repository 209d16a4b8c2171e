//! File writing utilities.
//!
//! Thin wrappers over `std::fs` that attach the path to every error.

use crate::error::{IoError, Result};
use std::path::Path;

/// Makes sure `dir` exists and is a directory, creating parents as needed.
///
/// # Errors
///
/// Returns [`IoError::NotADirectory`] if the path exists but is a file, or
/// [`IoError::DirectoryFailed`] if creation fails.
pub fn ensure_dir<P: AsRef<Path>>(dir: P) -> Result<()> {
    let dir = dir.as_ref();
    let dir_str = dir.to_string_lossy().to_string();

    if dir.exists() {
        if !dir.is_dir() {
            return Err(IoError::NotADirectory { path: dir_str }.into());
        }
        return Ok(());
    }

    std::fs::create_dir_all(dir).map_err(|e| IoError::DirectoryFailed {
        path: dir_str,
        reason: e.to_string(),
    })?;

    Ok(())
}

/// Writes bytes to a file, replacing any existing content.
///
/// Parent directories are created if needed.
///
/// # Errors
///
/// Returns an error if directory creation or file writing fails.
pub fn write_bytes<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path_ref = path.as_ref();
    let path_str = path_ref.to_string_lossy().to_string();

    if let Some(parent) = path_ref.parent()
        && !parent.as_os_str().is_empty()
    {
        ensure_dir(parent)?;
    }

    std::fs::write(path_ref, content).map_err(|e| IoError::WriteFailed {
        path: path_str,
        reason: e.to_string(),
    })?;

    Ok(())
}
