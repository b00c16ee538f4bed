//! Filesystem helpers for writing the project skeleton.

pub mod atomic;

pub use atomic::write_file;

use crate::error::{InitError, Result};
use std::fs;
use std::path::Path;

/// Create `path` and any missing ancestors.
///
/// Returns `true` if the directory was created, `false` if it already existed.
pub fn ensure_dir(path: &Path) -> Result<bool> {
    if path.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(path).map_err(|e| InitError::io("failed to create directory", path, e))?;
    Ok(true)
}
