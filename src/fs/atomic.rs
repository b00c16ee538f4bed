//! Atomic file writes.
//!
//! Content is written to `.{filename}.tmp` next to the target, synced, and
//! renamed over the target. The temporary file handle is dropped before the
//! rename on every path, and the temporary file is removed if any step fails,
//! so a target is either absent, its old content, or its complete new content.

use crate::error::{InitError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write `content` to `path`, replacing any existing file.
///
/// The parent directory must already exist.
pub fn write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let temp_path = temp_path_for(path);

    if let Err(err) = write_and_sync(&temp_path, content.as_bytes()) {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        InitError::io("failed to write", path, e)
    })?;

    // Persist the directory entry as well
    if let Some(parent) = path.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }

    Ok(())
}

/// `.{filename}.tmp` in the same directory as `target`.
fn temp_path_for(target: &Path) -> PathBuf {
    let mut name = std::ffi::OsString::from(".");
    name.push(target.file_name().unwrap_or_default());
    name.push(".tmp");
    target.with_file_name(name)
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file =
        File::create(path).map_err(|e| InitError::io("failed to create temporary file", path, e))?;
    file.write_all(content)
        .map_err(|e| InitError::io("failed to write temporary file", path, e))?;
    file.sync_all()
        .map_err(|e| InitError::io("failed to sync temporary file", path, e))
}
