// SPDX-License-Identifier: MPL-2.0
//! Console export to disk.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error::Result;

/// Builds the timestamped filename for an export taken at `timestamp`.
#[must_use]
pub fn export_filename(timestamp: &DateTime<Local>) -> String {
    format!("console-export-{}.log", timestamp.format("%Y%m%d-%H%M%S"))
}

/// Writes export text into `dir` under a timestamped name.
///
/// Returns the path of the written file.
pub fn export_to_dir(dir: &Path, content: &str) -> Result<PathBuf> {
    let path = dir.join(export_filename(&Local::now()));
    write_atomic(&path, content.as_bytes())?;
    Ok(path)
}

/// Writes `bytes` to `path` through a sibling temp file and a rename, so a
/// crash mid-write never leaves a truncated export behind.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, bytes)?;
    fs::rename(&temp_path, path)?;
    Ok(())
}
