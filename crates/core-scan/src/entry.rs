//! Scanning the tries root into [`TryEntry`] snapshots.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// One directory under the tries root.
///
/// `path` is always `root/name`; `name` never contains a path separator and
/// never begins with `.` — both are guaranteed by [`scan`], which is the
/// only place a `TryEntry` is constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct TryEntry {
    pub name: String,
    pub path: PathBuf,
    pub mtime: SystemTime,
    pub score: f64,
}

/// Enumerates the immediate children of `root`, keeping only directories
/// whose name doesn't start with `.`. A `stat` failure or a non-UTF-8 file
/// name on an individual entry is logged and skipped rather than aborting
/// the whole scan; a failure to open `root` itself is propagated.
pub fn scan(root: &Path) -> Result<Vec<TryEntry>> {
    let read_dir =
        fs::read_dir(root).with_context(|| format!("reading tries root {}", root.display()))?;

    let mut entries = Vec::new();
    for dir_entry in read_dir {
        let dir_entry = match dir_entry {
            Ok(e) => e,
            Err(err) => {
                tracing::debug!(?err, "scan_readdir_entry_error");
                continue;
            }
        };

        let os_name = dir_entry.file_name();
        let Some(name) = os_name.to_str() else {
            tracing::debug!(name = ?os_name, "scan_skip_non_utf8_name");
            continue;
        };
        if name.starts_with('.') {
            continue;
        }

        // `fs::metadata` (not `DirEntry::metadata`) follows symlinks, matching
        // the original's `stat()` — a symlink to a directory under the tries
        // root counts as a try, the same as it would for the C original.
        let metadata = match fs::metadata(dir_entry.path()) {
            Ok(m) => m,
            Err(err) => {
                tracing::debug!(?err, name, "scan_stat_error");
                continue;
            }
        };
        if !metadata.is_dir() {
            continue;
        }

        let mtime = metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH);
        entries.push(TryEntry {
            name: name.to_string(),
            path: dir_entry.path(),
            mtime,
            score: 0.0,
        });
    }

    Ok(entries)
}
