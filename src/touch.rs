//! Recursive timestamp application
//!
//! Walks the tree depth-first and sets atime and mtime on every entry.
//! Symbolic links get their own metadata updated through the no-follow
//! call so the link target is never stamped through the link. A failing
//! entry is logged and skipped; a failing descent aborts the run.

use crate::error::{RestampError, RestampResult};
use chrono::{DateTime, FixedOffset, Local};
use filetime::FileTime;
use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;
use std::time::{Duration, Instant};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Outcome of one traversal: entries stamped and time spent
#[derive(Debug, Clone, Copy)]
pub struct TouchResult {
    pub touched: u64,
    pub elapsed: Duration,
}

/// Set atime and mtime of every entry under `root` to `ts`
///
/// The root entry itself is included. Per-entry failures (permissions,
/// entries vanishing mid-walk) are warnings; a failure enumerating the
/// tree is fatal.
pub fn touch_tree(root: &Path, ts: &DateTime<FixedOffset>) -> RestampResult<TouchResult> {
    let times = FileTime::from_unix_time(ts.timestamp(), ts.timestamp_subsec_nanos());
    let started = Instant::now();
    let mut touched = 0u64;

    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| RestampError::Walk {
            path: root.to_path_buf(),
            source: e,
        })?;

        match touch_entry(entry.path(), entry.path_is_symlink(), ts, times) {
            Ok(()) => touched += 1,
            Err(e) => warn!("Failed to touch {}: {}", entry.path().display(), e),
        }
    }

    Ok(TouchResult {
        touched,
        elapsed: started.elapsed(),
    })
}

/// Stamp a single entry, branching on entry type
///
/// Links are stamped with the same resolved timestamp as everything else;
/// the no-follow call guarantees the target is left alone.
fn touch_entry(
    path: &Path,
    is_symlink: bool,
    ts: &DateTime<FixedOffset>,
    times: FileTime,
) -> std::io::Result<()> {
    if is_symlink {
        match filetime::set_symlink_file_times(path, times, times) {
            Err(e) if e.kind() == ErrorKind::Unsupported => touch_link_fallback(path, ts),
            other => other,
        }
    } else {
        filetime::set_file_times(path, times, times)
    }
}

/// Portability fallback for platforms without a no-follow metadata call
///
/// Shells out to touch(1), which interprets `-t` stamps in local time.
fn touch_link_fallback(path: &Path, ts: &DateTime<FixedOffset>) -> std::io::Result<()> {
    let stamp = ts.with_timezone(&Local).format("%y%m%d%H%M.%S").to_string();
    debug!("Falling back to touch -h -t {} for {}", stamp, path.display());

    let status = Command::new("touch")
        .args(["-h", "-t", &stamp])
        .arg(path)
        .status()?;

    if status.success() {
        Ok(())
    } else {
        Err(std::io::Error::other(format!(
            "touch exited with status {}",
            status
        )))
    }
}
