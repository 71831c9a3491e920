//! Build cache preservation seam
//!
//! When a run generates a fresh baseline timestamp, the store file has to
//! survive the surrounding build system's cache boundary or the next run
//! starts over. `CacheNotifier` abstracts how that is requested; the
//! resolver only sees the trait.

use crate::error::{RestampError, RestampResult};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Asks the surrounding build system to carry a file across cache runs
pub trait CacheNotifier {
    /// Request that `store_path` be preserved across build cache boundaries
    fn preserve(&self, store_path: &Path) -> RestampResult<()>;
}

/// Notifier that appends paths to a cache include list file
///
/// Build systems that cache by path list (one path per line) pick the
/// store file up from this list on their next cache push.
pub struct IncludeFileNotifier {
    include_file: PathBuf,
}

impl IncludeFileNotifier {
    pub fn new(include_file: PathBuf) -> Self {
        Self { include_file }
    }
}

impl CacheNotifier for IncludeFileNotifier {
    fn preserve(&self, store_path: &Path) -> RestampResult<()> {
        let line = store_path.display().to_string();

        // Already listed from an earlier run, nothing to add.
        if let Ok(existing) = fs::read_to_string(&self.include_file) {
            if existing.lines().any(|l| l.trim() == line) {
                debug!("{} already in cache include list", line);
                return Ok(());
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.include_file)
            .map_err(|e| RestampError::CacheInclude {
                path: self.include_file.clone(),
                source: e,
            })?;

        writeln!(file, "{}", line).map_err(|e| RestampError::CacheInclude {
            path: self.include_file.clone(),
            source: e,
        })?;

        debug!(
            "Added {} to cache include list {}",
            line,
            self.include_file.display()
        );
        Ok(())
    }
}

/// Notifier for runs with no cache integration configured
pub struct NoopNotifier;

impl CacheNotifier for NoopNotifier {
    fn preserve(&self, _store_path: &Path) -> RestampResult<()> {
        Ok(())
    }
}
