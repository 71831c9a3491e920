//! Timestamp store - one RFC 3339 value in one small text file
//!
//! The store file is what makes repeated runs converge: the first run
//! writes "now" into it, every later run reads the same value back.
//! Single reader and single writer per run, so no locking.

use crate::error::{RestampError, RestampResult};
use crate::timestamp;
use chrono::{DateTime, FixedOffset};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Read the stored timestamp, or `None` if the store file does not exist
///
/// A file that exists but does not hold a parseable RFC 3339 value is an
/// error, not `None` - a corrupt store should stop the run, not silently
/// restart the baseline.
pub fn read(path: &Path) -> RestampResult<Option<DateTime<FixedOffset>>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("Store file {} does not exist", path.display());
            return Ok(None);
        }
        Err(e) => {
            return Err(RestampError::StoreRead {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };

    let ts = timestamp::parse_rfc3339(content.trim())?;
    debug!("Read stored timestamp {} from {}", ts, path.display());
    Ok(Some(ts))
}

/// Write a timestamp to the store file, creating parent directories
pub fn write(path: &Path, ts: &DateTime<FixedOffset>) -> RestampResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| RestampError::StoreWrite {
                path: path.to_path_buf(),
                source: e,
            })?;
        }
    }

    let mut content = timestamp::to_rfc3339(ts);
    content.push('\n');
    fs::write(path, content).map_err(|e| RestampError::StoreWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    debug!("Wrote timestamp {} to {}", ts, path.display());
    Ok(())
}
