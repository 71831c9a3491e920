//! Run configuration
//!
//! The library never reads the process environment; the binary builds a
//! `RunConfig` (clap handles flag and env sourcing) and hands it to
//! `restamp::run`.

use crate::error::{RestampError, RestampResult};
use std::path::PathBuf;
use tracing::info;

/// Everything one run needs, already sourced and owned
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Directory whose tree gets re-stamped
    pub root: PathBuf,
    /// Explicit RFC 3339 timestamp, if any
    pub touch_time: Option<String>,
    /// Store file enabling the persisted-timestamp fallback, if any
    pub store_file: Option<PathBuf>,
    /// Cache include list the store file gets registered in, if any
    pub cache_include_file: Option<PathBuf>,
}

impl RunConfig {
    /// Check the root path before anything is resolved or touched
    pub fn validate(&self) -> RestampResult<()> {
        if !self.root.exists() {
            return Err(RestampError::PathNotFound(self.root.clone()));
        }
        if !self.root.is_dir() {
            return Err(RestampError::NotADirectory(self.root.clone()));
        }
        Ok(())
    }

    /// Echo the effective configuration at info level
    pub fn log(&self) {
        info!("Configs:");
        info!("- directory: {}", self.root.display());
        info!(
            "- touch time: {}",
            self.touch_time.as_deref().unwrap_or("(unset)")
        );
        info!(
            "- store file: {}",
            self.store_file
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(unset)".into())
        );
    }
}
