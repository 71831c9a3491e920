//! Timestamp resolution policy
//!
//! Exactly one timestamp is chosen per run, priority order:
//! 1. explicit input, 2. stored value, 3. wall clock now. When the wall
//! clock is used and a store path is configured, the value is persisted
//! immediately so the next run lands on the stored-value branch.

use crate::cache::CacheNotifier;
use crate::error::RestampResult;
use crate::timestamp::{self, store, Provenance};
use chrono::{DateTime, FixedOffset, Utc};
use std::path::Path;
use tracing::{debug, warn};

/// The single timestamp a run will apply, with its origin
#[derive(Debug, Clone, Copy)]
pub struct Resolution {
    pub timestamp: DateTime<FixedOffset>,
    pub provenance: Provenance,
}

/// Resolve the effective timestamp for this run
///
/// An empty or whitespace-only explicit value counts as absent, matching
/// how an unset environment variable arrives from build runners.
pub fn resolve(
    explicit: Option<&str>,
    store_path: Option<&Path>,
    notifier: &dyn CacheNotifier,
) -> RestampResult<Resolution> {
    if let Some(text) = explicit.map(str::trim).filter(|t| !t.is_empty()) {
        let timestamp = timestamp::parse_rfc3339(text)?;
        return Ok(Resolution {
            timestamp,
            provenance: Provenance::Explicit,
        });
    }

    if let Some(path) = store_path {
        if let Some(timestamp) = store::read(path)? {
            return Ok(Resolution {
                timestamp,
                provenance: Provenance::Stored,
            });
        }

        let timestamp = now();
        store::write(path, &timestamp)?;
        if let Err(e) = notifier.preserve(path) {
            warn!("Failed to mark store file for cache preservation: {}", e);
        }
        return Ok(Resolution {
            timestamp,
            provenance: Provenance::Generated,
        });
    }

    debug!("No explicit timestamp and no store file configured, using now");
    Ok(Resolution {
        timestamp: now(),
        provenance: Provenance::Generated,
    })
}

fn now() -> DateTime<FixedOffset> {
    Utc::now().fixed_offset()
}
