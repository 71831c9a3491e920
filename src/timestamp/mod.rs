//! Timestamp parsing and resolution
//!
//! Every timestamp in restamp is an RFC 3339 date-time with offset, both
//! on the CLI and in the store file. `resolve` picks the single timestamp
//! a run will apply; `store` persists it between runs.

pub mod resolve;
pub mod store;

pub use resolve::{resolve, Resolution};

use crate::error::{RestampError, RestampResult};
use chrono::{DateTime, FixedOffset};
use std::fmt;

/// Where the resolved timestamp came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// Supplied explicitly on the command line or via environment
    Explicit,
    /// Read back from the store file of a previous run
    Stored,
    /// Freshly taken from the wall clock this run
    Generated,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Explicit => "explicit input",
            Self::Stored => "stored value",
            Self::Generated => "current time",
        };
        write!(f, "{}", name)
    }
}

/// Parse an RFC 3339 timestamp, keeping the offending input on failure
pub fn parse_rfc3339(text: &str) -> RestampResult<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(text).map_err(|e| RestampError::parse(text, e))
}

/// Serialize a timestamp in the same form `parse_rfc3339` accepts
pub fn to_rfc3339(ts: &DateTime<FixedOffset>) -> String {
    ts.to_rfc3339()
}
