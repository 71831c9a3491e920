//! Error types for restamp
//!
//! All modules use `RestampResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for restamp operations
pub type RestampResult<T> = Result<T, RestampError>;

/// All errors that can occur in restamp
#[derive(Error, Debug)]
pub enum RestampError {
    // Configuration errors
    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    // Timestamp errors
    #[error("Failed to parse timestamp {input:?}: {source}")]
    TimestampParse {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    // Store errors
    #[error("Failed to read timestamp store {path}: {source}")]
    StoreRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write timestamp store {path}: {source}")]
    StoreWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Traversal errors
    #[error("Failed to walk directory {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    // Cache errors
    #[error("Failed to update cache include file {path}: {source}")]
    CacheInclude {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl RestampError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a timestamp parse error, keeping the offending input
    pub fn parse(input: impl Into<String>, source: chrono::ParseError) -> Self {
        Self::TimestampParse {
            input: input.into(),
            source,
        }
    }
}
