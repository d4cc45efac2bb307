//! Store error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or saving a store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem failure on the snapshot file
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Snapshot path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Snapshot file exists but is not valid JSON for the snapshot schema
    #[error("invalid snapshot {path}: {source}")]
    Snapshot {
        /// Snapshot path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },

    /// Snapshot written by a newer format version
    #[error("unsupported snapshot version {found} (expected {expected})")]
    UnsupportedVersion {
        /// Version found in the file
        found: u32,
        /// Version this build reads
        expected: u32,
    },
}

/// Result alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
