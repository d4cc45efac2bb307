//! Engine error types

use std::path::PathBuf;
use thiserror::Error;

use prefs_storage::StoreError;

/// Errors surfaced by the preferences facade
///
/// Typed `get`/`set` never produce these. They come from saving, opening,
/// configuration loading and the serializable passthrough.
#[derive(Debug, Error)]
pub enum PrefsError {
    /// The primitive store failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A value could not be serialized for `set_serializable`
    #[error("failed to serialize value: {0}")]
    Serialize(#[source] bincode::Error),

    /// A stored blob could not be decoded by `get_serializable`
    #[error("corrupt serialized value under {key:?}: {reason}")]
    CorruptBlob {
        /// Key holding the blob
        key: String,
        /// Decoder message
        reason: String,
    },

    /// Config file could not be read
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        /// Config path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Config text is not valid
    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Result alias for engine operations
pub type Result<T> = std::result::Result<T, PrefsError>;
