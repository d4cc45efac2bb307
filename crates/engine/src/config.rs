//! Preferences configuration
//!
//! ```toml
//! # prefs.toml
//! path = "/home/ada/.config/game/prefs.json"
//! blob_policy = "self_heal"
//! log_decode_failures = true
//! ```
//!
//! Every field is optional. An empty file gives the defaults: in-memory
//! store, corrupt blobs propagate as errors, decode failures are not logged.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PrefsError, Result};

/// What `get_serializable` does with a blob it cannot decode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorruptBlobPolicy {
    /// Return `PrefsError::CorruptBlob` and leave the key alone (default)
    #[default]
    Propagate,
    /// Delete the key, report to the observer, return the caller's default
    SelfHeal,
}

/// Options for constructing `Prefs`
///
/// Use the builder pattern or load from TOML:
///
/// ```ignore
/// use prefs_engine::{CorruptBlobPolicy, PrefsConfig};
///
/// let config = PrefsConfig::new()
///     .path("prefs.json")
///     .blob_policy(CorruptBlobPolicy::SelfHeal);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrefsConfig {
    /// Snapshot file for the store; `None` keeps everything in memory
    pub path: Option<PathBuf>,
    /// Corrupt blob handling for the serializable passthrough
    pub blob_policy: CorruptBlobPolicy,
    /// Log decode failures through `tracing` when no observer is injected
    pub log_decode_failures: bool,
}

impl PrefsConfig {
    /// Create a config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the snapshot file
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set the corrupt blob policy
    pub fn blob_policy(mut self, policy: CorruptBlobPolicy) -> Self {
        self.blob_policy = policy;
        self
    }

    /// Enable or disable decode failure logging
    pub fn log_decode_failures(mut self, enabled: bool) -> Self {
        self.log_decode_failures = enabled;
        self
    }

    /// Parse a config from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a config from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| PrefsError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}
