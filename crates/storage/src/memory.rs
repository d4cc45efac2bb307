//! In-memory primitive store
//!
//! Holds all entries in an `FxHashMap` behind a `parking_lot::RwLock`.
//! When opened with a path, `save()` writes a JSON snapshot there and
//! `open()` loads it back. Without a path, `save()` is a no-op.
//!
//! # Snapshot Format
//!
//! ```json
//! { "version": 1, "entries": { "volume": { "Float": 0.5 }, "name": { "String": "ada" } } }
//! ```
//!
//! Non-finite floats are written as the strings `"NaN"`, `"inf"` and
//! `"-inf"`. Entries are written in key order so snapshots diff cleanly.
//! Writes go to a sibling temp file which is then renamed over the target.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, StoreError};
use crate::store::{PrimitiveStore, StoredValue};

/// Snapshot format version written by this build
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct Snapshot {
    version: u32,
    entries: BTreeMap<String, StoredValue>,
}

/// In-memory store with optional file snapshot
///
/// # Example
///
/// ```ignore
/// let store = MemoryStore::open("prefs.json")?;
/// store.set_int("volume", 7);
/// store.save()?;
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Live entries
    entries: RwLock<FxHashMap<String, StoredValue>>,
    /// Snapshot file, if persistent
    path: Option<PathBuf>,
}

impl MemoryStore {
    /// Create an empty store with no backing file
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a store backed by `path`
    ///
    /// Loads the snapshot if the file exists; a missing file yields an empty
    /// store that will create the file on first `save()`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            load_snapshot(&path)?
        } else {
            tracing::debug!(path = %path.display(), "No snapshot found, starting empty");
            FxHashMap::default()
        };

        Ok(Self {
            entries: RwLock::new(entries),
            path: Some(path),
        })
    }

    /// Snapshot file, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if the store holds no keys
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// All keys, sorted
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.read().keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl PrimitiveStore for MemoryStore {
    fn value(&self, key: &str) -> Option<StoredValue> {
        self.entries.read().get(key).cloned()
    }

    fn put(&self, key: &str, value: StoredValue) {
        self.entries.write().insert(key.to_string(), value);
    }

    fn delete_key(&self, key: &str) {
        self.entries.write().remove(key);
    }

    fn has_key(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }

    fn delete_all(&self) {
        self.entries.write().clear();
    }

    fn delete_if(&self, key: &str, expected: &StoredValue) -> bool {
        let mut entries = self.entries.write();
        if entries.get(key) == Some(expected) {
            entries.remove(key);
            true
        } else {
            false
        }
    }

    fn save(&self) -> Result<()> {
        let Some(path) = self.path.as_deref() else {
            return Ok(());
        };

        let snapshot = Snapshot {
            version: SNAPSHOT_VERSION,
            entries: self
                .entries
                .read()
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        };
        let bytes = serde_json::to_vec_pretty(&snapshot).map_err(|source| StoreError::Snapshot {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| io_error(parent, source))?;
        }
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, bytes).map_err(|source| io_error(&tmp, source))?;
        fs::rename(&tmp, path).map_err(|source| io_error(path, source))?;

        tracing::debug!(
            path = %path.display(),
            entries = snapshot.entries.len(),
            "Saved preference snapshot"
        );
        Ok(())
    }
}

fn load_snapshot(path: &Path) -> Result<FxHashMap<String, StoredValue>> {
    let bytes = fs::read(path).map_err(|source| io_error(path, source))?;
    let snapshot: Snapshot =
        serde_json::from_slice(&bytes).map_err(|source| StoreError::Snapshot {
            path: path.to_path_buf(),
            source,
        })?;

    if snapshot.version != SNAPSHOT_VERSION {
        return Err(StoreError::UnsupportedVersion {
            found: snapshot.version,
            expected: SNAPSHOT_VERSION,
        });
    }

    tracing::debug!(
        path = %path.display(),
        entries = snapshot.entries.len(),
        "Loaded preference snapshot"
    );
    Ok(snapshot.entries.into_iter().collect())
}

fn io_error(path: &Path, source: std::io::Error) -> StoreError {
    StoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}
