//! The preferences facade
//!
//! `Prefs` owns a provider registry (seeded with the built-ins at
//! construction), shares a primitive store, and routes typed calls through
//! the registry.
//!
//! # Example
//!
//! ```ignore
//! let prefs = Prefs::in_memory();
//! prefs.set("spawn", Vector3::new(1.0, 2.5, -3.0));
//! let spawn = prefs.get("spawn", Vector3::ZERO);
//! ```

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::any::type_name;
use std::fmt;
use std::sync::Arc;

use prefs_codec::StringCodec;
use prefs_core::PrefEnum;
use prefs_storage::{MemoryStore, PrimitiveStore};

use crate::builtins::register_builtins;
use crate::config::{CorruptBlobPolicy, PrefsConfig};
use crate::error::{PrefsError, Result};
use crate::observer::{DecodeFailure, DecodeObserver, NoopObserver, TracingObserver};
use crate::registry::{ProviderContext, ProviderRegistry};

/// Typed preferences over a primitive store
///
/// # Thread Safety
///
/// `Prefs` is `Send + Sync`. The store and registry each guard their own
/// state; there is no atomicity across keys. Self-healing deletes only
/// remove the exact value that failed to decode, so a concurrent `set` on the
/// same key is never lost to a purge.
pub struct Prefs {
    /// Shared primitive store
    store: Arc<dyn PrimitiveStore>,
    /// Type to provider map
    registry: ProviderRegistry,
    /// Decode failure sink
    observer: Arc<dyn DecodeObserver>,
    /// Corrupt blob handling for `get_serializable`
    blob_policy: CorruptBlobPolicy,
}

impl Prefs {
    /// Create over `store` with default settings
    pub fn new(store: Arc<dyn PrimitiveStore>) -> Self {
        Self::with_config(store, &PrefsConfig::default())
    }

    /// Create over `store`, taking policy and logging from `config`
    ///
    /// `config.path` is ignored here; the store is already built.
    pub fn with_config(store: Arc<dyn PrimitiveStore>, config: &PrefsConfig) -> Self {
        let observer: Arc<dyn DecodeObserver> = if config.log_decode_failures {
            Arc::new(TracingObserver)
        } else {
            Arc::new(NoopObserver)
        };

        let registry = ProviderRegistry::new();
        register_builtins(&registry);

        Self {
            store,
            registry,
            observer,
            blob_policy: config.blob_policy,
        }
    }

    /// Create over a fresh in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Open a [`MemoryStore`] from `config.path` (or in memory if unset)
    pub fn open(config: &PrefsConfig) -> Result<Self> {
        let store = match &config.path {
            Some(path) => MemoryStore::open(path)?,
            None => MemoryStore::new(),
        };
        Ok(Self::with_config(Arc::new(store), config))
    }

    /// Replace the decode failure observer
    pub fn with_observer(mut self, observer: Arc<dyn DecodeObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// The shared primitive store
    pub fn store(&self) -> &Arc<dyn PrimitiveStore> {
        &self.store
    }

    /// The provider registry
    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Current corrupt blob policy
    pub fn blob_policy(&self) -> CorruptBlobPolicy {
        self.blob_policy
    }

    // ========================================================================
    // Provider registration
    // ========================================================================

    /// Register a getter/setter pair for `T`; ignored if `T` has one
    pub fn add_provider<T, G, S>(&self, getter: G, setter: S) -> bool
    where
        T: 'static,
        G: Fn(&ProviderContext<'_>, &str, T) -> T + Send + Sync + 'static,
        S: Fn(&ProviderContext<'_>, &str, &T) + Send + Sync + 'static,
    {
        self.registry.add_provider(getter, setter)
    }

    /// Register a type with a [`StringCodec`]
    pub fn add_string_codec<T: StringCodec + 'static>(&self) -> bool {
        self.registry.add_string_codec::<T>()
    }

    /// Register an enum type
    pub fn add_enum<E: PrefEnum>(&self) -> bool {
        self.registry.add_enum::<E>()
    }

    // ========================================================================
    // Typed access
    // ========================================================================

    /// Write `value` under `key`
    ///
    /// Silently does nothing if `T` has no provider.
    pub fn set<T: 'static>(&self, key: &str, value: T) {
        self.registry.set(&self.context(), key, &value);
    }

    /// Read `key` as `T`
    ///
    /// Returns `default` if the key is absent or its value is unreadable,
    /// and `T::default()` if `T` has no provider.
    pub fn get<T: Default + 'static>(&self, key: &str, default: T) -> T {
        self.registry.get(&self.context(), key, default)
    }

    // ========================================================================
    // Serializable passthrough
    // ========================================================================

    /// Store any serializable value as a base64-encoded bincode blob
    pub fn set_serializable<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let bytes = bincode::serialize(value).map_err(PrefsError::Serialize)?;
        self.store.set_string(key, &STANDARD.encode(bytes));
        Ok(())
    }

    /// Read a value stored by [`set_serializable`](Self::set_serializable)
    ///
    /// An absent or empty string returns `default` without decoding. A blob
    /// that fails to decode is handled per [`CorruptBlobPolicy`]: by default
    /// it is returned as `PrefsError::CorruptBlob` with the key left intact.
    pub fn get_serializable<T: DeserializeOwned>(&self, key: &str, default: T) -> Result<T> {
        let raw = self.store.get_string(key, "");
        if raw.is_empty() {
            return Ok(default);
        }

        let reason = match decode_blob::<T>(&raw) {
            Ok(value) => return Ok(value),
            Err(reason) => reason,
        };

        match self.blob_policy {
            CorruptBlobPolicy::Propagate => Err(PrefsError::CorruptBlob {
                key: key.to_string(),
                reason,
            }),
            CorruptBlobPolicy::SelfHeal => {
                let ctx = self.context();
                ctx.report(&DecodeFailure {
                    key,
                    type_name: type_name::<T>(),
                    raw: &raw,
                    reason: &reason,
                    recovery: ctx.purge(key, &raw),
                });
                Ok(default)
            }
        }
    }

    // ========================================================================
    // Store passthroughs
    // ========================================================================

    /// Remove `key`
    pub fn delete_key(&self, key: &str) {
        self.store.delete_key(key);
    }

    /// Check whether `key` holds a value
    pub fn has_key(&self, key: &str) -> bool {
        self.store.has_key(key)
    }

    /// Remove every key
    pub fn delete_all(&self) {
        self.store.delete_all();
    }

    /// Flush the store
    pub fn save(&self) -> Result<()> {
        self.store.save()?;
        Ok(())
    }

    fn context(&self) -> ProviderContext<'_> {
        ProviderContext::new(self.store.as_ref(), self.observer.as_ref())
    }
}

impl fmt::Debug for Prefs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Prefs")
            .field("registry", &self.registry)
            .field("blob_policy", &self.blob_policy)
            .finish_non_exhaustive()
    }
}

fn decode_blob<T: DeserializeOwned>(raw: &str) -> std::result::Result<T, String> {
    let bytes = STANDARD
        .decode(raw)
        .map_err(|e| format!("invalid base64: {e}"))?;
    bincode::deserialize(&bytes).map_err(|e| format!("invalid payload: {e}"))
}
