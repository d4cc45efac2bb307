//! Provider registry
//!
//! Maps a Rust type to the pair of functions that read and write it through
//! a [`PrimitiveStore`]. Registration is generic, so a provider for `T` can
//! only be called with `T`; the map itself is keyed by `TypeId` and stores
//! providers type-erased.
//!
//! # Invariants
//!
//! - At most one provider per type. The first registration wins; later ones
//!   are ignored.
//! - Lookup of an unregistered type is not an error: `get` yields
//!   `T::default()` and `set` does nothing.
//! - No provider is ever removed.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::any::{type_name, Any, TypeId};
use std::collections::hash_map::Entry;
use std::fmt;
use std::sync::Arc;

use prefs_codec::{decode_enum, encode_enum, CodecError, StringCodec};
use prefs_core::PrefEnum;
use prefs_storage::{PrimitiveStore, StoredValue};

use crate::observer::{DecodeFailure, DecodeObserver, Recovery};

/// What a provider sees while it runs: the store and the failure observer
#[derive(Clone, Copy)]
pub struct ProviderContext<'a> {
    store: &'a dyn PrimitiveStore,
    observer: &'a dyn DecodeObserver,
}

impl<'a> ProviderContext<'a> {
    /// Create a context over a store and an observer
    pub fn new(store: &'a dyn PrimitiveStore, observer: &'a dyn DecodeObserver) -> Self {
        Self { store, observer }
    }

    /// The primitive store
    pub fn store(&self) -> &'a dyn PrimitiveStore {
        self.store
    }

    /// Report a decode failure to the observer
    pub fn report(&self, failure: &DecodeFailure<'_>) {
        self.observer.on_decode_failure(failure);
    }

    /// Read a string-encoded value with self-healing recovery
    ///
    /// - Key absent (or not a string): returns `default`, store untouched.
    /// - Decode succeeds: returns the value.
    /// - Decode fails: deletes the key unless the error preserves it or
    ///   another writer replaced the value meanwhile, reports the failure,
    ///   returns `default`.
    pub fn decode_with<T>(
        &self,
        key: &str,
        default: T,
        type_name: &'static str,
        decode: impl FnOnce(&str) -> Result<T, CodecError>,
    ) -> T {
        let Some(raw) = self.store.string(key) else {
            return default;
        };

        match decode(&raw) {
            Ok(value) => value,
            Err(err) => {
                let recovery = if err.preserves_key() {
                    Recovery::KeyPreserved
                } else {
                    self.purge(key, &raw)
                };
                self.report(&DecodeFailure {
                    key,
                    type_name,
                    raw: &raw,
                    reason: &err,
                    recovery,
                });
                default
            }
        }
    }

    /// Delete `key` if it still holds the string `raw`
    ///
    /// A concurrent writer may have replaced the bad value since it was read;
    /// that write is kept.
    pub fn purge(&self, key: &str, raw: &str) -> Recovery {
        if self.store.delete_if(key, &StoredValue::String(raw.to_string())) {
            Recovery::KeyDeleted
        } else {
            Recovery::KeyReplaced
        }
    }

    /// [`decode_with`](Self::decode_with) using the type's [`StringCodec`]
    pub fn decode_string<T: StringCodec>(&self, key: &str, default: T) -> T {
        self.decode_with(key, default, T::NAME, T::decode)
    }
}

type Getter<T> = Box<dyn Fn(&ProviderContext<'_>, &str, T) -> T + Send + Sync>;
type Setter<T> = Box<dyn Fn(&ProviderContext<'_>, &str, &T) + Send + Sync>;

struct Provider<T> {
    getter: Getter<T>,
    setter: Setter<T>,
}

/// Type-indexed provider registry
///
/// # Thread Safety
///
/// The map sits behind a `parking_lot::RwLock`. Providers are held in `Arc`s
/// and cloned out before being called, so no lock is held while a provider
/// touches the store and providers may themselves use the registry.
#[derive(Default)]
pub struct ProviderRegistry {
    providers: RwLock<FxHashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

impl ProviderRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a getter/setter pair for `T`
    ///
    /// Returns `false`, leaving the existing provider in place, if `T` is
    /// already registered.
    pub fn add_provider<T, G, S>(&self, getter: G, setter: S) -> bool
    where
        T: 'static,
        G: Fn(&ProviderContext<'_>, &str, T) -> T + Send + Sync + 'static,
        S: Fn(&ProviderContext<'_>, &str, &T) + Send + Sync + 'static,
    {
        match self.providers.write().entry(TypeId::of::<T>()) {
            Entry::Occupied(_) => {
                tracing::debug!(
                    type_name = type_name::<T>(),
                    "Provider already registered, ignoring"
                );
                false
            }
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(Provider::<T> {
                    getter: Box::new(getter),
                    setter: Box::new(setter),
                }));
                tracing::trace!(type_name = type_name::<T>(), "Registered provider");
                true
            }
        }
    }

    /// Register `T` as a self-healing string value using its [`StringCodec`]
    ///
    /// A value that fails [`StringCodec::validate`] is not written; the key
    /// keeps its previous value and a warning is logged.
    pub fn add_string_codec<T: StringCodec + 'static>(&self) -> bool {
        self.add_provider::<T, _, _>(
            |ctx, key, default| ctx.decode_string(key, default),
            |ctx, key, value| match value.validate() {
                Ok(()) => ctx.store().set_string(key, &value.encode()),
                Err(err) => tracing::warn!(
                    key,
                    type_name = T::NAME,
                    error = %err,
                    "Value has no string encoding, write skipped"
                ),
            },
        )
    }

    /// Register the enum `E`, stored as `"<TypeName> <MemberName>"`
    pub fn add_enum<E: PrefEnum>(&self) -> bool {
        self.add_provider::<E, _, _>(
            |ctx, key, default| ctx.decode_with(key, default, E::TYPE_NAME, decode_enum::<E>),
            |ctx, key, value| ctx.store().set_string(key, &encode_enum(value)),
        )
    }

    /// Check whether `T` has a provider
    pub fn has_provider<T: 'static>(&self) -> bool {
        self.providers.read().contains_key(&TypeId::of::<T>())
    }

    /// Number of registered providers
    pub fn len(&self) -> usize {
        self.providers.read().len()
    }

    /// Check if no provider is registered
    pub fn is_empty(&self) -> bool {
        self.providers.read().is_empty()
    }

    /// Read `key` as `T`
    ///
    /// Returns `T::default()` (not `default`) when `T` has no provider.
    pub fn get<T: Default + 'static>(&self, ctx: &ProviderContext<'_>, key: &str, default: T) -> T {
        match self.provider::<T>() {
            Some(provider) => (provider.getter)(ctx, key, default),
            None => {
                tracing::trace!(type_name = type_name::<T>(), key, "No provider for get");
                T::default()
            }
        }
    }

    /// Write `value` under `key`; no-op when `T` has no provider
    pub fn set<T: 'static>(&self, ctx: &ProviderContext<'_>, key: &str, value: &T) {
        match self.provider::<T>() {
            Some(provider) => (provider.setter)(ctx, key, value),
            None => tracing::trace!(type_name = type_name::<T>(), key, "No provider for set"),
        }
    }

    fn provider<T: 'static>(&self) -> Option<Arc<Provider<T>>> {
        let erased = self.providers.read().get(&TypeId::of::<T>())?.clone();
        erased.downcast::<Provider<T>>().ok()
    }
}

impl fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.len())
            .finish()
    }
}
