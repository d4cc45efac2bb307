//! Public types for the typedprefs API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// ============================================================================
// Value types
// ============================================================================

pub use prefs_core::{Quaternion, Resolution, Vector2, Vector2Int, Vector3, Vector3Int, Vector4};

// Enum support: the trait and the declaration macro
pub use prefs_core::{pref_enum, PrefEnum};

// ============================================================================
// Store
// ============================================================================

pub use prefs_storage::{MemoryStore, PrimitiveStore, StoreError, StoredValue};

// ============================================================================
// Codecs
// ============================================================================

pub use prefs_codec::{decode_enum, encode_enum, CodecError, StringCodec};

// ============================================================================
// Facade, registry, diagnostics, configuration
// ============================================================================

pub use prefs_engine::{
    CorruptBlobPolicy, DecodeFailure, DecodeObserver, NoopObserver, Prefs, PrefsConfig,
    PrefsError, ProviderContext, ProviderRegistry, Recovery, Result, TracingObserver,
};
