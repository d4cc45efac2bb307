//! Typed preferences engine
//!
//! This crate ties the layers together:
//! - `ProviderRegistry`: type identity to (getter, setter) pairs
//! - `Prefs`: the facade callers use for typed get/set, serializable blobs,
//!   and store passthroughs
//! - `DecodeObserver`: injectable diagnostics for decode failures
//! - `PrefsConfig`: store path and failure policy, loadable from TOML
//!
//! # Failure Policy
//!
//! Typed `get`/`set` never fail. An unregistered type reads as its
//! `Default` and ignores writes. A malformed stored string is deleted and the
//! caller's default returned. A well-formed enum value of another enum type
//! is left in place and the caller's default returned. Only the serializable
//! passthrough returns `Result`.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod builtins;
pub mod config;
pub mod error;
pub mod observer;
pub mod prefs;
pub mod registry;

// Re-exports
pub use config::{CorruptBlobPolicy, PrefsConfig};
pub use error::{PrefsError, Result};
pub use observer::{DecodeFailure, DecodeObserver, NoopObserver, Recovery, TracingObserver};
pub use prefs::Prefs;
pub use registry::{ProviderContext, ProviderRegistry};
