//! Primitive store layer for typedprefs
//!
//! This crate defines the collaborator the typed layer sits on:
//! - `PrimitiveStore`: int/float/string table with delete, has-key and save
//! - `StoredValue`: the three native kinds a key can hold
//! - `MemoryStore`: in-memory implementation with optional JSON snapshot file
//!
//! The typed layer never depends on how a store persists; it only needs the
//! trait.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod memory;
pub mod store;

// Re-exports
pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use store::{PrimitiveStore, StoredValue};
