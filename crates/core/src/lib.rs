//! Core value types for typedprefs
//!
//! This crate defines the structured values that can be stored as preferences:
//! - Vectors: `Vector2`, `Vector2Int`, `Vector3`, `Vector3Int`, `Vector4`
//! - Rotation: `Quaternion`
//! - Display mode: `Resolution`
//! - Enums: the `PrefEnum` trait and the `pref_enum!` declaration macro
//!
//! All types are plain data. Encoding them to store primitives is the job of
//! `prefs-codec`; dispatching by type is the job of `prefs-engine`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod enums;
pub mod resolution;
pub mod vector;

// Re-exports
pub use enums::PrefEnum;
pub use resolution::Resolution;
pub use vector::{Quaternion, Vector2, Vector2Int, Vector3, Vector3Int, Vector4};
