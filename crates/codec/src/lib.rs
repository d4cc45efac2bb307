//! String codecs for typedprefs
//!
//! Structured values are stored as strings in the primitive store. This crate
//! owns those grammars:
//!
//! | Type | Encoded form |
//! |------|--------------|
//! | `Vector2` / `Vector3` / `Vector4` / `Quaternion` | `(1.000, 2.500, -3.000)` |
//! | `Vector2Int` / `Vector3Int` | `(1, 2, 3)` |
//! | `Resolution` | `1920 x 1080 @ 60Hz` |
//! | enums | `Quality High` |
//!
//! Encoding writes floats with three decimals. Decoding accepts any number of
//! digits and always uses `.` as the decimal separator.
//!
//! Decoders are pure: they report a [`CodecError`] and leave recovery (deleting
//! the key, falling back to a default) to the caller.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod enums;
pub mod error;
pub mod resolution;
pub mod tuple;

// Re-exports
pub use enums::{decode_enum, encode_enum};
pub use error::CodecError;

/// A value with a string encoding
pub trait StringCodec: Sized {
    /// Short type name used in diagnostics
    const NAME: &'static str;

    /// Encode to the stored string form
    fn encode(&self) -> String;

    /// Decode from the stored string form
    fn decode(input: &str) -> Result<Self, CodecError>;

    /// Check that `encode` yields a string `decode` accepts
    ///
    /// Float tuples holding `NaN` or an infinity have no encoding in the
    /// grammar and fail here.
    fn validate(&self) -> Result<(), CodecError> {
        Ok(())
    }
}
