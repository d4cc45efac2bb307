//! Codec error types

use thiserror::Error;

/// Why a stored string could not be decoded
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Input does not match the type's grammar
    #[error("malformed {expected} value {input:?}")]
    Malformed {
        /// The rejected input
        input: String,
        /// Name of the grammar that was expected
        expected: &'static str,
    },

    /// Input is a well-formed enum value of a different enum type
    #[error("stored enum type {found} does not match requested type {expected}")]
    TypeMismatch {
        /// Requested type name
        expected: &'static str,
        /// Type name found in the input
        found: String,
    },

    /// Enum type matches but the member name is unknown
    #[error("{type_name} has no member named {variant:?}")]
    UnknownVariant {
        /// Enum type name
        type_name: &'static str,
        /// The unknown member name
        variant: String,
    },

    /// A numeric token is outside the target type's range
    #[error("numeric token {token:?} is out of range")]
    OutOfRange {
        /// The offending token
        token: String,
    },
}

impl CodecError {
    /// Whether the stored value should be kept rather than purged
    ///
    /// Only a type mismatch keeps the key: the value is well-formed and may
    /// belong to another reader.
    pub fn preserves_key(&self) -> bool {
        matches!(self, CodecError::TypeMismatch { .. })
    }

    pub(crate) fn malformed(input: &str, expected: &'static str) -> Self {
        CodecError::Malformed {
            input: input.to_string(),
            expected,
        }
    }
}
