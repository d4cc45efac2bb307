//! Enum encoding: `<TypeName> <MemberName>`
//!
//! The type name guards against reading one enum's value as another. A
//! well-formed value carrying a different type name is reported as
//! [`CodecError::TypeMismatch`], which callers treat as "not mine" rather
//! than as corruption.

use once_cell::sync::Lazy;
use prefs_core::PrefEnum;
use regex::Regex;

use crate::error::CodecError;

static ENUM_VALUE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([_\p{L}]\w*)\s+(\w+)$").expect("enum pattern is valid")
});

/// Encode an enum member as `"<TypeName> <MemberName>"`
pub fn encode_enum<E: PrefEnum>(value: &E) -> String {
    format!("{} {}", E::TYPE_NAME, value.variant_name())
}

/// Decode an enum member
///
/// Member names match case-insensitively; the type name must match exactly.
pub fn decode_enum<E: PrefEnum>(input: &str) -> Result<E, CodecError> {
    let caps = ENUM_VALUE
        .captures(input)
        .ok_or_else(|| CodecError::malformed(input, E::TYPE_NAME))?;
    let (type_name, variant) = (&caps[1], &caps[2]);

    if type_name != E::TYPE_NAME {
        return Err(CodecError::TypeMismatch {
            expected: E::TYPE_NAME,
            found: type_name.to_string(),
        });
    }

    E::from_variant_name(variant).ok_or_else(|| CodecError::UnknownVariant {
        type_name: E::TYPE_NAME,
        variant: variant.to_string(),
    })
}
