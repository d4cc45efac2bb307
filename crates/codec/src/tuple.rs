//! Parenthesized tuple encodings for vectors and quaternions
//!
//! Float tuples encode as `(x, y, z)` with three decimals per component.
//! Int tuples encode as `(x, y, z)`. Decoding accepts `,` with or without a
//! single following space, and float components with any number of decimals.
//!
//! Non-finite components have no encoding; `validate` rejects them so callers
//! can refuse the write instead of storing a value that reads back as garbage.

use once_cell::sync::Lazy;
use prefs_core::{Quaternion, Vector2, Vector2Int, Vector3, Vector3Int, Vector4};
use regex::Regex;

use crate::error::CodecError;
use crate::StringCodec;

/// Float token: optional minus, digits, optional fraction
const FLOAT: &str = r"-?[0-9]+(?:\.[0-9]+)?";
/// Int token: optional minus, digits
const INT: &str = r"-?[0-9]+";

fn tuple_pattern(token: &str, arity: usize) -> Regex {
    let fields = vec![format!("({token})"); arity].join(r",\s?");
    Regex::new(&format!(r"^\({fields}\)$")).expect("tuple pattern is valid")
}

static FLOAT2: Lazy<Regex> = Lazy::new(|| tuple_pattern(FLOAT, 2));
static FLOAT3: Lazy<Regex> = Lazy::new(|| tuple_pattern(FLOAT, 3));
static FLOAT4: Lazy<Regex> = Lazy::new(|| tuple_pattern(FLOAT, 4));
static INT2: Lazy<Regex> = Lazy::new(|| tuple_pattern(INT, 2));
static INT3: Lazy<Regex> = Lazy::new(|| tuple_pattern(INT, 3));

/// Match `input` against `pattern` and return its `N` capture groups
pub(crate) fn fields<'a, const N: usize>(
    pattern: &Regex,
    input: &'a str,
    expected: &'static str,
) -> Result<[&'a str; N], CodecError> {
    let caps = pattern
        .captures(input)
        .ok_or_else(|| CodecError::malformed(input, expected))?;

    let mut out = [""; N];
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = caps.get(i + 1).map_or("", |m| m.as_str());
    }
    Ok(out)
}

/// Parse a grammar-checked float token
pub(crate) fn parse_f32(token: &str) -> Result<f32, CodecError> {
    match token.parse::<f32>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(CodecError::OutOfRange {
            token: token.to_string(),
        }),
    }
}

/// Reject `NaN` and infinities, which the float grammar cannot express
pub(crate) fn check_finite(value: f32) -> Result<(), CodecError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CodecError::OutOfRange {
            token: value.to_string(),
        })
    }
}

/// Parse a grammar-checked integer token
pub(crate) fn parse_int<T: std::str::FromStr>(token: &str) -> Result<T, CodecError> {
    token.parse::<T>().map_err(|_| CodecError::OutOfRange {
        token: token.to_string(),
    })
}

macro_rules! float_tuple_codec {
    ($ty:ident, $pattern:ident, $arity:literal; $($field:ident),+) => {
        impl StringCodec for $ty {
            const NAME: &'static str = stringify!($ty);

            fn encode(&self) -> String {
                let parts = [$(format!("{:.3}", self.$field)),+];
                format!("({})", parts.join(", "))
            }

            fn decode(input: &str) -> Result<Self, CodecError> {
                let [$($field),+] = fields::<$arity>(&$pattern, input, Self::NAME)?;
                Ok(Self {
                    $($field: parse_f32($field)?),+
                })
            }

            fn validate(&self) -> Result<(), CodecError> {
                $(check_finite(self.$field)?;)+
                Ok(())
            }
        }
    };
}

macro_rules! int_tuple_codec {
    ($ty:ident, $pattern:ident, $arity:literal; $($field:ident),+) => {
        impl StringCodec for $ty {
            const NAME: &'static str = stringify!($ty);

            fn encode(&self) -> String {
                let parts = [$(self.$field.to_string()),+];
                format!("({})", parts.join(", "))
            }

            fn decode(input: &str) -> Result<Self, CodecError> {
                let [$($field),+] = fields::<$arity>(&$pattern, input, Self::NAME)?;
                Ok(Self {
                    $($field: parse_int($field)?),+
                })
            }
        }
    };
}

float_tuple_codec!(Vector2, FLOAT2, 2; x, y);
float_tuple_codec!(Vector3, FLOAT3, 3; x, y, z);
float_tuple_codec!(Vector4, FLOAT4, 4; x, y, z, w);
float_tuple_codec!(Quaternion, FLOAT4, 4; x, y, z, w);
int_tuple_codec!(Vector2Int, INT2, 2; x, y);
int_tuple_codec!(Vector3Int, INT3, 3; x, y, z);
