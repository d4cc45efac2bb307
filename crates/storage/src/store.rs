//! The primitive store contract
//!
//! A store maps string keys to one of three native kinds (int, float,
//! string). Typed getters return the caller's default when the key is absent
//! or holds a different kind, the same way a platform preference table does.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A native value held under a key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StoredValue {
    /// 32-bit signed integer
    Int(i32),
    /// 32-bit float
    Float(#[serde(with = "float_repr")] f32),
    /// UTF-8 string
    String(String),
}

/// JSON has no non-finite numbers: `NaN`, `inf` and `-inf` are written as
/// strings, everything else as a plain number.
mod float_repr {
    use serde::de::{Error, Unexpected};
    use serde::{Deserialize, Deserializer, Serializer};

    const EXPECTED: &str = r#"a number, "NaN", "inf" or "-inf""#;

    pub fn serialize<S: Serializer>(value: &f32, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_nan() {
            serializer.serialize_str("NaN")
        } else if *value == f32::INFINITY {
            serializer.serialize_str("inf")
        } else if *value == f32::NEG_INFINITY {
            serializer.serialize_str("-inf")
        } else {
            serializer.serialize_f32(*value)
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f32),
        Text(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f32, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(v) => Ok(v),
            Repr::Text(s) => match s.as_str() {
                "NaN" => Ok(f32::NAN),
                "inf" => Ok(f32::INFINITY),
                "-inf" => Ok(f32::NEG_INFINITY),
                other => Err(D::Error::invalid_value(Unexpected::Str(other), &EXPECTED)),
            },
        }
    }
}

impl StoredValue {
    /// Kind name, for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            StoredValue::Int(_) => "int",
            StoredValue::Float(_) => "float",
            StoredValue::String(_) => "string",
        }
    }
}

impl From<i32> for StoredValue {
    fn from(v: i32) -> Self {
        StoredValue::Int(v)
    }
}

impl From<f32> for StoredValue {
    fn from(v: f32) -> Self {
        StoredValue::Float(v)
    }
}

impl From<String> for StoredValue {
    fn from(v: String) -> Self {
        StoredValue::String(v)
    }
}

impl From<&str> for StoredValue {
    fn from(v: &str) -> Self {
        StoredValue::String(v.to_string())
    }
}

/// Primitive key-value preference store
///
/// Implementors provide the raw `value`/`put` access plus key management.
/// The typed `get_*`/`set_*` methods are provided on top of those.
///
/// # Thread Safety
///
/// Stores are shared behind `Arc<dyn PrimitiveStore>`, so implementations
/// must be `Send + Sync`. No atomicity across multiple keys is expected.
/// `delete_if` is the one compare-and-act operation on a single key.
pub trait PrimitiveStore: Send + Sync {
    /// Read the raw value under `key`
    fn value(&self, key: &str) -> Option<StoredValue>;

    /// Write a raw value, replacing whatever `key` held
    fn put(&self, key: &str, value: StoredValue);

    /// Remove `key`; no-op if absent
    fn delete_key(&self, key: &str);

    /// Check whether `key` holds any value
    fn has_key(&self, key: &str) -> bool;

    /// Remove every key
    fn delete_all(&self);

    /// Flush to durable storage
    fn save(&self) -> Result<()>;

    /// Remove `key` only if it still holds `expected`
    ///
    /// Returns whether the key was removed. The provided version checks and
    /// deletes in two calls; stores shared across threads should override it
    /// to do both under one lock.
    fn delete_if(&self, key: &str, expected: &StoredValue) -> bool {
        if self.value(key).as_ref() == Some(expected) {
            self.delete_key(key);
            true
        } else {
            false
        }
    }

    /// Read an int, or `default` if absent or not an int
    fn get_int(&self, key: &str, default: i32) -> i32 {
        match self.value(key) {
            Some(StoredValue::Int(v)) => v,
            _ => default,
        }
    }

    /// Write an int
    fn set_int(&self, key: &str, value: i32) {
        self.put(key, StoredValue::Int(value));
    }

    /// Read a float, or `default` if absent or not a float
    fn get_float(&self, key: &str, default: f32) -> f32 {
        match self.value(key) {
            Some(StoredValue::Float(v)) => v,
            _ => default,
        }
    }

    /// Write a float
    fn set_float(&self, key: &str, value: f32) {
        self.put(key, StoredValue::Float(value));
    }

    /// Read a string, or `default` if absent or not a string
    fn get_string(&self, key: &str, default: &str) -> String {
        self.string(key).unwrap_or_else(|| default.to_string())
    }

    /// Write a string
    fn set_string(&self, key: &str, value: &str) {
        self.put(key, StoredValue::String(value.to_string()));
    }

    /// Read a string, or `None` if absent or not a string
    fn string(&self, key: &str) -> Option<String> {
        match self.value(key) {
            Some(StoredValue::String(v)) => Some(v),
            _ => None,
        }
    }
}
