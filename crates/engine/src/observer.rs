//! Decode failure diagnostics
//!
//! Providers never raise on bad stored data. They report through a
//! [`DecodeObserver`] and fall back to the caller's default. The default
//! observer discards reports; [`TracingObserver`] forwards them to `tracing`.

use std::fmt;

/// What happened to the stored value after a failed decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recovery {
    /// The key was deleted from the store
    KeyDeleted,
    /// The key was left untouched
    KeyPreserved,
    /// The key was rewritten while the failed value was being decoded; the
    /// new value was kept
    KeyReplaced,
}

/// A failed decode, as reported to the observer
#[derive(Clone, Copy)]
pub struct DecodeFailure<'a> {
    /// Preference key
    pub key: &'a str,
    /// Requested type
    pub type_name: &'static str,
    /// Raw stored string
    pub raw: &'a str,
    /// Why decoding failed
    pub reason: &'a dyn fmt::Display,
    /// What was done with the key
    pub recovery: Recovery,
}

/// Receives decode failure reports
pub trait DecodeObserver: Send + Sync {
    /// Called once per failed decode, after recovery was applied
    fn on_decode_failure(&self, failure: &DecodeFailure<'_>);
}

/// Discards all reports
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl DecodeObserver for NoopObserver {
    fn on_decode_failure(&self, _failure: &DecodeFailure<'_>) {}
}

/// Logs reports through `tracing`
///
/// Deleted keys log at `warn`; preserved keys (type confusion) log at `error`
/// since they point at two readers sharing one key.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl DecodeObserver for TracingObserver {
    fn on_decode_failure(&self, failure: &DecodeFailure<'_>) {
        match failure.recovery {
            Recovery::KeyDeleted => tracing::warn!(
                target: "typedprefs::decode",
                key = failure.key,
                type_name = failure.type_name,
                raw = failure.raw,
                reason = %failure.reason,
                "Malformed preference value, key deleted"
            ),
            Recovery::KeyPreserved => tracing::error!(
                target: "typedprefs::decode",
                key = failure.key,
                type_name = failure.type_name,
                raw = failure.raw,
                reason = %failure.reason,
                "Preference holds a value of another type, key kept"
            ),
            Recovery::KeyReplaced => tracing::debug!(
                target: "typedprefs::decode",
                key = failure.key,
                type_name = failure.type_name,
                raw = failure.raw,
                reason = %failure.reason,
                "Malformed preference value was overwritten before delete"
            ),
        }
    }
}
