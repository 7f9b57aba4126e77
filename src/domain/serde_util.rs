//! Custom serde helpers for backend wire formats.

use serde::{Deserialize, Deserializer};

/// Deserializes a field into `Some(value)` even when the value is JSON
/// `null`.
///
/// The backend signals success by the *presence* of the envelope's success
/// key, whatever its value. A plain `Option<Value>` collapses a present
/// `null` into "absent"; routing through this helper (with
/// `#[serde(default)]` covering the truly-absent case) keeps the two apart.
pub(crate) fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
