//! Generic JSON serialize/deserialize helpers.
//!
//! Thin wrappers over [`serde_json`] used to round-trip plain data types
//! such as [`Rectangle`](crate::geometry::Rectangle). Errors propagate
//! untranslated.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Serializes `value` to compact JSON.
///
/// Delegates entirely to [`serde_json::to_string`]; key order and
/// formatting are its defaults (no pretty-printing).
pub fn to_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

/// Deserializes a `T` from JSON text.
///
/// Parse errors and shape mismatches surface as [`serde_json::Error`].
pub fn from_json<T: DeserializeOwned>(text: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(text)
}
