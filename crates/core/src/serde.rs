//! Serde helpers for site form payloads.
//!
//! Contact and upload forms post blank inputs as `""`; optional columns
//! store those as NULL.

use serde::{Deserialize, Deserializer};

/// Deserialize an optional string, mapping blank input to `None`.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.trim().is_empty()))
}

/// Deserialize a field that can be cleared: a missing key stays `None`
/// (via `#[serde(default)]`), while `null` or blank input becomes `Some(None)`.
pub fn deserialize_nullable_string<'de, D>(
    deserializer: D,
) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(Some(value.filter(|v| !v.trim().is_empty())))
}
