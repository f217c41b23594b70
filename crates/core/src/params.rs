//! Deserializers for optional query-string parameters.

use std::fmt::Display;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer};

/// Reads an optional parameter through `FromStr`. A missing or blank value
/// means the parameter is not set.
///
/// Use with `#[serde(default, deserialize_with = "...")]` so that an absent
/// key also yields `None`.
pub fn optional<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(de::Error::custom),
    }
}
