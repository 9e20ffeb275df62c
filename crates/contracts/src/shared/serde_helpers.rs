//! Serde helpers for backend documents that send `null` for empty fields

use serde::{Deserialize, Deserializer};

/// Deserialize any `Default` value, treating `null` as the default
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
