use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier of a record owned by the backend.
///
/// Ids are assigned server-side (document ids), so the client only ever
/// carries them around as opaque strings.
pub trait AggregateId:
    Clone + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Raw id as sent on the wire
    fn as_str(&self) -> &str;

    /// Build an id from a raw string (route params, table rows)
    fn from_string(s: &str) -> Result<Self, String>;
}

/// Declares a string-backed id newtype implementing [`AggregateId`].
#[macro_export]
macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        #[derive(serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }
        }

        impl $crate::domain::common::AggregateId for $name {
            fn as_str(&self) -> &str {
                &self.0
            }

            fn from_string(s: &str) -> Result<Self, String> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(format!("Invalid {}: empty id", stringify!($name)));
                }
                Ok(Self(trimmed.to_string()))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}
