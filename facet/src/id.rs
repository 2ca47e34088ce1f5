//! Typed identifiers for entities and their state variants.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declares a string-backed identifier. Entity ids and state names
/// never mix, though both are plain strings with no format rules.
macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap anything string-like.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// The identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }
    };
}

string_id! {
    /// Stable identifier of an entity.
    EntityId
}

string_id! {
    /// Name of an internal-state variant an entity can be put into (e.g. `on`, `off`).
    StateVariant
}

impl StateVariant {
    /// The single variant reported by entities without internal state.
    pub fn default_state() -> Self {
        Self::new("default")
    }
}
