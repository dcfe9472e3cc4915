//! Newtype IDs for type-safe identifiers.
//!
//! The backend hands most identifiers out as strings, some as integers.
//! Wrapping them keeps a SKU from being passed where an attribute id is
//! expected.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(u64),
}

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        // The backend is inconsistent about quoting ids, accept both.
        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                match RawId::deserialize(deserializer)? {
                    RawId::Text(s) => Ok(Self(s)),
                    RawId::Number(n) => Ok(Self(n.to_string())),
                }
            }
        }

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<u64> for $name {
            fn from(n: u64) -> Self {
                Self(n.to_string())
            }
        }

        impl From<u32> for $name {
            fn from(n: u32) -> Self {
                Self(n.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Stock keeping unit, the product's unique identifier.
    Sku
);
define_id!(
    /// Backend id of a selectable attribute (e.g. `93` for colour).
    AttributeId
);
define_id!(
    /// Id of the quote (in-progress cart) items are added to.
    QuoteId
);
define_id!(
    /// Id of a line already in the cart.
    CartItemId
);
