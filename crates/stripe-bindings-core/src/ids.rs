//! Identifier types for Stripe objects.
//!
//! Stripe identifiers are opaque strings carrying a type prefix
//! (`cus_`, `tr_`, ...). Each identifier type here validates that prefix on
//! parse so an id for one resource cannot be handed to another.
//!
//! # Macro-based ID Types
//!
//! The `prefixed_id_type!` macro reduces boilerplate for the identifier types,
//! ensuring consistent implementation of serialization, parsing, and display traits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Macro to define a prefixed string identifier type with standard trait implementations.
///
/// This macro generates a newtype wrapper around `String` with implementations for:
/// - `Clone`, `PartialEq`, `Eq`, `Hash`
/// - `Serialize`, `Deserialize` (as string, prefix checked)
/// - `FromStr`, `Display`, `Debug`
/// - `TryFrom<String>`, `TryFrom<&str>`, `Into<String>`
/// - `AsRef<str>`
///
/// # Example
///
/// ```ignore
/// prefixed_id_type!(ChargeId, "ch_", "A charge identifier.");
/// let id: ChargeId = "ch_123".parse().unwrap();
/// ```
macro_rules! prefixed_id_type {
    ($name:ident, $prefix:literal, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// The prefix every identifier of this type starts with.
            pub const PREFIX: &'static str = $prefix;

            /// Return the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $name {
            type Err = IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if s.is_empty() {
                    return Err(IdError::Empty);
                }
                if !s.starts_with($prefix) || s.len() == $prefix.len() {
                    return Err(IdError::InvalidPrefix {
                        expected: $prefix,
                        value: s.to_string(),
                    });
                }
                Ok(Self(s.to_string()))
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl TryFrom<&str> for $name {
            type Error = IdError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

prefixed_id_type!(CustomerId, "cus_", "A customer identifier (`cus_...`).");
prefixed_id_type!(TransferId, "tr_", "A transfer identifier (`tr_...`).");
prefixed_id_type!(
    RecipientId,
    "rp_",
    "A recipient identifier (`rp_...`).\n\nRecipients are the legacy destination of a transfer."
);

/// Errors that can occur when parsing identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    /// The input is empty.
    #[error("identifier is empty")]
    Empty,

    /// The input does not carry the expected prefix.
    #[error("invalid identifier {value:?}: expected prefix {expected:?}")]
    InvalidPrefix {
        /// The prefix the identifier type requires.
        expected: &'static str,
        /// The rejected input.
        value: String,
    },
}
