//! Identifier types for Payvault resources.
//!
//! The API hands out opaque, prefixed string identifiers (`acct_...`,
//! `person_...`, `evt_...`). Each resource gets its own newtype so that an
//! account id cannot be passed where a person id is expected.
//!
//! # Macro-based ID types
//!
//! The `string_id_type!` macro reduces boilerplate for the identifier
//! newtypes, ensuring consistent implementation of serialization, parsing,
//! and display traits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Macro to define an opaque string identifier type with standard trait
/// implementations.
///
/// Generates a newtype wrapper around `String` with implementations for:
/// - `Clone`, `PartialEq`, `Eq`, `Hash`
/// - `Serialize`, `Deserialize` (as a plain string)
/// - `FromStr`, `Display`, `Debug`
/// - `TryFrom<String>`, `Into<String>`
/// - `AsRef<str>`
///
/// The only validation is non-emptiness; the API treats identifiers as
/// opaque and so does this crate.
macro_rules! string_id_type {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Create an identifier from a string.
            ///
            /// # Errors
            ///
            /// Returns an error if the string is empty.
            pub fn new(id: impl Into<String>) -> Result<Self, IdError> {
                let id = id.into();
                if id.is_empty() {
                    return Err(IdError::Empty);
                }
                Ok(Self(id))
            }

            /// Return the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $name {
            type Err = IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
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

string_id_type!(AccountId, "A connected account identifier (`acct_...`).");
string_id_type!(PersonId, "A person identifier (`person_...`).");
string_id_type!(
    CapabilityId,
    "A capability identifier. Capabilities are keyed by name (e.g. `card_payments`)."
);
string_id_type!(CustomerId, "A customer identifier (`cus_...`).");
string_id_type!(SubscriptionId, "A subscription identifier (`sub_...`).");
string_id_type!(CouponId, "A coupon identifier.");
string_id_type!(ApplePayDomainId, "An Apple Pay domain identifier (`apwc_...`).");
string_id_type!(
    EarlyFraudWarningId,
    "An early fraud warning identifier (`issfr_...`)."
);
string_id_type!(ChargeId, "A charge identifier (`ch_...`).");
string_id_type!(SourceId, "A payment source identifier (`src_...`).");
string_id_type!(EventId, "An event identifier (`evt_...`).");

/// Errors that can occur when parsing identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    /// The input string is empty.
    #[error("identifier must not be empty")]
    Empty,
}
