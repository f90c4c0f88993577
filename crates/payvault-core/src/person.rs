//! Person types.
//!
//! A person is associated with an account's legal entity: owners,
//! directors, executives, and the account representative.

use serde::{Deserialize, Serialize};

use crate::common::Address;
use crate::ids::{AccountId, PersonId};

/// A person associated with an account's legal entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    /// Unique identifier for the object.
    pub id: PersonId,
    /// String representing the object's type. Always `person`.
    #[serde(default)]
    pub object: String,
    /// The account the person is associated with.
    #[serde(default)]
    pub account: Option<AccountId>,
    /// The person's address.
    #[serde(default)]
    pub address: Option<Address>,
    /// Time at which the object was created. Measured in seconds since the
    /// Unix epoch.
    #[serde(default)]
    pub created: i64,
    /// The person's date of birth.
    #[serde(default)]
    pub dob: Option<Dob>,
    /// The person's email address.
    #[serde(default)]
    pub email: Option<String>,
    /// The person's first name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// The person's gender.
    #[serde(default)]
    pub gender: Option<String>,
    /// Whether the person's ID number was provided.
    #[serde(default)]
    pub id_number_provided: bool,
    /// The person's last name.
    #[serde(default)]
    pub last_name: Option<String>,
    /// Set of key-value pairs attached to the object.
    #[serde(default)]
    pub metadata: serde_json::Value,
    /// The person's phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// How the person is related to the account's legal entity.
    #[serde(default)]
    pub relationship: Option<Relationship>,
    /// Whether the last four digits of this person's SSN were provided.
    #[serde(default)]
    pub ssn_last_4_provided: bool,
    /// The state of the person's identity verification.
    #[serde(default)]
    pub verification: Option<Verification>,
}

/// Date of birth.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dob {
    /// Day of birth, between 1 and 31.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
    /// Month of birth, between 1 and 12.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    /// Four-digit year of birth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
}

/// How a person is related to the account's legal entity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Relationship {
    /// Whether the person is a director of the account's legal entity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director: Option<bool>,
    /// Whether the person has significant managerial responsibility.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub executive: Option<bool>,
    /// Whether the person is an owner of the account's legal entity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<bool>,
    /// The percent owned by the person of the account's legal entity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent_ownership: Option<f64>,
    /// The person's title (e.g. CEO, Support Engineer).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// The state of a person's identity verification.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Verification {
    /// A user-displayable string describing the verification state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// A machine-readable code specifying the verification state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details_code: Option<String>,
    /// An identifying document, either a passport or local ID card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<VerificationDocument>,
    /// The verification status: `unverified`, `pending`, or `verified`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// An identifying document attached to a verification.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VerificationDocument {
    /// File id of the back of the document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub back: Option<String>,
    /// A user-displayable string describing a verification failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// A machine-readable code specifying a verification failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details_code: Option<String>,
    /// File id of the front of the document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub front: Option<String>,
}

/// A deleted person stub.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedPerson {
    /// Unique identifier for the object.
    pub id: PersonId,
    /// String representing the object's type. Always `person`.
    #[serde(default)]
    pub object: String,
    /// Always true for a deleted object.
    pub deleted: bool,
}
