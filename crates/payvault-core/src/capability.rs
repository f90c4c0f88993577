//! Account capability types.

use serde::{Deserialize, Serialize};

use crate::ids::{AccountId, CapabilityId};

/// A capability enabling a piece of platform functionality for an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Capability {
    /// The identifier for the capability (e.g. `card_payments`).
    pub id: CapabilityId,
    /// String representing the object's type. Always `capability`.
    #[serde(default)]
    pub object: String,
    /// The account for which the capability enables functionality.
    #[serde(default)]
    pub account: Option<AccountId>,
    /// Whether the capability has been requested.
    #[serde(default)]
    pub requested: bool,
    /// Time at which the capability was requested, in seconds since the
    /// Unix epoch.
    #[serde(default)]
    pub requested_at: Option<i64>,
    /// Fields that must be collected to keep the capability enabled.
    #[serde(default)]
    pub requirements: Option<CapabilityRequirements>,
    /// The status of the capability.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CapabilityState>,
}

/// Fields that must be collected to keep a capability enabled.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CapabilityRequirements {
    /// The date the `currently_due` fields must be collected by, in seconds
    /// since the Unix epoch.
    #[serde(default)]
    pub current_deadline: Option<i64>,
    /// Fields that need to be collected to keep the capability enabled.
    #[serde(default)]
    pub currently_due: Vec<String>,
    /// If the capability is disabled, why.
    #[serde(default)]
    pub disabled_reason: Option<String>,
    /// Fields that will become required once a volume threshold is reached.
    #[serde(default)]
    pub eventually_due: Vec<String>,
    /// Fields that were not collected by the deadline.
    #[serde(default)]
    pub past_due: Vec<String>,
    /// Fields that may become required pending verification results.
    #[serde(default)]
    pub pending_verification: Vec<String>,
}

/// The status of a capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapabilityState {
    /// The capability is enabled.
    Active,
    /// The capability was disabled by the platform.
    Disabled,
    /// The capability is not enabled.
    Inactive,
    /// The capability is under review.
    Pending,
    /// The capability has not been requested.
    Unrequested,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_capability_response() {
        let json = r#"{
            "id": "card_payments",
            "object": "capability",
            "account": "acct_1FgemsA4XkCNojRw",
            "requested": true,
            "requested_at": 1574126948,
            "requirements": {"currently_due": ["company.tax_id"], "eventually_due": [], "past_due": [], "pending_verification": []},
            "status": "pending"
        }"#;

        let capability: Capability = serde_json::from_str(json).unwrap();
        assert_eq!(capability.status, Some(CapabilityState::Pending));
        assert!(capability.requested);
        assert_eq!(
            capability.requirements.unwrap().currently_due,
            vec!["company.tax_id"]
        );
    }
}
