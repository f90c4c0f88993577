//! Apple Pay domain registration types.

use serde::{Deserialize, Serialize};

use crate::ids::ApplePayDomainId;

/// A web domain registered for Apple Pay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplePayDomain {
    /// Unique identifier for the object.
    pub id: ApplePayDomainId,
    /// String representing the object's type. Always `apple_pay_domain`.
    #[serde(default)]
    pub object: String,
    /// Time at which the object was created. Measured in seconds since the
    /// Unix epoch.
    #[serde(default)]
    pub created: i64,
    /// The registered domain name.
    pub domain_name: String,
    /// Whether the object exists in live mode.
    #[serde(default)]
    pub livemode: bool,
}

/// A deleted Apple Pay domain stub.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedApplePayDomain {
    /// Unique identifier for the object.
    pub id: ApplePayDomainId,
    /// String representing the object's type. Always `apple_pay_domain`.
    #[serde(default)]
    pub object: String,
    /// Always true for a deleted object.
    pub deleted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_domain_response() {
        let json = r#"{
            "id": "apwc_5wMXl7rzDnxOsn",
            "object": "apple_pay_domain",
            "created": 1574126948,
            "domain_name": "pay.rocket-rides.example",
            "livemode": false
        }"#;

        let domain: ApplePayDomain = serde_json::from_str(json).unwrap();
        assert_eq!(domain.domain_name, "pay.rocket-rides.example");
        assert!(!domain.livemode);
    }
}
