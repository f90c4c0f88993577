//! Collection response envelope.

use serde::{Deserialize, Serialize};

/// A page of objects returned by a list endpoint.
///
/// Cursors for the next page are derived from the ids of the first and
/// last items; the SDK carries cursor values verbatim and does not iterate
/// pages on the caller's behalf.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct List<T> {
    /// String representing the object's type. Always `list`.
    pub object: String,
    /// The page of items.
    pub data: Vec<T>,
    /// Whether another page exists after this one.
    pub has_more: bool,
    /// URL of the list endpoint that produced this page.
    #[serde(default)]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apple_pay::ApplePayDomain;

    #[test]
    fn deserializes_list_envelope() {
        let json = r#"{
            "object": "list",
            "data": [
                {"id": "apwc_1", "object": "apple_pay_domain", "created": 1574126900, "domain_name": "a.example", "livemode": false},
                {"id": "apwc_2", "object": "apple_pay_domain", "created": 1574126948, "domain_name": "b.example", "livemode": false}
            ],
            "has_more": true,
            "url": "/v1/apple_pay/domains"
        }"#;

        let list: List<ApplePayDomain> = serde_json::from_str(json).unwrap();
        assert_eq!(list.data.len(), 2);
        assert!(list.has_more);
        assert_eq!(list.data[1].domain_name, "b.example");
    }
}
