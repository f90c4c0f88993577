//! Event envelope types.
//!
//! Events describe changes to resources and are delivered to subscribers
//! via webhooks. The payload in `data.object` keeps its wire form as
//! `serde_json::Value`; use [`Event::object_as`] to materialize it into a
//! concrete resource type once the event type is known.

use serde::{Deserialize, Serialize};

use crate::ids::EventId;

/// An event delivered by the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier for the object.
    pub id: EventId,
    /// String representing the object's type. Always `event`.
    #[serde(default)]
    pub object: String,
    /// The API version used to render `data`.
    #[serde(default)]
    pub api_version: Option<String>,
    /// Time at which the object was created. Measured in seconds since the
    /// Unix epoch.
    pub created: i64,
    /// The event payload.
    pub data: EventData,
    /// Whether the object exists in live mode.
    #[serde(default)]
    pub livemode: bool,
    /// Number of webhooks that have yet to be successfully delivered for
    /// this event.
    #[serde(default)]
    pub pending_webhooks: Option<i64>,
    /// Information on the API request that triggered the event.
    #[serde(default)]
    pub request: Option<EventRequest>,
    /// Description of the event (e.g. `account.updated`,
    /// `radar.early_fraud_warning.created`).
    #[serde(rename = "type")]
    pub event_type: String,
}

impl Event {
    /// When the event was created, as a chrono timestamp.
    #[must_use]
    pub fn created_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        chrono::DateTime::from_timestamp(self.created, 0)
    }

    /// Deserialize `data.object` into a concrete resource type.
    ///
    /// The caller picks the target type based on [`Event::event_type`];
    /// an `account.updated` event carries an `Account`, and so on.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload does not match the target shape.
    pub fn object_as<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.data.object.clone())
    }
}

/// The payload of an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventData {
    /// The resource the event describes, in its wire form.
    pub object: serde_json::Value,
    /// For `*.updated` events, the names and previous values of the
    /// attributes that changed.
    #[serde(default)]
    pub previous_attributes: Option<serde_json::Value>,
}

/// Information on the API request that triggered an event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventRequest {
    /// ID of the originating API request, if any.
    #[serde(default)]
    pub id: Option<String>,
    /// The idempotency key sent with the originating request, if any.
    #[serde(default)]
    pub idempotency_key: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fraud::{EarlyFraudWarning, FraudType};

    #[test]
    fn deserializes_event_envelope() {
        let json = r#"{
            "id": "evt_1FhK8FKoCLgYWl3X",
            "object": "event",
            "api_version": "2019-11-05",
            "created": 1574126950,
            "data": {
                "object": {
                    "id": "issfr_1FhK8DKoCLgYWl3X",
                    "object": "radar.early_fraud_warning",
                    "actionable": true,
                    "charge": "ch_1FhK6tKoCLgYWl3X",
                    "created": 1574126948,
                    "fraud_type": "made_with_stolen_card",
                    "livemode": false
                }
            },
            "livemode": false,
            "pending_webhooks": 1,
            "request": {"id": "req_9opKrwVQpi3rHk", "idempotency_key": null},
            "type": "radar.early_fraud_warning.created"
        }"#;

        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.event_type, "radar.early_fraud_warning.created");
        assert_eq!(event.created_at().unwrap().timestamp(), 1_574_126_950);

        let warning: EarlyFraudWarning = event.object_as().unwrap();
        assert_eq!(warning.fraud_type, Some(FraudType::MadeWithStolenCard));
    }

    #[test]
    fn object_as_rejects_mismatched_shape() {
        let json = r#"{
            "id": "evt_1",
            "object": "event",
            "created": 1574126950,
            "data": {"object": {"hello": "world"}},
            "type": "account.updated"
        }"#;

        let event: Event = serde_json::from_str(json).unwrap();
        assert!(event.object_as::<EarlyFraudWarning>().is_err());
    }
}
