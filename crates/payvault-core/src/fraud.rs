//! Early fraud warning types.
//!
//! An early fraud warning is raised by a card issuer when a charge is
//! suspected to be fraudulent, ahead of any dispute.

use serde::{Deserialize, Serialize};

use crate::ids::{ChargeId, EarlyFraudWarningId};

/// An early fraud warning raised by a card issuer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EarlyFraudWarning {
    /// Unique identifier for the object.
    pub id: EarlyFraudWarningId,
    /// String representing the object's type. Always
    /// `radar.early_fraud_warning`.
    #[serde(default)]
    pub object: String,
    /// Whether the warning is actionable: it has not received a dispute
    /// and the charge has not been fully refunded. Proactively refunding
    /// an actionable charge avoids a later dispute.
    #[serde(default)]
    pub actionable: bool,
    /// The charge this early fraud warning is for.
    pub charge: ChargeId,
    /// Time at which the object was created. Measured in seconds since the
    /// Unix epoch.
    #[serde(default)]
    pub created: i64,
    /// The type of fraud labelled by the issuer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fraud_type: Option<FraudType>,
    /// Whether the object exists in live mode.
    #[serde(default)]
    pub livemode: bool,
}

/// The type of fraud labelled by the issuer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FraudType {
    /// The cardholder never received the card.
    CardNeverReceived,
    /// The card application was fraudulent.
    FraudulentCardApplication,
    /// The charge was made with a counterfeit card.
    MadeWithCounterfeitCard,
    /// The charge was made with a lost card.
    MadeWithLostCard,
    /// The charge was made with a stolen card.
    MadeWithStolenCard,
    /// Miscellaneous fraud.
    Misc,
    /// The card was used without the cardholder's authorization.
    UnauthorizedUseOfCard,
    /// A label this version of the SDK does not know about.
    #[serde(other)]
    Unrecognized,
}
