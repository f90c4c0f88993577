//! Source transaction types.
//!
//! A source transaction records funds a customer pushed to a receiver
//! source (bank transfers, paper checks). The rail-specific details live
//! in per-rail sub-structs; only the one matching the source type is
//! populated.

use serde::{Deserialize, Serialize};

use crate::ids::SourceId;

/// Funds pushed to a receiver source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceTransaction {
    /// Unique identifier for the object.
    #[serde(default)]
    pub id: Option<String>,
    /// String representing the object's type. Always `source_transaction`.
    #[serde(default)]
    pub object: String,
    /// ACH credit transfer details, when the source is an ACH receiver.
    #[serde(default)]
    pub ach_credit_transfer: Option<AchCreditTransfer>,
    /// Amount pushed by the customer, in the smallest currency unit.
    #[serde(default)]
    pub amount: Option<i64>,
    /// CHF credit transfer details.
    #[serde(default)]
    pub chf_credit_transfer: Option<ChfCreditTransfer>,
    /// Time at which the object was created. Measured in seconds since the
    /// Unix epoch.
    #[serde(default)]
    pub created: Option<i64>,
    /// Three-letter ISO currency code, lowercase.
    #[serde(default)]
    pub currency: Option<String>,
    /// GBP credit transfer details.
    #[serde(default)]
    pub gbp_credit_transfer: Option<GbpCreditTransfer>,
    /// Whether the object exists in live mode.
    #[serde(default)]
    pub livemode: bool,
    /// Paper check details.
    #[serde(default)]
    pub paper_check: Option<PaperCheck>,
    /// SEPA credit transfer details.
    #[serde(default)]
    pub sepa_credit_transfer: Option<SepaCreditTransfer>,
    /// The source this transaction is attached to.
    #[serde(default)]
    pub source: Option<SourceId>,
    /// The status of the transaction.
    #[serde(default)]
    pub status: Option<SourceTransactionStatus>,
    /// The type of source this transaction is attached to.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<SourceType>,
}

/// ACH credit transfer details.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AchCreditTransfer {
    /// Customer data associated with the transfer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_data: Option<String>,
    /// Bank account fingerprint associated with the transfer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
    /// Last 4 digits of the account number associated with the transfer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last4: Option<String>,
    /// Routing number associated with the transfer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routing_number: Option<String>,
}

/// CHF credit transfer details.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChfCreditTransfer {
    /// Reference associated with the transfer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Sender's country address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_address_country: Option<String>,
    /// Sender's line 1 address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_address_line1: Option<String>,
    /// Sender's bank account IBAN.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_iban: Option<String>,
    /// Sender's name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,
}

/// GBP credit transfer details.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GbpCreditTransfer {
    /// Bank account fingerprint associated with the transfer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
    /// Last 4 digits of the account number associated with the transfer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last4: Option<String>,
    /// Sender-entered arbitrary information about the transfer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Sender name associated with the transfer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,
    /// Sort code associated with the transfer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_code: Option<String>,
}

/// Paper check details.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaperCheck {
    /// String unix time for the available date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_at: Option<String>,
    /// Invoice ID associated with the paper check.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoices: Option<String>,
}

/// SEPA credit transfer details.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SepaCreditTransfer {
    /// Reference associated with the transfer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Sender's bank account IBAN.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_iban: Option<String>,
    /// Sender's name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,
}

/// The status of a source transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceTransactionStatus {
    /// The funds are available.
    Succeeded,
    /// The funds are on their way.
    Pending,
    /// The transfer failed.
    Failed,
}

/// The type of source a transaction is attached to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    /// ACH credit transfer.
    AchCreditTransfer,
    /// ACH debit.
    AchDebit,
    /// Alipay.
    Alipay,
    /// Bancontact.
    Bancontact,
    /// Card.
    Card,
    /// Card present.
    CardPresent,
    /// EPS.
    Eps,
    /// Giropay.
    Giropay,
    /// iDEAL.
    Ideal,
    /// Klarna.
    Klarna,
    /// Multibanco.
    Multibanco,
    /// Przelewy24.
    P24,
    /// SEPA debit.
    SepaDebit,
    /// Sofort.
    Sofort,
    /// 3-D Secure.
    ThreeDSecure,
    /// WeChat Pay.
    Wechat,
    /// A rail this version of the SDK does not know about.
    #[serde(other)]
    Unrecognized,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_sepa_transaction() {
        let json = r#"{
            "id": "srctxn_1FhLp2KoCLgYWl3X",
            "object": "source_transaction",
            "amount": 4500,
            "created": 1574126948,
            "currency": "eur",
            "sepa_credit_transfer": {
                "reference": "INV-2019-1187",
                "sender_iban": "DE89370400440532013000",
                "sender_name": "Rocket Rides GmbH"
            },
            "source": "src_1FhLnwKoCLgYWl3X",
            "status": "succeeded",
            "type": "sepa_debit"
        }"#;

        let tx: SourceTransaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.amount, Some(4500));
        assert_eq!(tx.status, Some(SourceTransactionStatus::Succeeded));
        assert_eq!(tx.source_type, Some(SourceType::SepaDebit));
        assert_eq!(
            tx.sepa_credit_transfer.unwrap().sender_iban.as_deref(),
            Some("DE89370400440532013000")
        );
        assert!(tx.paper_check.is_none());
    }
}
