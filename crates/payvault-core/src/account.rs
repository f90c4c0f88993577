//! Connected account types.
//!
//! An account represents a business or individual that can accept payments
//! on the platform. The struct mirrors the wire shape of the `/v1/accounts`
//! endpoints; nested groups (business profile, company, requirements,
//! settings) each get their own struct.

use serde::{Deserialize, Serialize};

use crate::common::Address;
use crate::ids::AccountId;
use crate::person::Person;

/// A connected account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier for the object.
    pub id: AccountId,
    /// String representing the object's type. Always `account`.
    #[serde(default)]
    pub object: String,
    /// Optional information related to the business.
    #[serde(default)]
    pub business_profile: Option<BusinessProfile>,
    /// The business type. Can be `individual` or `company`.
    #[serde(default)]
    pub business_type: Option<String>,
    /// Platform capabilities requested for this account and their status.
    #[serde(default)]
    pub capabilities: Option<Capabilities>,
    /// Whether the account can create live charges.
    #[serde(default)]
    pub charges_enabled: bool,
    /// Information about the company or business.
    #[serde(default)]
    pub company: Option<Company>,
    /// The account's country.
    #[serde(default)]
    pub country: Option<String>,
    /// Time at which the object was created. Measured in seconds since the
    /// Unix epoch.
    #[serde(default)]
    pub created: i64,
    /// Three-letter ISO currency code representing the default currency for
    /// the account.
    #[serde(default)]
    pub default_currency: Option<String>,
    /// Whether account details have been submitted. Accounts cannot receive
    /// payouts before this is true.
    #[serde(default)]
    pub details_submitted: bool,
    /// The primary user's email address.
    #[serde(default)]
    pub email: Option<String>,
    /// The individual associated with the account, for `individual`
    /// business types.
    #[serde(default)]
    pub individual: Option<Person>,
    /// Set of key-value pairs attached to the object.
    #[serde(default)]
    pub metadata: serde_json::Value,
    /// Whether the platform can send payouts to this account.
    #[serde(default)]
    pub payouts_enabled: bool,
    /// Fields that need to be collected to keep the account enabled.
    #[serde(default)]
    pub requirements: Option<Requirements>,
    /// Options for customizing how the account functions within the
    /// platform.
    #[serde(default)]
    pub settings: Option<Settings>,
    /// Details on the acceptance of the services agreement.
    #[serde(default)]
    pub tos_acceptance: Option<TosAcceptance>,
    /// The account type.
    #[serde(rename = "type", default)]
    pub account_type: Option<AccountType>,
}

impl Account {
    /// When the account was created, as a chrono timestamp.
    #[must_use]
    pub fn created_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        chrono::DateTime::from_timestamp(self.created, 0)
    }
}

/// The account type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    /// Fully platform-hosted onboarding and dashboard.
    Standard,
    /// Lightweight onboarding with a platform-managed dashboard.
    Express,
    /// The platform is fully responsible for the account's experience.
    Custom,
}

/// Status of a single capability on the account envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapabilityStatus {
    /// The capability is enabled.
    Active,
    /// The capability is disabled.
    Inactive,
    /// The capability is under review.
    Pending,
}

/// Capabilities requested for the account and their status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Capabilities {
    /// Card issuing capability status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_issuing: Option<CapabilityStatus>,
    /// Card payments capability status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_payments: Option<CapabilityStatus>,
    /// Legacy payments capability status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legacy_payments: Option<CapabilityStatus>,
    /// Transfers capability status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfers: Option<CapabilityStatus>,
}

/// Optional public-facing information about the business.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BusinessProfile {
    /// The merchant category code for the account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mcc: Option<String>,
    /// The customer-facing business name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Internal-only description of the product or service provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_description: Option<String>,
    /// A publicly available mailing address for support issues.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_address: Option<Address>,
    /// A publicly available email address for support issues.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_email: Option<String>,
    /// A publicly available phone number for support issues.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_phone: Option<String>,
    /// A publicly available website for support issues.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_url: Option<String>,
    /// The business's publicly available website.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Information about the company or business backing the account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Company {
    /// The company's primary address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// Whether the company's directors have been provided.
    #[serde(default)]
    pub directors_provided: bool,
    /// The company's legal name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Whether the company's owners have been provided.
    #[serde(default)]
    pub owners_provided: bool,
    /// The company's phone number, used for verification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Whether the company's business ID number was provided.
    #[serde(default)]
    pub tax_id_provided: bool,
    /// Whether the company's business VAT number was provided.
    #[serde(default)]
    pub vat_id_provided: bool,
}

/// Fields that must be collected to keep the account enabled.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Requirements {
    /// The date the `currently_due` fields must be collected by to keep
    /// payouts enabled, in seconds since the Unix epoch.
    #[serde(default)]
    pub current_deadline: Option<i64>,
    /// Fields that need to be collected to keep the account enabled.
    #[serde(default)]
    pub currently_due: Vec<String>,
    /// If the account is disabled, why it cannot create charges or receive
    /// payouts.
    #[serde(default)]
    pub disabled_reason: Option<String>,
    /// Fields that will become required once a volume threshold is
    /// reached.
    #[serde(default)]
    pub eventually_due: Vec<String>,
    /// Fields that were not collected by the deadline.
    #[serde(default)]
    pub past_due: Vec<String>,
    /// Fields that may become required pending verification results.
    #[serde(default)]
    pub pending_verification: Vec<String>,
}

/// Options for customizing how the account functions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Branding settings used in hosted surfaces.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branding: Option<BrandingSettings>,
    /// Card payment charge settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_payments: Option<CardPaymentsSettings>,
    /// Dashboard display settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashboard: Option<DashboardSettings>,
    /// Payout schedule and statement settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payouts: Option<PayoutSettings>,
}

/// Branding settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrandingSettings {
    /// File id of a square icon for the account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// File id of a logo used in hosted checkout surfaces.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// A CSS hex color value representing the primary branding color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
}

/// Card payment charge settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardPaymentsSettings {
    /// Automatic decline rules applied to card charges.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decline_on: Option<DeclineOn>,
    /// Default text prefixed to the dynamic statement descriptor of a
    /// charge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statement_descriptor_prefix: Option<String>,
}

/// Automatic decline rules for card charges.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeclineOn {
    /// Decline charges that fail postal code verification.
    #[serde(default)]
    pub avs_failure: bool,
    /// Decline charges that fail CVC verification.
    #[serde(default)]
    pub cvc_failure: bool,
}

/// Dashboard display settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardSettings {
    /// The display name used to differentiate between accounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// IANA timezone used when displaying the account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

/// Payout settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PayoutSettings {
    /// Whether negative balances are debited from the external account.
    #[serde(default)]
    pub debit_negative_balances: bool,
    /// When funds are paid out to the external account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<PayoutSchedule>,
    /// Text that appears on the bank statement for payouts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statement_descriptor: Option<String>,
}

/// Payout schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PayoutSchedule {
    /// Number of days charges are held before being paid out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_days: Option<u32>,
    /// How frequently funds are paid out: `manual`, `daily`, `weekly`, or
    /// `monthly`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
    /// Day of the month payouts are sent on, for monthly schedules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_anchor: Option<u32>,
    /// Day of the week payouts are sent on, for weekly schedules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_anchor: Option<String>,
}

/// Details on the acceptance of the services agreement.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TosAcceptance {
    /// The Unix timestamp marking when the account representative accepted
    /// the services agreement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<i64>,
    /// The IP address from which the agreement was accepted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    /// The user agent of the browser from which the agreement was
    /// accepted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

/// A deleted account stub.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedAccount {
    /// Unique identifier for the object.
    pub id: AccountId,
    /// String representing the object's type. Always `account`.
    #[serde(default)]
    pub object: String,
    /// Always true for a deleted object.
    pub deleted: bool,
}
