//! Core types for the Payvault API.
//!
//! This crate provides the data-transfer types shared by the Payvault SDK
//! crates:
//!
//! - **Identifiers**: `AccountId`, `PersonId`, `EventId`, and friends
//! - **Resources**: `Account`, `Person`, `Capability`, `Discount`,
//!   `ApplePayDomain`, `EarlyFraudWarning`, `SourceTransaction`
//! - **Envelopes**: `Event` (webhook deliveries), `List` (collection
//!   responses)
//!
//! Every resource is an independent flat struct mirroring the wire shape;
//! there is no inheritance hierarchy. Resources share only the common
//! envelope fields the API puts on every object: `id`, an `object` kind
//! tag, and a `created` Unix timestamp.
//!
//! # Monetary amounts
//!
//! Amounts are `i64` in the smallest currency unit (cents for USD) to
//! avoid floating point precision issues. Timestamps on the wire are
//! `i64` seconds since the Unix epoch; chrono accessors are provided
//! where a `DateTime` is more convenient.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod account;
pub mod apple_pay;
pub mod capability;
pub mod common;
pub mod discount;
pub mod event;
pub mod fraud;
pub mod ids;
pub mod list;
pub mod person;
pub mod source_transaction;

pub use account::{
    Account, AccountType, BusinessProfile, Capabilities, CapabilityStatus, Company,
    DeletedAccount, Requirements, Settings, TosAcceptance,
};
pub use apple_pay::{ApplePayDomain, DeletedApplePayDomain};
pub use capability::{Capability, CapabilityRequirements, CapabilityState};
pub use common::Address;
pub use discount::{Coupon, CouponDuration, DeletedDiscount, Discount};
pub use event::{Event, EventData, EventRequest};
pub use fraud::{EarlyFraudWarning, FraudType};
pub use ids::{
    AccountId, ApplePayDomainId, CapabilityId, ChargeId, CouponId, CustomerId,
    EarlyFraudWarningId, EventId, IdError, PersonId, SourceId, SubscriptionId,
};
pub use list::List;
pub use person::{DeletedPerson, Dob, Person, Relationship, Verification, VerificationDocument};
pub use source_transaction::{
    AchCreditTransfer, ChfCreditTransfer, GbpCreditTransfer, PaperCheck, SepaCreditTransfer,
    SourceTransaction, SourceTransactionStatus, SourceType,
};
