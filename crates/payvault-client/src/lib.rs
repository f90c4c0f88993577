//! Payvault HTTP client.
//!
//! This crate provides a thin async client for the Payvault API: typed
//! request parameters in, typed resources out, with one generic request
//! path underneath every endpoint method. Transport policy beyond a
//! configurable timeout (retries, backoff, rate limiting) is deliberately
//! left to the caller.
//!
//! # Example
//!
//! ```no_run
//! use payvault_client::{CreateAccountParams, PayvaultClient};
//! use payvault_core::AccountType;
//!
//! # async fn example() -> Result<(), payvault_client::ClientError> {
//! let client = PayvaultClient::new("sk_test_yourkey")?;
//!
//! let account = client
//!     .create_account(&CreateAccountParams {
//!         account_type: Some(AccountType::Custom),
//!         country: Some("US".into()),
//!         email: Some("ops@rocket-rides.example".into()),
//!         requested_capabilities: Some(vec!["card_payments".into()]),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! println!("created account {}", account.id);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod accounts;
mod apple_pay;
mod client;
mod discounts;
mod error;
mod fraud;
mod sources;

pub use accounts::{
    CreateAccountParams, ListAccountsParams, ListPersonsParams, PersonParams,
    RejectAccountParams, UpdateAccountParams, UpdateCapabilityParams,
};
pub use apple_pay::{CreateApplePayDomainParams, ListApplePayDomainsParams};
pub use client::{ClientOptions, PayvaultClient};
pub use error::ClientError;
pub use fraud::ListEarlyFraudWarningsParams;
pub use sources::ListSourceTransactionsParams;
