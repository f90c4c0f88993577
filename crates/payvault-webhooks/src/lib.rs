//! Webhook signature verification for the Payvault API.
//!
//! The platform signs every webhook delivery with a shared secret:
//! a `payvault-signature` header carries a Unix timestamp and one or more
//! HMAC-SHA256 digests over `"{timestamp}.{raw body}"`. This crate parses
//! that header, checks the digest in constant time, enforces a freshness
//! window against replay, and only then parses the body into a typed
//! [`payvault_core::Event`].
//!
//! # Example
//!
//! ```
//! use payvault_webhooks::WebhookVerifier;
//!
//! # fn main() -> Result<(), payvault_webhooks::WebhookError> {
//! let verifier = WebhookVerifier::new("whsec_c0ffee")?;
//!
//! let payload = br#"{"id":"evt_54Wa7i","object":"event","created":1623882930,
//!     "data":{"object":{}},"type":"account.updated"}"#;
//! let signature = verifier.expected_signature(1_623_882_934, payload);
//! let header = format!("t=1623882934,v1={signature}");
//!
//! let event = verifier.verify(payload, &header, 1_623_882_940)?;
//! assert_eq!(event.event_type(), "account.updated");
//! # Ok(())
//! # }
//! ```
//!
//! # Raw bodies
//!
//! Verification happens over the exact bytes the sender signed. Hand this
//! crate the request body before anything parses or re-encodes it; once a
//! framework has deserialized and re-serialized the body, byte-exact
//! verification is unrecoverable.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod crypto;
mod error;
mod header;
mod verifier;

pub use error::WebhookError;
pub use header::{SignatureHeader, SCHEME};
pub use verifier::{
    verify_with_any, VerifiedEvent, WebhookVerifier, DEFAULT_TOLERANCE_SECONDS,
};
