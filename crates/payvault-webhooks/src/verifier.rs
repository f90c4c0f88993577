//! Webhook event verification.
//!
//! A [`WebhookVerifier`] decides, for one delivery, whether the payload is
//! authentic and fresh, and if so materializes it into a
//! [`VerifiedEvent`]. Verification is a pure function of its inputs: the
//! current time is passed in by the caller, so results are deterministic
//! and the verifier is safe to share across threads.
//!
//! The payload must be the request body exactly as received. Frameworks
//! that eagerly parse JSON bodies re-encode them (reordering keys,
//! changing whitespace), which makes byte-exact verification impossible;
//! capture the raw bytes before any body transformation.

use payvault_core::{Event, EventId};

use crate::crypto::{constant_time_eq, hmac_sha256_hex};
use crate::error::WebhookError;
use crate::header::SignatureHeader;

/// Default tolerance window between the signed timestamp and the
/// verification time, in seconds.
pub const DEFAULT_TOLERANCE_SECONDS: i64 = 300;

/// Verifies webhook deliveries signed with a shared secret.
#[derive(Clone)]
pub struct WebhookVerifier {
    secret: Vec<u8>,
    tolerance_seconds: i64,
}

impl std::fmt::Debug for WebhookVerifier {
    // The secret must never appear in logs.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookVerifier")
            .field("secret", &"[redacted]")
            .field("tolerance_seconds", &self.tolerance_seconds)
            .finish()
    }
}

impl WebhookVerifier {
    /// Create a verifier with the default tolerance window.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::Configuration`] if the secret is empty.
    pub fn new(secret: impl Into<Vec<u8>>) -> Result<Self, WebhookError> {
        Self::with_tolerance(secret, DEFAULT_TOLERANCE_SECONDS)
    }

    /// Create a verifier with an explicit tolerance window.
    ///
    /// A tolerance of zero or less disables the freshness check; deliveries
    /// are then accepted regardless of the signed timestamp's age. Useful
    /// for replaying recorded deliveries in tests, not for production.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::Configuration`] if the secret is empty.
    pub fn with_tolerance(
        secret: impl Into<Vec<u8>>,
        tolerance_seconds: i64,
    ) -> Result<Self, WebhookError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(WebhookError::Configuration(
                "webhook secret must not be empty".into(),
            ));
        }
        Ok(Self {
            secret,
            tolerance_seconds,
        })
    }

    /// Verify a delivery and materialize the event.
    ///
    /// * `payload` - raw request body bytes, exactly as received
    /// * `header` - value of the signature header
    /// * `now_seconds` - current Unix time, supplied by the caller
    ///
    /// The signature is checked before the payload is parsed, so a
    /// payload that is not valid JSON still exercises the full signature
    /// path and fails with [`WebhookError::MalformedPayload`] only once
    /// its signature is known good.
    ///
    /// # Errors
    ///
    /// Returns one of the verification failure kinds; see
    /// [`WebhookError`].
    pub fn verify(
        &self,
        payload: &[u8],
        header: &str,
        now_seconds: i64,
    ) -> Result<VerifiedEvent, WebhookError> {
        let header = SignatureHeader::parse(header)?;

        if self.tolerance_seconds > 0 {
            // Symmetric window: timestamps too far in the future are as
            // suspect as stale ones (clock skew beyond tolerance).
            let age = now_seconds - header.timestamp;
            if age > self.tolerance_seconds || age < -self.tolerance_seconds {
                return Err(WebhookError::TimestampTooOld);
            }
        }

        let expected = self.expected_signature(header.timestamp, payload);

        let valid = header
            .signatures
            .iter()
            .any(|sig| constant_time_eq(&expected, sig));

        if !valid {
            return Err(WebhookError::SignatureMismatch);
        }

        let event: Event = serde_json::from_slice(payload)
            .map_err(|e| WebhookError::MalformedPayload(e.to_string()))?;

        Ok(VerifiedEvent { event })
    }

    /// Compute the expected hex digest for a timestamp and payload.
    ///
    /// The signed material is `"{timestamp}.{payload}"`: the decimal
    /// timestamp, a literal dot, then the raw payload bytes. Binding the
    /// timestamp prevents replaying a captured signature under a
    /// different timestamp.
    #[must_use]
    pub fn expected_signature(&self, timestamp: i64, payload: &[u8]) -> String {
        let mut signed = timestamp.to_string().into_bytes();
        signed.push(b'.');
        signed.extend_from_slice(payload);
        hmac_sha256_hex(&self.secret, &signed)
    }
}

/// Verify a delivery against several candidate verifiers.
///
/// During secret rotation a deployment holds more than one valid secret;
/// this tries each verifier in order and succeeds on the first match.
/// Rotation policy (which secrets exist, for how long) stays with the
/// caller.
///
/// # Errors
///
/// Returns the error from the last verifier tried, or
/// [`WebhookError::Configuration`] if no verifiers were supplied.
pub fn verify_with_any<'a, I>(
    verifiers: I,
    payload: &[u8],
    header: &str,
    now_seconds: i64,
) -> Result<VerifiedEvent, WebhookError>
where
    I: IntoIterator<Item = &'a WebhookVerifier>,
{
    let mut last_err = WebhookError::Configuration("no verifiers supplied".into());

    for verifier in verifiers {
        match verifier.verify(payload, header, now_seconds) {
            Ok(event) => return Ok(event),
            Err(e) => last_err = e,
        }
    }

    Err(last_err)
}

/// An authenticated, fresh, parsed webhook event.
///
/// Only the verifier constructs these; holding one is proof the payload's
/// signature checked out. The verifier keeps no state, so replay
/// protection beyond the tolerance window (e.g. deduplicating on
/// [`VerifiedEvent::id`]) is the caller's responsibility.
#[derive(Debug, Clone)]
pub struct VerifiedEvent {
    event: Event,
}

impl VerifiedEvent {
    /// The event identifier.
    #[must_use]
    pub fn id(&self) -> &EventId {
        &self.event.id
    }

    /// The event type (e.g. `account.updated`).
    #[must_use]
    pub fn event_type(&self) -> &str {
        &self.event.event_type
    }

    /// When the event was created, in seconds since the Unix epoch.
    #[must_use]
    pub fn created(&self) -> i64 {
        self.event.created
    }

    /// The full event envelope.
    #[must_use]
    pub fn event(&self) -> &Event {
        &self.event
    }

    /// Consume the wrapper and take the event envelope.
    #[must_use]
    pub fn into_event(self) -> Event {
        self.event
    }
}
