//! Webhook verification error types.

/// Errors returned by webhook verification.
///
/// The first four variants are the expected failure modes of verifying a
/// delivery; each is terminal for that delivery. Callers responding to the
/// sender should collapse them into one uniform rejection rather than
/// echoing which check failed. `Configuration` is different in kind: it
/// marks a misconfigured verifier, not a bad delivery.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WebhookError {
    /// The signature header is missing its timestamp, the timestamp is not
    /// an integer, or no recognized-scheme signature is present.
    #[error("malformed signature header")]
    MalformedHeader,

    /// The signed timestamp is outside the tolerance window relative to
    /// the verification time.
    #[error("signature timestamp outside the tolerance window")]
    TimestampTooOld,

    /// No signature in the header matches the expected digest.
    #[error("signature mismatch")]
    SignatureMismatch,

    /// The signature verified but the payload is not a valid event.
    #[error("malformed event payload: {0}")]
    MalformedPayload(String),

    /// The verifier itself is misconfigured (e.g. an empty secret).
    #[error("configuration error: {0}")]
    Configuration(String),
}
