//! Signature header parsing.
//!
//! The platform sends a `payvault-signature` header shaped like
//!
//! ```text
//! t=1623882934,v1=5257a869e7...,v0=0a59f2a6...
//! ```
//!
//! a delimited list of `key=value` pairs: a `t` pair carrying the Unix
//! timestamp at which the payload was signed, and one signature pair per
//! signing scheme. `v1` is the current scheme; pairs with unrecognized
//! keys are ignored so new schemes can be introduced without breaking
//! older consumers. Multiple `v1` pairs may be present while a signing
//! secret is being rotated.

use crate::error::WebhookError;

/// The signature scheme this SDK understands.
pub const SCHEME: &str = "v1";

/// Parsed form of the signature header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureHeader {
    /// Unix timestamp (seconds) at which the sender signed the payload.
    pub timestamp: i64,
    /// Hex digests of every recognized-scheme signature in the header.
    pub signatures: Vec<String>,
}

impl SignatureHeader {
    /// Parse the raw header value.
    ///
    /// Pairs may be separated by commas or semicolons. Values are split
    /// from keys on the first `=` only, so a value containing `=` survives
    /// intact.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::MalformedHeader`] when the `t` pair is
    /// missing, its value is not an integer, or no recognized-scheme
    /// signature is present.
    pub fn parse(header: &str) -> Result<Self, WebhookError> {
        let mut timestamp: Option<i64> = None;
        let mut signatures: Vec<String> = Vec::new();

        for part in header.split([',', ';']) {
            let mut kv = part.trim().splitn(2, '=');
            match (kv.next(), kv.next()) {
                (Some("t"), Some(ts)) => {
                    timestamp = Some(ts.parse().map_err(|_| WebhookError::MalformedHeader)?);
                }
                (Some(SCHEME), Some(sig)) => signatures.push(sig.to_string()),
                // Unrecognized scheme labels are skipped, not rejected.
                _ => {}
            }
        }

        let timestamp = timestamp.ok_or(WebhookError::MalformedHeader)?;

        if signatures.is_empty() {
            return Err(WebhookError::MalformedHeader);
        }

        Ok(Self {
            timestamp,
            signatures,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_signature() {
        let header = SignatureHeader::parse("t=1623882934,v1=abc123").unwrap();
        assert_eq!(header.timestamp, 1_623_882_934);
        assert_eq!(header.signatures, vec!["abc123"]);
    }

    #[test]
    fn parses_semicolon_delimited() {
        let header = SignatureHeader::parse("t=1623882934;v1=abc123").unwrap();
        assert_eq!(header.timestamp, 1_623_882_934);
    }

    #[test]
    fn collects_all_current_scheme_signatures() {
        let header = SignatureHeader::parse("t=1,v1=old,v1=new").unwrap();
        assert_eq!(header.signatures, vec!["old", "new"]);
    }

    #[test]
    fn ignores_unrecognized_schemes() {
        let header = SignatureHeader::parse("t=1,v0=legacy,v1=current,v9=future").unwrap();
        assert_eq!(header.signatures, vec!["current"]);
    }

    #[test]
    fn value_keeps_embedded_equals() {
        let header = SignatureHeader::parse("t=1,v1=abc=def").unwrap();
        assert_eq!(header.signatures, vec!["abc=def"]);
    }

    #[test]
    fn missing_timestamp_is_malformed() {
        assert_eq!(
            SignatureHeader::parse("v1=abc123"),
            Err(WebhookError::MalformedHeader)
        );
    }

    #[test]
    fn non_numeric_timestamp_is_malformed() {
        assert_eq!(
            SignatureHeader::parse("t=yesterday,v1=abc123"),
            Err(WebhookError::MalformedHeader)
        );
    }

    #[test]
    fn only_unrecognized_schemes_is_malformed() {
        assert_eq!(
            SignatureHeader::parse("t=1623882934,v0=legacy"),
            Err(WebhookError::MalformedHeader)
        );
    }

    #[test]
    fn empty_header_is_malformed() {
        assert_eq!(SignatureHeader::parse(""), Err(WebhookError::MalformedHeader));
    }
}
