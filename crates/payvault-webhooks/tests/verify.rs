//! End-to-end verification behavior.

use payvault_webhooks::{verify_with_any, WebhookError, WebhookVerifier};

const SECRET: &str = "whsec_Eo0i4cBalsvXUw7EXGhSIOrDIpxbuyXN";

const PAYLOAD: &[u8] = br#"{"id":"evt_1FhK8FKoCLgYWl3X","object":"event","api_version":"2019-11-05","created":1574126950,"data":{"object":{"id":"acct_1FgemsA4XkCNojRw","object":"account","charges_enabled":true,"created":1574126948}},"livemode":false,"pending_webhooks":1,"type":"account.updated"}"#;

const SIGNED_AT: i64 = 1_574_126_951;

fn verifier() -> WebhookVerifier {
    WebhookVerifier::new(SECRET).unwrap()
}

fn signed_header(verifier: &WebhookVerifier, timestamp: i64, payload: &[u8]) -> String {
    format!(
        "t={timestamp},v1={}",
        verifier.expected_signature(timestamp, payload)
    )
}

#[test]
fn valid_delivery_verifies_and_exposes_metadata() {
    let verifier = verifier();
    let header = signed_header(&verifier, SIGNED_AT, PAYLOAD);

    let event = verifier.verify(PAYLOAD, &header, SIGNED_AT).unwrap();

    assert_eq!(event.id().as_str(), "evt_1FhK8FKoCLgYWl3X");
    assert_eq!(event.event_type(), "account.updated");
    assert_eq!(event.created(), 1_574_126_950);
    assert_eq!(event.event().api_version.as_deref(), Some("2019-11-05"));
}

#[test]
fn any_flipped_payload_byte_breaks_the_signature() {
    let verifier = verifier();
    let header = signed_header(&verifier, SIGNED_AT, PAYLOAD);

    // Flip one byte at a few positions across the body, including the
    // first and last.
    for index in [0, 17, PAYLOAD.len() / 2, PAYLOAD.len() - 1] {
        let mut tampered = PAYLOAD.to_vec();
        tampered[index] ^= 0x01;

        let err = verifier.verify(&tampered, &header, SIGNED_AT).unwrap_err();
        assert_eq!(err, WebhookError::SignatureMismatch, "byte {index}");
    }
}

#[test]
fn age_beyond_tolerance_is_rejected_and_boundary_is_accepted() {
    let verifier = verifier();
    let header = signed_header(&verifier, SIGNED_AT, PAYLOAD);

    // Exactly at the default 300-second tolerance: accepted.
    assert!(verifier.verify(PAYLOAD, &header, SIGNED_AT + 300).is_ok());

    // One second past: rejected.
    assert_eq!(
        verifier
            .verify(PAYLOAD, &header, SIGNED_AT + 301)
            .unwrap_err(),
        WebhookError::TimestampTooOld
    );
}

#[test]
fn future_timestamps_beyond_tolerance_are_rejected() {
    let verifier = verifier();
    let header = signed_header(&verifier, SIGNED_AT, PAYLOAD);

    // Sender clock 301 seconds ahead of ours.
    assert_eq!(
        verifier
            .verify(PAYLOAD, &header, SIGNED_AT - 301)
            .unwrap_err(),
        WebhookError::TimestampTooOld
    );
    assert!(verifier.verify(PAYLOAD, &header, SIGNED_AT - 300).is_ok());
}

#[test]
fn zero_tolerance_disables_the_freshness_check() {
    let verifier = WebhookVerifier::with_tolerance(SECRET, 0).unwrap();
    let header = signed_header(&verifier, SIGNED_AT, PAYLOAD);

    // A decade later, still accepted.
    assert!(verifier
        .verify(PAYLOAD, &header, SIGNED_AT + 315_360_000)
        .is_ok());
}

#[test]
fn malformed_headers_fail_before_anything_else() {
    let verifier = verifier();

    for header in [
        "",
        "v1=5257a869e7ecebeda32affa62cdca3fa51cad7e77a0e56ff536d0ce8e108d8bd",
        "t=not-a-number,v1=5257a869e7",
        "t=1574126951",
        "t=1574126951,v0=only-a-retired-scheme",
    ] {
        assert_eq!(
            verifier.verify(PAYLOAD, header, SIGNED_AT).unwrap_err(),
            WebhookError::MalformedHeader,
            "header {header:?}"
        );
    }
}

#[test]
fn one_valid_signature_among_several_is_sufficient() {
    let verifier = verifier();
    let good = verifier.expected_signature(SIGNED_AT, PAYLOAD);
    // Rotation in progress: a digest from the outgoing secret plus one
    // from the current secret.
    let header = format!("t={SIGNED_AT},v1=000000000000000000000000000000000000000000000000000000000000dead,v1={good}");

    assert!(verifier.verify(PAYLOAD, &header, SIGNED_AT).is_ok());
}

#[test]
fn signature_is_checked_before_the_payload_is_parsed() {
    let verifier = verifier();
    let not_json = b"this body is signed but is not json";

    // Correctly signed non-JSON payload: the signature path passes, the
    // materialization fails.
    let header = signed_header(&verifier, SIGNED_AT, not_json);
    let err = verifier.verify(not_json, &header, SIGNED_AT).unwrap_err();
    assert!(matches!(err, WebhookError::MalformedPayload(_)));

    // Badly signed non-JSON payload: the signature verdict comes first.
    let header = format!("t={SIGNED_AT},v1=deadbeef");
    let err = verifier.verify(not_json, &header, SIGNED_AT).unwrap_err();
    assert_eq!(err, WebhookError::SignatureMismatch);
}

#[test]
fn verification_is_idempotent() {
    let verifier = verifier();
    let header = signed_header(&verifier, SIGNED_AT, PAYLOAD);

    let first = verifier.verify(PAYLOAD, &header, SIGNED_AT).unwrap();
    let second = verifier.verify(PAYLOAD, &header, SIGNED_AT).unwrap();

    assert_eq!(first.id(), second.id());
    assert_eq!(first.event_type(), second.event_type());
    assert_eq!(first.created(), second.created());
}

#[test]
fn rotation_loop_succeeds_on_the_second_secret() {
    let retired = WebhookVerifier::new("whsec_retired").unwrap();
    let current = verifier();
    let header = signed_header(&current, SIGNED_AT, PAYLOAD);

    let event =
        verify_with_any([&retired, &current], PAYLOAD, &header, SIGNED_AT).unwrap();
    assert_eq!(event.event_type(), "account.updated");

    // Neither secret matching surfaces the mismatch.
    let other = WebhookVerifier::new("whsec_unrelated").unwrap();
    let err =
        verify_with_any([&retired, &other], PAYLOAD, &header, SIGNED_AT).unwrap_err();
    assert_eq!(err, WebhookError::SignatureMismatch);
}
