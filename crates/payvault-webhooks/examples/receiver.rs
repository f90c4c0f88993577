//! Minimal webhook receiver.
//!
//! Shows the transport glue the verifier expects: the handler takes the
//! body as raw bytes (no JSON extractor in front of it) plus the
//! `payvault-signature` header, and collapses every verification failure
//! into one uniform 400 so callers probing the endpoint learn nothing
//! about which check failed.
//!
//! Run with:
//!
//! ```text
//! PAYVAULT_WEBHOOK_SECRET=whsec_xxx cargo run --example receiver
//! ```

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde::Serialize;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use payvault_webhooks::WebhookVerifier;

#[derive(Serialize)]
struct Ack {
    received: bool,
}

async fn webhook(
    State(verifier): State<Arc<WebhookVerifier>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Ack>, StatusCode> {
    let signature = headers
        .get("payvault-signature")
        .and_then(|v| v.to_str().ok())
        .ok_or(StatusCode::BAD_REQUEST)?;

    let now = i64::try_from(
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock before Unix epoch")
            .as_secs(),
    )
    .expect("system clock out of range");

    let event = verifier.verify(&body, signature, now).map_err(|e| {
        // Log the real reason, answer with a uniform rejection.
        tracing::warn!(error = %e, "Invalid webhook delivery");
        StatusCode::BAD_REQUEST
    })?;

    tracing::info!(
        event_id = %event.id(),
        event_type = %event.event_type(),
        "Received webhook event"
    );

    Ok(Json(Ack { received: true }))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let secret = std::env::var("PAYVAULT_WEBHOOK_SECRET")?;
    let verifier = Arc::new(WebhookVerifier::new(secret)?);

    let app = Router::new()
        .route("/webhooks", post(webhook))
        .with_state(verifier);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
    tracing::info!("Listening on http://127.0.0.1:3000/webhooks");
    axum::serve(listener, app).await?;

    Ok(())
}
