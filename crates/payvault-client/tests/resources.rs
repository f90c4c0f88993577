//! Endpoint tests for the smaller resources.

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use payvault_client::{
    ClientOptions, CreateApplePayDomainParams, ListEarlyFraudWarningsParams,
    ListSourceTransactionsParams, PayvaultClient, UpdateCapabilityParams,
};
use payvault_core::{
    AccountId, ApplePayDomainId, CapabilityId, CapabilityState, CustomerId, FraudType, SourceId,
    SourceTransactionStatus,
};

fn client_for(server: &MockServer) -> PayvaultClient {
    PayvaultClient::with_options(server.uri(), "sk_test_key", ClientOptions::default()).unwrap()
}

#[tokio::test]
async fn apple_pay_domain_lifecycle() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/apple_pay/domains"))
        .and(body_partial_json(json!({"domain_name": "pay.rocket-rides.example"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "apwc_5wMXl7rzDnxOsn",
            "object": "apple_pay_domain",
            "created": 1_574_126_948,
            "domain_name": "pay.rocket-rides.example",
            "livemode": false
        })))
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/v1/apple_pay/domains/apwc_5wMXl7rzDnxOsn"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "apwc_5wMXl7rzDnxOsn",
            "object": "apple_pay_domain",
            "deleted": true
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let domain = client
        .create_apple_pay_domain(&CreateApplePayDomainParams {
            domain_name: "pay.rocket-rides.example".into(),
        })
        .await
        .unwrap();
    assert_eq!(domain.domain_name, "pay.rocket-rides.example");

    let id = ApplePayDomainId::new("apwc_5wMXl7rzDnxOsn").unwrap();
    let deleted = client.delete_apple_pay_domain(&id).await.unwrap();
    assert!(deleted.deleted);
}

#[tokio::test]
async fn early_fraud_warnings_filter_by_charge() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/radar/early_fraud_warnings"))
        .and(query_param("charge", "ch_1FhK6tKoCLgYWl3X"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "data": [{
                "id": "issfr_1FhK8DKoCLgYWl3X",
                "object": "radar.early_fraud_warning",
                "actionable": true,
                "charge": "ch_1FhK6tKoCLgYWl3X",
                "created": 1_574_126_948,
                "fraud_type": "made_with_stolen_card",
                "livemode": false
            }],
            "has_more": false
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let page = client
        .list_early_fraud_warnings(&ListEarlyFraudWarningsParams {
            charge: Some("ch_1FhK6tKoCLgYWl3X".into()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(page.data.len(), 1);
    assert_eq!(
        page.data[0].fraud_type,
        Some(FraudType::MadeWithStolenCard)
    );
}

#[tokio::test]
async fn update_capability_requests_it() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts/acct_1FgemsA4XkCNojRw/capabilities/card_payments"))
        .and(body_partial_json(json!({"requested": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "card_payments",
            "object": "capability",
            "account": "acct_1FgemsA4XkCNojRw",
            "requested": true,
            "status": "pending"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let account_id = AccountId::new("acct_1FgemsA4XkCNojRw").unwrap();
    let capability_id = CapabilityId::new("card_payments").unwrap();

    let capability = client
        .update_capability(
            &account_id,
            &capability_id,
            &UpdateCapabilityParams { requested: true },
        )
        .await
        .unwrap();

    assert_eq!(capability.status, Some(CapabilityState::Pending));
}

#[tokio::test]
async fn source_transactions_list_under_their_source() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/sources/src_1FhLnwKoCLgYWl3X/source_transactions"))
        .and(query_param("limit", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "data": [{
                "id": "srctxn_1FhLp2KoCLgYWl3X",
                "object": "source_transaction",
                "amount": 4500,
                "currency": "eur",
                "source": "src_1FhLnwKoCLgYWl3X",
                "status": "succeeded",
                "type": "sepa_debit"
            }],
            "has_more": false
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let source_id = SourceId::new("src_1FhLnwKoCLgYWl3X").unwrap();
    let page = client
        .list_source_transactions(
            &source_id,
            &ListSourceTransactionsParams {
                limit: Some(3),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(page.data[0].status, Some(SourceTransactionStatus::Succeeded));
}

#[tokio::test]
async fn customer_discount_removal() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/customers/cus_G2TZoMrW6QJnuq/discount"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "discount",
            "deleted": true
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let customer_id = CustomerId::new("cus_G2TZoMrW6QJnuq").unwrap();
    let deleted = client.delete_customer_discount(&customer_id).await.unwrap();

    assert!(deleted.deleted);
}
