use crate::helpers::{TEST_API_KEY, api, start};

use asaas_client::{AsaasClient, AsaasError, ValidationCode};
use common::{HttpStatusCode, RedactedApiKey};
use models::{BillingType, PaymentRequest};

use chrono::NaiveDate;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

/// **VALUE**: Verifies a 404 surfaces as not-found carrying the full URL.
///
/// **BUG THIS CATCHES**: Would catch the 404 being decoded as a customer (and
/// failing with a confusing decode error) instead of being classified first.
#[tokio::test]
async fn given_missing_customer_when_retrieved_then_not_found_with_url() {
    let (server, client) = start().await;

    Mock::given(method("GET"))
        .and(path(api("customers/cus_missing")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client.customers().retrieve("cus_missing").await.unwrap_err();

    assert!(err.is_not_found());
    match err {
        AsaasError::NotFound { url, .. } => {
            assert_eq!(url, format!("{}/api/v3/customers/cus_missing", server.uri()));
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn given_validation_failure_when_payment_created_then_validation_error() {
    let (server, client) = start().await;

    Mock::given(method("POST"))
        .and(path(api("payments")))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "errors": [{ "code": "invalid_customer", "description": "Customer inexistente." }]
        })))
        .mount(&server)
        .await;

    let request = PaymentRequest::new(
        "cus_bad",
        BillingType::Boleto,
        10.0,
        NaiveDate::from_ymd_opt(2024, 7, 10).unwrap(),
    );
    let err = client.payments().create(&request).await.unwrap_err();

    assert_eq!(err.validation_code(), Some(ValidationCode::InvalidCustomer));
    assert_eq!(err.message(), "Customer inexistente.");
}

#[tokio::test]
async fn given_server_error_when_payment_retrieved_then_api_error_with_status() {
    let (server, client) = start().await;

    Mock::given(method("GET"))
        .and(path(api("payments/pay_1")))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&server)
        .await;

    let err = client.payments().retrieve("pay_1").await.unwrap_err();

    assert_eq!(err.status_code(), Some(HttpStatusCode(503)));
    assert_eq!(err.message(), "Service Unavailable");
}

#[tokio::test]
async fn given_unauthorized_when_any_call_then_api_error_401() {
    let (server, client) = start().await;

    Mock::given(method("GET"))
        .and(path(api("subscriptions/sub_1")))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = client.subscriptions().retrieve("sub_1").await.unwrap_err();

    assert_eq!(err.status_code(), Some(HttpStatusCode(401)));
}

/// **VALUE**: Verifies a success response that cannot be decoded is a decode
/// error naming what was missing.
#[tokio::test]
async fn given_incomplete_success_body_when_decoded_then_decode_error() {
    let (server, client) = start().await;

    Mock::given(method("GET"))
        .and(path(api("customers/cus_1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "cus_1" })))
        .mount(&server)
        .await;

    let err = client.customers().retrieve("cus_1").await.unwrap_err();

    assert!(matches!(err, AsaasError::Decode { .. }), "got {err:?}");
    assert!(err.message().contains("dateCreated"), "got {err}");
}

#[tokio::test]
async fn given_unreachable_server_when_called_then_http_error() {
    let client = AsaasClient::with_http_client(
        "http://127.0.0.1:1/api/v3",
        RedactedApiKey::new(TEST_API_KEY),
        reqwest::Client::new(),
    )
    .unwrap();

    let err = client.customers().retrieve("cus_1").await.unwrap_err();

    assert!(matches!(err, AsaasError::Http { .. }), "got {err:?}");
}
