use crate::helpers::{TEST_API_KEY, api, customer_json, page_json, start};

use asaas_client::AsaasError;
use models::{CustomerFilter, CustomerRequest};

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

/// **VALUE**: Verifies retrieve hits `/customers/{id}` with the access token
/// header and decodes the customer.
///
/// **BUG THIS CATCHES**: Would catch the key going out under a different header
/// name (e.g. `Authorization`), which the API rejects with 401.
#[tokio::test]
async fn given_existing_customer_when_retrieved_then_decoded_with_access_token_sent() {
    let (server, client) = start().await;

    Mock::given(method("GET"))
        .and(path(api("customers/cus_1")))
        .and(header("access_token", TEST_API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(customer_json("cus_1", "Maria")))
        .expect(1)
        .mount(&server)
        .await;

    let customer = client.customers().retrieve("cus_1").await.unwrap();

    assert_eq!(customer.id, "cus_1");
    assert_eq!(customer.name, "Maria");
    assert_eq!(customer.notification_disabled, Some(false));
}

/// **VALUE**: Verifies a create sends only what the caller set.
#[tokio::test]
async fn given_minimal_request_when_customer_created_then_body_has_only_set_fields() {
    let (server, client) = start().await;

    Mock::given(method("POST"))
        .and(path(api("customers")))
        .and(body_json(json!({ "name": "Maria", "cpfCnpj": "24971563792" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(customer_json("cus_2", "Maria")))
        .expect(1)
        .mount(&server)
        .await;

    let request = CustomerRequest::new("Maria", "24971563792");
    let customer = client.customers().create(&request).await.unwrap();

    assert_eq!(customer.id, "cus_2");
}

#[tokio::test]
async fn given_false_flag_when_customer_created_then_flag_is_sent() {
    let (server, client) = start().await;

    Mock::given(method("POST"))
        .and(path(api("customers")))
        .and(body_json(json!({
            "name": "Maria",
            "cpfCnpj": "24971563792",
            "notificationDisabled": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(customer_json("cus_3", "Maria")))
        .expect(1)
        .mount(&server)
        .await;

    let request = CustomerRequest::new("Maria", "24971563792").with_notification_disabled(false);
    client.customers().create(&request).await.unwrap();
}

/// **VALUE**: Verifies an unfiltered list sends no query string and keeps the
/// server's order.
///
/// **BUG THIS CATCHES**: Would catch `?name=&email=` style empty parameters,
/// which the API treats as "match empty".
#[tokio::test]
async fn given_no_filters_when_customers_listed_then_no_query_and_order_preserved() {
    let (server, client) = start().await;

    Mock::given(method("GET"))
        .and(path(api("customers")))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(vec![
            customer_json("cus_a", "Ana"),
            customer_json("cus_b", "Bruno"),
        ])))
        .mount(&server)
        .await;

    let page = client
        .customers()
        .list(&CustomerFilter::default())
        .await
        .unwrap();

    let ids: Vec<&str> = page.data.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["cus_a", "cus_b"]);
    assert_eq!(page.total_count, Some(2));
    assert!(!page.has_more);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn given_filters_when_customers_listed_then_query_carries_them() {
    let (server, client) = start().await;

    Mock::given(method("GET"))
        .and(path(api("customers")))
        .and(query_param("name", "Maria Silva"))
        .and(query_param("offset", "10"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(vec![])))
        .expect(1)
        .mount(&server)
        .await;

    let filter = CustomerFilter::default()
        .with_name("Maria Silva")
        .with_page(10, 5);
    let page = client.customers().list(&filter).await.unwrap();

    assert!(page.is_empty());
}

#[tokio::test]
async fn given_changes_when_customer_updated_then_put_to_customer_url() {
    let (server, client) = start().await;

    Mock::given(method("PUT"))
        .and(path(api("customers/cus_1")))
        .and(body_json(json!({
            "name": "Maria",
            "cpfCnpj": "24971563792",
            "email": "new@example.com"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(customer_json("cus_1", "Maria")))
        .expect(1)
        .mount(&server)
        .await;

    let request = CustomerRequest::new("Maria", "24971563792").with_email("new@example.com");
    let customer = client.customers().update("cus_1", &request).await.unwrap();

    assert_eq!(customer.id, "cus_1");
}

#[tokio::test]
async fn given_customer_when_deleted_then_delete_sent_and_unit_returned() {
    let (server, client) = start().await;

    Mock::given(method("DELETE"))
        .and(path(api("customers/cus_1")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "deleted": true, "id": "cus_1" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    client.customers().delete("cus_1").await.unwrap();
}

/// **VALUE**: Verifies restore posts to `/customers/{id}/restore` with no body.
#[tokio::test]
async fn given_deleted_customer_when_restored_then_post_to_restore_url() {
    let (server, client) = start().await;

    Mock::given(method("POST"))
        .and(path(api("customers/cus_1/restore")))
        .respond_with(ResponseTemplate::new(200).set_body_json(customer_json("cus_1", "Maria")))
        .expect(1)
        .mount(&server)
        .await;

    let customer = client.customers().restore("cus_1").await.unwrap();
    assert_eq!(customer.id, "cus_1");

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn given_empty_id_when_customer_retrieved_then_rejected_without_request() {
    let (server, client) = start().await;

    let err = client.customers().retrieve("  ").await.unwrap_err();

    assert!(matches!(err, AsaasError::InvalidArgument { .. }));
    assert!(server.received_requests().await.unwrap().is_empty());
}

/// **VALUE**: Verifies a delete is confirmed by the status code alone.
///
/// **WHY THIS MATTERS**: The resource is already gone once the server answers
/// 200. Reporting a failure then makes callers retry or alert for nothing.
///
/// **BUG THIS CATCHES**: Would catch the delete response body being parsed as
/// JSON, which fails on plain-text confirmations.
#[tokio::test]
async fn given_plain_text_confirmation_when_customer_deleted_then_ok() {
    let (server, client) = start().await;

    Mock::given(method("DELETE"))
        .and(path(api("customers/cus_1")))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .expect(1)
        .mount(&server)
        .await;

    client.customers().delete("cus_1").await.unwrap();
}
