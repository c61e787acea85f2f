use crate::helpers::{api, page_json, payment_json, start};

use models::{
    BillingType, Discount, PaymentFilter, PaymentRequest, PaymentStatus, PaymentUpdate,
    RefundRequest,
};

use chrono::NaiveDate;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

fn due_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 7, 10).unwrap()
}

/// **VALUE**: Verifies the smallest valid charge sends exactly the four
/// required keys and decodes a response without nested objects.
///
/// **WHY THIS MATTERS**: This is the most common call in any integration with
/// the API. Extra keys with null values can trigger server-side validation.
///
/// **BUG THIS CATCHES**: Would catch optional fields leaking into the body, or
/// decoding failing when `discount`/`fine`/`interest` are absent.
#[tokio::test]
async fn given_minimal_payment_when_created_then_exactly_required_keys_sent() {
    let (server, client) = start().await;

    Mock::given(method("POST"))
        .and(path(api("payments")))
        .and(body_json(json!({
            "customer": "cus_000005219613",
            "billingType": "BOLETO",
            "value": 100.0,
            "dueDate": "2024-07-10"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(payment_json("pay_1", "PENDING")))
        .expect(1)
        .mount(&server)
        .await;

    let request = PaymentRequest::new("cus_000005219613", BillingType::Boleto, 100.0, due_date());
    let payment = client.payments().create(&request).await.unwrap();

    assert_eq!(payment.id, "pay_1");
    assert_eq!(payment.status, Some(PaymentStatus::Pending));
    assert_eq!(payment.billing_type, Some(BillingType::Boleto));
    assert_eq!(payment.due_date, due_date());
    assert!(payment.discount.is_none());
    assert!(payment.fine.is_none());
    assert!(payment.interest.is_none());
}

#[tokio::test]
async fn given_discount_when_payment_created_then_nested_object_sent() {
    let (server, client) = start().await;

    Mock::given(method("POST"))
        .and(path(api("payments")))
        .and(body_json(json!({
            "customer": "cus_1",
            "billingType": "PIX",
            "value": 50.0,
            "dueDate": "2024-07-10",
            "description": "Pedido 42",
            "discount": { "value": 10.0, "dueDateLimitDays": 0, "type": "PERCENTAGE" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(payment_json("pay_2", "PENDING")))
        .expect(1)
        .mount(&server)
        .await;

    let request = PaymentRequest::new("cus_1", BillingType::Pix, 50.0, due_date())
        .with_description("Pedido 42")
        .with_discount(Discount::percentage(10.0, 0));

    client.payments().create(&request).await.unwrap();
}

#[tokio::test]
async fn given_existing_payment_when_retrieved_then_decoded() {
    let (server, client) = start().await;

    Mock::given(method("GET"))
        .and(path(api("payments/pay_1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(payment_json("pay_1", "RECEIVED")))
        .expect(1)
        .mount(&server)
        .await;

    let payment = client.payments().retrieve("pay_1").await.unwrap();

    assert_eq!(payment.status, Some(PaymentStatus::Received));
    assert_eq!(payment.net_value, Some(98.01));
    assert!(payment.payment_date.is_none());
}

/// **VALUE**: Verifies a status the client does not know yet still decodes.
///
/// **BUG THIS CATCHES**: Would catch strict enum decoding that breaks every
/// retrieve the day the API adds a status.
#[tokio::test]
async fn given_unknown_status_when_payment_retrieved_then_passed_through() {
    let (server, client) = start().await;

    Mock::given(method("GET"))
        .and(path(api("payments/pay_1")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(payment_json("pay_1", "PARTIALLY_REFUNDED")),
        )
        .mount(&server)
        .await;

    let payment = client.payments().retrieve("pay_1").await.unwrap();
    let status = payment.status.unwrap();

    assert!(!status.is_known());
    assert_eq!(status.as_str(), "PARTIALLY_REFUNDED");
}

#[tokio::test]
async fn given_filters_when_payments_listed_then_page_of_payments_returned() {
    let (server, client) = start().await;

    Mock::given(method("GET"))
        .and(path(api("payments")))
        .and(query_param("customer", "cus_1"))
        .and(query_param("status", "OVERDUE"))
        .and(query_param("dateCreated[ge]", "2024-01-01"))
        .and(query_param("dateCreated[le]", "2024-06-30"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(vec![
            payment_json("pay_1", "OVERDUE"),
            payment_json("pay_2", "OVERDUE"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let filter = PaymentFilter::default()
        .with_customer("cus_1")
        .with_status(PaymentStatus::Overdue)
        .with_date_created_between(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
        );
    let page = client.payments().list(&filter).await.unwrap();

    assert_eq!(page.len(), 2);
    assert_eq!(page.data[0].id, "pay_1");
    assert_eq!(page.data[1].id, "pay_2");
}

#[tokio::test]
async fn given_changes_when_payment_updated_then_only_changes_sent() {
    let (server, client) = start().await;

    Mock::given(method("PUT"))
        .and(path(api("payments/pay_1")))
        .and(body_json(json!({ "value": 120.0, "dueDate": "2024-07-10" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(payment_json("pay_1", "PENDING")))
        .expect(1)
        .mount(&server)
        .await;

    let update = PaymentUpdate::default()
        .with_value(120.0)
        .with_due_date(due_date());
    client.payments().update("pay_1", &update).await.unwrap();
}

#[tokio::test]
async fn given_payment_when_deleted_then_delete_sent() {
    let (server, client) = start().await;

    Mock::given(method("DELETE"))
        .and(path(api("payments/pay_1")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "deleted": true, "id": "pay_1" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    client.payments().delete("pay_1").await.unwrap();
}

#[tokio::test]
async fn given_deleted_payment_when_restored_then_post_to_restore_url() {
    let (server, client) = start().await;

    Mock::given(method("POST"))
        .and(path(api("payments/pay_1/restore")))
        .respond_with(ResponseTemplate::new(200).set_body_json(payment_json("pay_1", "PENDING")))
        .expect(1)
        .mount(&server)
        .await;

    let payment = client.payments().restore("pay_1").await.unwrap();
    assert_eq!(payment.id, "pay_1");
}

#[tokio::test]
async fn given_payment_when_status_retrieved_then_status_only_returned() {
    let (server, client) = start().await;

    Mock::given(method("GET"))
        .and(path(api("payments/pay_1/status")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "CONFIRMED" })))
        .expect(1)
        .mount(&server)
        .await;

    let status = client.payments().retrieve_status("pay_1").await.unwrap();

    assert_eq!(status, PaymentStatus::Confirmed);
    assert!(status.is_paid());
}

/// **VALUE**: Verifies a full refund posts an empty object and a partial one
/// posts the value.
#[tokio::test]
async fn given_refund_requests_when_sent_then_bodies_match_kind() {
    let (server, client) = start().await;

    Mock::given(method("POST"))
        .and(path(api("payments/pay_full/refund")))
        .and(body_json(json!({})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(payment_json("pay_full", "REFUNDED")),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(api("payments/pay_part/refund")))
        .and(body_json(json!({ "value": 25.5, "description": "Item devolvido" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(payment_json("pay_part", "RECEIVED")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let full = client
        .payments()
        .refund("pay_full", &RefundRequest::full())
        .await
        .unwrap();
    assert_eq!(full.status, Some(PaymentStatus::Refunded));

    let partial = RefundRequest::partial(25.5).with_description("Item devolvido");
    client.payments().refund("pay_part", &partial).await.unwrap();
}

#[tokio::test]
async fn given_non_json_confirmation_when_payment_deleted_then_ok() {
    let (server, client) = start().await;

    Mock::given(method("DELETE"))
        .and(path(api("payments/pay_1")))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>deleted</html>"))
        .expect(1)
        .mount(&server)
        .await;

    client.payments().delete("pay_1").await.unwrap();
}
