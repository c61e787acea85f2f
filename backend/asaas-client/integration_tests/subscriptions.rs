use crate::helpers::{api, page_json, payment_json, start, subscription_json};

use models::{
    BillingType, Cycle, Fine, PaymentStatus, SortField, SortOrder, SubscriptionFilter,
    SubscriptionRequest, SubscriptionStatus, SubscriptionUpdate,
};

use chrono::NaiveDate;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

fn next_due() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()
}

#[tokio::test]
async fn given_monthly_subscription_when_created_then_body_and_response_match() {
    let (server, client) = start().await;

    Mock::given(method("POST"))
        .and(path(api("subscriptions")))
        .and(body_json(json!({
            "customer": "cus_000005219613",
            "billingType": "PIX",
            "value": 49.9,
            "nextDueDate": "2024-07-01",
            "cycle": "MONTHLY",
            "fine": { "value": 2.0, "type": "PERCENTAGE" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(subscription_json("sub_1")))
        .expect(1)
        .mount(&server)
        .await;

    let request = SubscriptionRequest::new(
        "cus_000005219613",
        BillingType::Pix,
        49.9,
        next_due(),
        Cycle::Monthly,
    )
    .with_fine(Fine::percentage(2.0));

    let subscription = client.subscriptions().create(&request).await.unwrap();

    assert_eq!(subscription.id, "sub_1");
    assert_eq!(subscription.cycle, Cycle::Monthly);
    assert_eq!(subscription.status, SubscriptionStatus::Active);
    assert_eq!(subscription.next_due_date, next_due());
    assert!(subscription.end_date.is_none());
}

#[tokio::test]
async fn given_existing_subscription_when_retrieved_then_decoded() {
    let (server, client) = start().await;

    Mock::given(method("GET"))
        .and(path(api("subscriptions/sub_1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(subscription_json("sub_1")))
        .expect(1)
        .mount(&server)
        .await;

    let subscription = client.subscriptions().retrieve("sub_1").await.unwrap();

    assert_eq!(subscription.billing_type, BillingType::Pix);
    assert_eq!(subscription.value, 49.9);
}

#[tokio::test]
async fn given_sort_and_status_when_subscriptions_listed_then_query_carries_them() {
    let (server, client) = start().await;

    Mock::given(method("GET"))
        .and(path(api("subscriptions")))
        .and(query_param("status", "ACTIVE"))
        .and(query_param("sort", "nextDueDate"))
        .and(query_param("order", "desc"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(page_json(vec![subscription_json("sub_1")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let filter = SubscriptionFilter::default()
        .with_status(SubscriptionStatus::Active)
        .with_sort(SortField::NextDueDate, SortOrder::Desc);
    let page = client.subscriptions().list(&filter).await.unwrap();

    assert_eq!(page.len(), 1);
}

/// **VALUE**: Verifies the pending-payments flag goes out even when `false`.
///
/// **BUG THIS CATCHES**: Would catch a falsy filter dropping the flag, which
/// changes what the server does to already generated charges.
#[tokio::test]
async fn given_update_with_false_flag_when_sent_then_flag_included() {
    let (server, client) = start().await;

    Mock::given(method("PUT"))
        .and(path(api("subscriptions/sub_1")))
        .and(body_json(json!({ "value": 59.9, "updatePendingPayments": false })))
        .respond_with(ResponseTemplate::new(200).set_body_json(subscription_json("sub_1")))
        .expect(1)
        .mount(&server)
        .await;

    let update = SubscriptionUpdate::default()
        .with_value(59.9)
        .with_update_pending_payments(false);
    client
        .subscriptions()
        .update("sub_1", &update)
        .await
        .unwrap();
}

#[tokio::test]
async fn given_subscription_when_deleted_then_delete_sent() {
    let (server, client) = start().await;

    Mock::given(method("DELETE"))
        .and(path(api("subscriptions/sub_1")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "deleted": true, "id": "sub_1" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    client.subscriptions().delete("sub_1").await.unwrap();
}

/// **VALUE**: Verifies the payments of a subscription come back as a page of
/// payments, narrowed by status when one is given.
#[tokio::test]
async fn given_status_when_subscription_payments_listed_then_filtered_page_returned() {
    let (server, client) = start().await;

    Mock::given(method("GET"))
        .and(path(api("subscriptions/sub_1/payments")))
        .and(query_param("status", "PENDING"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(vec![
            payment_json("pay_1", "PENDING"),
            payment_json("pay_2", "PENDING"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let page = client
        .subscriptions()
        .list_payments("sub_1", Some(PaymentStatus::Pending))
        .await
        .unwrap();

    assert_eq!(page.len(), 2);
    assert!(
        page.data
            .iter()
            .all(|p| p.status == Some(PaymentStatus::Pending))
    );
}

#[tokio::test]
async fn given_no_status_when_subscription_payments_listed_then_no_query() {
    let (server, client) = start().await;

    Mock::given(method("GET"))
        .and(path(api("subscriptions/sub_1/payments")))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(vec![])))
        .expect(1)
        .mount(&server)
        .await;

    let page = client
        .subscriptions()
        .list_payments("sub_1", None)
        .await
        .unwrap();

    assert!(page.is_empty());
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
}

/// **VALUE**: Verifies an empty status is dropped like any other empty field.
///
/// **BUG THIS CATCHES**: Would catch `?status=` going out, which the API reads
/// as "payments with an empty status" and answers with an empty page.
#[tokio::test]
async fn given_empty_status_when_subscription_payments_listed_then_no_query() {
    let (server, client) = start().await;

    Mock::given(method("GET"))
        .and(path(api("subscriptions/sub_1/payments")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(page_json(vec![payment_json("pay_1", "PENDING")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let page = client
        .subscriptions()
        .list_payments("sub_1", Some(PaymentStatus::Unknown(String::new())))
        .await
        .unwrap();

    assert_eq!(page.len(), 1);
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn given_plain_text_confirmation_when_subscription_deleted_then_ok() {
    let (server, client) = start().await;

    Mock::given(method("DELETE"))
        .and(path(api("subscriptions/sub_1")))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .expect(1)
        .mount(&server)
        .await;

    client.subscriptions().delete("sub_1").await.unwrap();
}
