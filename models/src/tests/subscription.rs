use crate::{ApiObject, BillingType, Cycle, Fine, Subscription, SubscriptionStatus};

use chrono::NaiveDate;
use serde_json::json;

/// **VALUE**: Verifies a subscription decodes its enums, dates and nested fine.
///
/// **BUG THIS CATCHES**: Would catch the `cycle` field mis-keyed or `endDate`
/// required instead of optional.
#[test]
fn given_api_subscription_when_decoded_then_fields_are_typed() {
    let subscription = Subscription::from_value(json!({
        "object": "subscription",
        "id": "sub_VXJBYgP2u0eO",
        "dateCreated": "2024-01-20",
        "customer": "cus_000005219613",
        "paymentLink": null,
        "billingType": "PIX",
        "cycle": "MONTHLY",
        "value": 59.9,
        "nextDueDate": "2024-02-20",
        "endDate": null,
        "description": "Plano Fibra 300MB",
        "status": "ACTIVE",
        "fine": { "value": 2.0, "type": "PERCENTAGE" },
        "deleted": false,
        "maxPayments": 12
    }))
    .unwrap();

    assert_eq!(subscription.billing_type, BillingType::Pix);
    assert_eq!(subscription.cycle, Cycle::Monthly);
    assert_eq!(subscription.status, SubscriptionStatus::Active);
    assert_eq!(
        subscription.next_due_date,
        NaiveDate::from_ymd_opt(2024, 2, 20).unwrap()
    );
    assert_eq!(subscription.end_date, None);
    assert_eq!(subscription.payment_link, None);
    assert_eq!(subscription.fine, Some(Fine::percentage(2.0)));
    assert_eq!(subscription.max_payments, Some(12));
}

#[test]
fn given_subscription_with_end_date_when_round_tripped_then_is_unchanged() {
    let subscription = Subscription::from_value(json!({
        "id": "sub_1",
        "dateCreated": "2024-01-20",
        "customer": "cus_1",
        "billingType": "BOLETO",
        "cycle": "ANNUALLY",
        "value": 600.0,
        "nextDueDate": "2024-02-01",
        "endDate": "2026-02-01",
        "status": "EXPIRED"
    }))
    .unwrap();

    let encoded = subscription.to_value().unwrap();

    assert_eq!(encoded["endDate"], json!("2026-02-01"));
    assert_eq!(Subscription::from_value(encoded).unwrap(), subscription);
}
