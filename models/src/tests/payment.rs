use crate::{
    ApiObject, BillingType, ChargebackReason, ChargebackStatus, Discount, DiscountType, Fine,
    Interest, Payment, PaymentStatus, PaymentStatusResponse, RefundStatus, Split,
};

use chrono::NaiveDate;
use serde_json::json;

/// **VALUE**: Verifies the minimal create response decodes with every nested object absent.
///
/// **WHY THIS MATTERS**: Fresh payments carry no discount, fine, split, refunds or
/// chargeback. They must decode to `None`, not to empty placeholder structs.
///
/// **BUG THIS CATCHES**: Would catch nested fields made mandatory or defaulted to
/// empty values.
#[test]
fn given_minimal_payment_when_decoded_then_nested_objects_are_absent() {
    let payment = Payment::from_value(json!({
        "id": "pay_1",
        "customer": "cus_1",
        "dateCreated": "2024-03-01",
        "dueDate": "2024-03-01",
        "value": 100.0
    }))
    .unwrap();

    assert_eq!(payment.id, "pay_1");
    assert_eq!(payment.value, 100.0);
    assert_eq!(payment.due_date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    assert!(payment.discount.is_none());
    assert!(payment.fine.is_none());
    assert!(payment.interest.is_none());
    assert!(payment.split.is_none());
    assert!(payment.refunds.is_none());
    assert!(payment.chargeback.is_none());
    assert!(payment.billing_type.is_none());
    assert!(payment.status.is_none());
}

/// **VALUE**: Verifies a fully populated payment decodes every nested object.
///
/// **WHY THIS MATTERS**: Refunded and disputed payments are exactly the ones
/// callers inspect closely. Losing the refund list or chargeback reason hides the
/// money trail.
///
/// **BUG THIS CATCHES**: Would catch wrong wire names on nested types (`type`,
/// `walletId`, `transactionReceiptUrl`) or a date-time refund date rejected.
#[test]
fn given_refunded_payment_when_decoded_then_nested_objects_are_populated() {
    let payment = Payment::from_value(json!({
        "object": "payment",
        "id": "pay_080225913252",
        "dateCreated": "2024-02-10",
        "customer": "cus_G7Dvo4iphUNk",
        "subscription": "sub_VXJBYgP2u0eO",
        "value": 129.9,
        "netValue": 127.91,
        "billingType": "CREDIT_CARD",
        "status": "REFUNDED",
        "dueDate": "2024-02-15",
        "originalDueDate": "2024-02-15",
        "paymentDate": null,
        "clientPaymentDate": "2024-02-12",
        "invoiceUrl": "https://www.asaas.com/i/080225913252",
        "deleted": false,
        "anticipated": false,
        "discount": { "value": 10.0, "limitDate": null, "dueDateLimitDays": 5, "type": "PERCENTAGE" },
        "fine": { "value": 2.0, "type": "FIXED" },
        "interest": { "value": 1.0, "type": "PERCENTAGE" },
        "split": [
            { "id": "c0f6f2e1", "walletId": "wal_1", "fixedValue": 20.0, "status": "PENDING" },
            { "walletId": "wal_2", "percentageValue": 10.0 }
        ],
        "refunds": [{
            "dateCreated": "2024-02-20 10:12:37",
            "status": "DONE",
            "value": 129.9,
            "description": "Produto devolvido",
            "transactionReceiptUrl": "https://www.asaas.com/comprovantes/1"
        }],
        "chargeback": { "status": "DISPUTE_LOST", "reason": "SERVICE_NOT_RECEIVED" }
    }))
    .unwrap();

    assert_eq!(payment.billing_type, Some(BillingType::CreditCard));
    assert_eq!(payment.status, Some(PaymentStatus::Refunded));
    assert_eq!(payment.payment_date, None);
    assert_eq!(payment.subscription.as_deref(), Some("sub_VXJBYgP2u0eO"));

    let discount = payment.discount.unwrap();
    assert_eq!(discount.due_date_limit_days, 5);
    assert_eq!(discount.discount_type, Some(DiscountType::Percentage));
    assert_eq!(payment.interest, Some(Interest::new(1.0)));
    assert_eq!(payment.fine, Some(Fine::fixed(2.0)));

    let split = payment.split.unwrap();
    assert_eq!(split.len(), 2);
    assert_eq!(split[0], Split::fixed("wal_1", 20.0));
    assert_eq!(split[1].percentage_value, Some(10.0));

    let refunds = payment.refunds.unwrap();
    assert_eq!(refunds[0].status, RefundStatus::Done);
    assert_eq!(
        refunds[0].date_created,
        NaiveDate::from_ymd_opt(2024, 2, 20).unwrap()
    );

    let chargeback = payment.chargeback.unwrap();
    assert_eq!(chargeback.status, ChargebackStatus::DisputeLost);
    assert_eq!(chargeback.reason, Some(ChargebackReason::ServiceNotReceived));
}

/// **VALUE**: Verifies caller-constructible payments survive encode then decode.
///
/// **BUG THIS CATCHES**: Would catch asymmetric serde attributes, e.g. a date
/// written with a time or a `type` key written as `discountType`.
#[test]
fn given_payment_with_charges_when_round_tripped_then_is_unchanged() {
    let payment = Payment::from_value(json!({
        "id": "pay_2",
        "customer": "cus_2",
        "dateCreated": "2024-05-02",
        "dueDate": "2024-05-10",
        "value": 0.0,
        "billingType": "BOLETO",
        "status": "PENDING",
        "postalService": false,
        "discount": { "value": 5.0, "dueDateLimitDays": 0, "type": "FIXED" },
        "split": [{ "walletId": "wal_9", "totalFixedValue": 3.5 }]
    }))
    .unwrap();

    let encoded = payment.to_value().unwrap();

    assert_eq!(encoded["dueDate"], json!("2024-05-10"));
    assert_eq!(encoded["value"], json!(0.0));
    assert_eq!(encoded["postalService"], json!(false));
    assert_eq!(encoded["discount"]["type"], json!("FIXED"));
    assert!(encoded.get("refunds").is_none());
    assert_eq!(Payment::from_value(encoded).unwrap(), payment);
    assert_eq!(payment.discount, Some(Discount::fixed(5.0, 0)));
}

/// **VALUE**: Verifies a brand-new status does not break decoding.
///
/// **BUG THIS CATCHES**: Would catch a strict enum sneaking back into `Payment`.
#[test]
fn given_unknown_status_when_decoded_then_payment_still_decodes() {
    let payment = Payment::from_value(json!({
        "id": "pay_3",
        "customer": "cus_3",
        "dateCreated": "2024-05-02",
        "dueDate": "2024-05-10",
        "value": 10.0,
        "status": "PARTIALLY_SETTLED"
    }))
    .unwrap();

    assert_eq!(
        payment.status,
        Some(PaymentStatus::Unknown("PARTIALLY_SETTLED".to_string()))
    );
}

#[test]
fn given_status_envelope_when_decoded_then_yields_status() {
    let response = PaymentStatusResponse::from_value(json!({ "status": "RECEIVED" })).unwrap();

    assert_eq!(response.status, PaymentStatus::Received);
}

#[test]
fn given_invalid_due_date_when_decoded_then_returns_error() {
    let result = Payment::from_value(json!({
        "id": "pay_4",
        "customer": "cus_4",
        "dateCreated": "2024-05-02",
        "dueDate": "not-a-date",
        "value": 10.0
    }));

    assert!(result.is_err());
}
