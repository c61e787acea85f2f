use crate::{
    BillingType, Callback, CustomerFilter, CustomerRequest, Cycle, Discount, PaymentFilter,
    PaymentRequest, RefundRequest, SortField, SortOrder, Split, SubscriptionRequest,
    SubscriptionUpdate,
};

use chrono::NaiveDate;
use serde_json::json;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// **VALUE**: Verifies a payment request with only required fields serializes
/// to exactly those four keys.
///
/// **WHY THIS MATTERS**: The API reads absent keys as "use default". Any stray
/// null would be read as an explicit value.
///
/// **BUG THIS CATCHES**: Would catch a missing `skip_serializing_if` on any
/// optional request field.
#[test]
fn given_required_fields_only_when_payment_request_serialized_then_has_four_keys() {
    let request = PaymentRequest::new("cus_1", BillingType::Pix, 100.0, date(2024, 3, 1));

    let body = serde_json::to_value(&request).unwrap();

    assert_eq!(
        body,
        json!({
            "customer": "cus_1",
            "billingType": "PIX",
            "value": 100.0,
            "dueDate": "2024-03-01"
        })
    );
}

#[test]
fn given_nested_charges_when_payment_request_serialized_then_nested_shapes_match_api() {
    let request = PaymentRequest::new("cus_1", BillingType::Boleto, 50.0, date(2024, 3, 1))
        .with_discount(Discount::percentage(5.0, 3))
        .with_split(vec![Split::percentage("wal_1", 15.0)])
        .with_callback(Callback::new("https://shop.example.com/ok").with_auto_redirect(false))
        .with_installments(3, Some(150.0), None);

    let body = serde_json::to_value(&request).unwrap();

    assert_eq!(body["discount"], json!({ "value": 5.0, "dueDateLimitDays": 3, "type": "PERCENTAGE" }));
    assert_eq!(body["split"], json!([{ "walletId": "wal_1", "percentageValue": 15.0 }]));
    assert_eq!(
        body["callback"],
        json!({ "successUrl": "https://shop.example.com/ok", "autoRedirect": false })
    );
    assert_eq!(body["installmentCount"], json!(3));
    assert_eq!(body["totalValue"], json!(150.0));
    assert!(body.get("installmentValue").is_none());
}

#[test]
fn given_customer_request_when_serialized_then_uses_camel_case_keys() {
    let request = CustomerRequest::new("Ana", "12345678909")
        .with_mobile_phone("4799376637")
        .with_notification_disabled(false);

    let body = serde_json::to_value(&request).unwrap();

    assert_eq!(
        body,
        json!({
            "name": "Ana",
            "cpfCnpj": "12345678909",
            "mobilePhone": "4799376637",
            "notificationDisabled": false
        })
    );
}

/// **VALUE**: Verifies date-range filters use the API's bracketed parameter names.
///
/// **BUG THIS CATCHES**: Would catch range filters sent under names the server
/// ignores, which silently returns unfiltered results.
#[test]
fn given_date_ranges_when_payment_filter_serialized_then_uses_bracket_names() {
    let filter = PaymentFilter::default()
        .with_date_created_between(date(2024, 1, 1), date(2024, 1, 31))
        .with_due_date_between(date(2024, 2, 1), date(2024, 2, 29));

    let query = serde_json::to_value(&filter).unwrap();

    assert_eq!(query["dateCreated[ge]"], json!("2024-01-01"));
    assert_eq!(query["dateCreated[le]"], json!("2024-01-31"));
    assert_eq!(query["dueDate[ge]"], json!("2024-02-01"));
    assert_eq!(query["dueDate[le]"], json!("2024-02-29"));
}

#[test]
fn given_default_filters_when_serialized_then_are_empty() {
    assert_eq!(serde_json::to_value(CustomerFilter::default()).unwrap(), json!({}));
    assert_eq!(serde_json::to_value(PaymentFilter::default()).unwrap(), json!({}));
    assert_eq!(serde_json::to_value(RefundRequest::full()).unwrap(), json!({}));
}

#[test]
fn given_subscription_request_when_serialized_then_includes_cycle_and_end_date() {
    let request = SubscriptionRequest::new(
        "cus_1",
        BillingType::CreditCard,
        59.9,
        date(2024, 2, 20),
        Cycle::Monthly,
    )
    .with_end_date(date(2025, 2, 20))
    .with_max_payments(12);

    let body = serde_json::to_value(&request).unwrap();

    assert_eq!(body["cycle"], json!("MONTHLY"));
    assert_eq!(body["nextDueDate"], json!("2024-02-20"));
    assert_eq!(body["endDate"], json!("2025-02-20"));
    assert_eq!(body["maxPayments"], json!(12));
    assert!(body.get("callback").is_none());
}

#[test]
fn given_subscription_update_when_serialized_then_only_set_fields_present() {
    let update = SubscriptionUpdate::default()
        .with_value(0.0)
        .with_update_pending_payments(true);

    let body = serde_json::to_value(&update).unwrap();

    assert_eq!(body, json!({ "value": 0.0, "updatePendingPayments": true }));
}

#[test]
fn given_sort_options_when_serialized_then_use_lower_camel_wire_values() {
    let filter = crate::SubscriptionFilter::default()
        .with_sort(SortField::NextDueDate, SortOrder::Asc);

    let query = serde_json::to_value(&filter).unwrap();

    assert_eq!(query, json!({ "order": "asc", "sort": "nextDueDate" }));
}

#[test]
fn given_callback_when_subscription_update_serialized_then_callback_sent() {
    let update = SubscriptionUpdate::default()
        .with_callback(Callback::new("https://shop.example.com/ok").with_auto_redirect(false));

    let body = serde_json::to_value(&update).unwrap();

    assert_eq!(
        body,
        json!({
            "callback": { "successUrl": "https://shop.example.com/ok", "autoRedirect": false }
        })
    );
}

/// **VALUE**: Verifies every payment list filter has a builder and goes out
/// under its wire name.
///
/// **BUG THIS CATCHES**: Would catch a filter that can only be set by poking
/// at public fields, or a range sent under the plain field name.
#[test]
fn given_all_payment_filter_setters_when_serialized_then_wire_names_match() {
    let filter = PaymentFilter::default()
        .with_customer_group_name("VIP")
        .with_installment("ins_1")
        .with_payment_date(date(2024, 5, 2))
        .with_invoice_status("AUTHORIZED")
        .with_estimated_credit_date(date(2024, 5, 3))
        .with_pix_qr_code_id("qr_1")
        .with_anticipated(false)
        .with_user("ops@example.com")
        .with_payment_date_between(date(2024, 5, 1), date(2024, 5, 31))
        .with_estimated_credit_date_between(date(2024, 6, 1), date(2024, 6, 30));

    let query = serde_json::to_value(&filter).unwrap();

    assert_eq!(
        query,
        json!({
            "customerGroupName": "VIP",
            "installment": "ins_1",
            "paymentDate": "2024-05-02",
            "invoiceStatus": "AUTHORIZED",
            "estimatedCreditDate": "2024-05-03",
            "pixQrCodeId": "qr_1",
            "anticipated": false,
            "user": "ops@example.com",
            "paymentDate[ge]": "2024-05-01",
            "paymentDate[le]": "2024-05-31",
            "estimatedCreditDate[ge]": "2024-06-01",
            "estimatedCreditDate[le]": "2024-06-30"
        })
    );
}
