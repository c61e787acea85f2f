use super::{BillingType, Callback, Discount, Fine, Interest, PaymentStatus, Split};
use crate::date_format;

use chrono::NaiveDate;
use serde::Serialize;

/// Body for `POST /payments`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub customer: String,
    pub billing_type: BillingType,
    pub value: f64,
    #[serde(with = "date_format")]
    pub due_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_after_due_date_to_registration_cancellation: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installment_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installment_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<Discount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest: Option<Interest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fine: Option<Fine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_service: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split: Option<Vec<Split>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback: Option<Callback>,
}

impl PaymentRequest {
    pub fn new(
        customer: impl Into<String>,
        billing_type: BillingType,
        value: f64,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            customer: customer.into(),
            billing_type,
            value,
            due_date,
            description: None,
            days_after_due_date_to_registration_cancellation: None,
            external_reference: None,
            installment_count: None,
            total_value: None,
            installment_value: None,
            discount: None,
            interest: None,
            fine: None,
            postal_service: None,
            split: None,
            callback: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_days_after_due_date_to_registration_cancellation(mut self, days: u32) -> Self {
        self.days_after_due_date_to_registration_cancellation = Some(days);
        self
    }

    pub fn with_external_reference(mut self, reference: impl Into<String>) -> Self {
        self.external_reference = Some(reference.into());
        self
    }

    /// Turn the charge into an installment plan. Pass either the total or the
    /// per-installment value; the API derives the other.
    pub fn with_installments(
        mut self,
        count: u32,
        total_value: Option<f64>,
        installment_value: Option<f64>,
    ) -> Self {
        self.installment_count = Some(count);
        self.total_value = total_value;
        self.installment_value = installment_value;
        self
    }

    pub fn with_discount(mut self, discount: Discount) -> Self {
        self.discount = Some(discount);
        self
    }

    pub fn with_interest(mut self, interest: Interest) -> Self {
        self.interest = Some(interest);
        self
    }

    pub fn with_fine(mut self, fine: Fine) -> Self {
        self.fine = Some(fine);
        self
    }

    pub fn with_postal_service(mut self, postal_service: bool) -> Self {
        self.postal_service = Some(postal_service);
        self
    }

    pub fn with_split(mut self, split: Vec<Split>) -> Self {
        self.split = Some(split);
        self
    }

    pub fn with_callback(mut self, callback: Callback) -> Self {
        self.callback = Some(callback);
        self
    }
}

/// Body for `PUT /payments/{id}`. Only the fields set are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_type: Option<BillingType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(
        with = "date_format::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_after_due_date_to_registration_cancellation: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installment_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installment_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<Discount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest: Option<Interest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fine: Option<Fine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_service: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split: Option<Vec<Split>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback: Option<Callback>,
}

impl PaymentUpdate {
    pub fn with_billing_type(mut self, billing_type: BillingType) -> Self {
        self.billing_type = Some(billing_type);
        self
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_external_reference(mut self, reference: impl Into<String>) -> Self {
        self.external_reference = Some(reference.into());
        self
    }

    pub fn with_discount(mut self, discount: Discount) -> Self {
        self.discount = Some(discount);
        self
    }

    pub fn with_interest(mut self, interest: Interest) -> Self {
        self.interest = Some(interest);
        self
    }

    pub fn with_fine(mut self, fine: Fine) -> Self {
        self.fine = Some(fine);
        self
    }

    pub fn with_postal_service(mut self, postal_service: bool) -> Self {
        self.postal_service = Some(postal_service);
        self
    }

    pub fn with_split(mut self, split: Vec<Split>) -> Self {
        self.split = Some(split);
        self
    }

    pub fn with_callback(mut self, callback: Callback) -> Self {
        self.callback = Some(callback);
        self
    }
}

/// Body for `POST /payments/{id}/refund`. Empty means a full refund.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RefundRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl RefundRequest {
    pub fn full() -> Self {
        Self::default()
    }

    pub fn partial(value: f64) -> Self {
        Self {
            value: Some(value),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Query filters for `GET /payments`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_type: Option<BillingType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PaymentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
    #[serde(
        with = "date_format::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub payment_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_status: Option<String>,
    #[serde(
        with = "date_format::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub estimated_credit_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pix_qr_code_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anticipated: Option<bool>,
    #[serde(
        rename = "dateCreated[ge]",
        with = "date_format::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_created_from: Option<NaiveDate>,
    #[serde(
        rename = "dateCreated[le]",
        with = "date_format::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_created_to: Option<NaiveDate>,
    #[serde(
        rename = "paymentDate[ge]",
        with = "date_format::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub payment_date_from: Option<NaiveDate>,
    #[serde(
        rename = "paymentDate[le]",
        with = "date_format::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub payment_date_to: Option<NaiveDate>,
    #[serde(
        rename = "estimatedCreditDate[ge]",
        with = "date_format::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub estimated_credit_date_from: Option<NaiveDate>,
    #[serde(
        rename = "estimatedCreditDate[le]",
        with = "date_format::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub estimated_credit_date_to: Option<NaiveDate>,
    #[serde(
        rename = "dueDate[ge]",
        with = "date_format::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date_from: Option<NaiveDate>,
    #[serde(
        rename = "dueDate[le]",
        with = "date_format::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date_to: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl PaymentFilter {
    pub fn with_customer(mut self, customer: impl Into<String>) -> Self {
        self.customer = Some(customer.into());
        self
    }

    pub fn with_billing_type(mut self, billing_type: BillingType) -> Self {
        self.billing_type = Some(billing_type);
        self
    }

    pub fn with_status(mut self, status: PaymentStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_subscription(mut self, subscription: impl Into<String>) -> Self {
        self.subscription = Some(subscription.into());
        self
    }

    pub fn with_external_reference(mut self, reference: impl Into<String>) -> Self {
        self.external_reference = Some(reference.into());
        self
    }

    pub fn with_customer_group_name(mut self, group_name: impl Into<String>) -> Self {
        self.customer_group_name = Some(group_name.into());
        self
    }

    pub fn with_installment(mut self, installment: impl Into<String>) -> Self {
        self.installment = Some(installment.into());
        self
    }

    pub fn with_payment_date(mut self, payment_date: NaiveDate) -> Self {
        self.payment_date = Some(payment_date);
        self
    }

    pub fn with_invoice_status(mut self, invoice_status: impl Into<String>) -> Self {
        self.invoice_status = Some(invoice_status.into());
        self
    }

    pub fn with_estimated_credit_date(mut self, date: NaiveDate) -> Self {
        self.estimated_credit_date = Some(date);
        self
    }

    pub fn with_pix_qr_code_id(mut self, pix_qr_code_id: impl Into<String>) -> Self {
        self.pix_qr_code_id = Some(pix_qr_code_id.into());
        self
    }

    pub fn with_anticipated(mut self, anticipated: bool) -> Self {
        self.anticipated = Some(anticipated);
        self
    }

    /// Only payments created by this user (email).
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Inclusive payment-date range.
    pub fn with_payment_date_between(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.payment_date_from = Some(from);
        self.payment_date_to = Some(to);
        self
    }

    /// Inclusive estimated-credit-date range.
    pub fn with_estimated_credit_date_between(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.estimated_credit_date_from = Some(from);
        self.estimated_credit_date_to = Some(to);
        self
    }

    /// Inclusive creation-date range.
    pub fn with_date_created_between(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.date_created_from = Some(from);
        self.date_created_to = Some(to);
        self
    }

    /// Inclusive due-date range.
    pub fn with_due_date_between(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.due_date_from = Some(from);
        self.due_date_to = Some(to);
        self
    }

    pub fn with_page(mut self, offset: u32, limit: u32) -> Self {
        self.offset = Some(offset);
        self.limit = Some(limit);
        self
    }
}
