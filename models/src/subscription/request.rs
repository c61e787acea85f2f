use super::{Cycle, SubscriptionStatus};
use crate::date_format;
use crate::payment::{BillingType, Callback, Discount, Fine, Interest, Split};

use chrono::NaiveDate;
use serde::Serialize;

wire_enum! {
    pub enum SortOrder {
        Asc => "asc",
        Desc => "desc",
    }
}

wire_enum! {
    /// Field a subscription listing is sorted by.
    pub enum SortField {
        Id => "id",
        DateCreated => "dateCreated",
        Customer => "customer",
        PaymentLink => "paymentLink",
        Value => "value",
        NextDueDate => "nextDueDate",
        Cycle => "cycle",
        Description => "description",
        BillingType => "billingType",
        Deleted => "deleted",
        Status => "status",
        ExternalReference => "externalReference",
        SendPaymentByPostalService => "sendPaymentByPostalService",
        Fine => "fine",
        Interest => "interest",
        Split => "split",
    }
}

/// Body for `POST /subscriptions`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionRequest {
    pub customer: String,
    pub billing_type: BillingType,
    pub value: f64,
    #[serde(with = "date_format")]
    pub next_due_date: NaiveDate,
    pub cycle: Cycle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<Discount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest: Option<Interest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fine: Option<Fine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        with = "date_format::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_payments: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split: Option<Vec<Split>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback: Option<Callback>,
}

impl SubscriptionRequest {
    pub fn new(
        customer: impl Into<String>,
        billing_type: BillingType,
        value: f64,
        next_due_date: NaiveDate,
        cycle: Cycle,
    ) -> Self {
        Self {
            customer: customer.into(),
            billing_type,
            value,
            next_due_date,
            cycle,
            discount: None,
            interest: None,
            fine: None,
            description: None,
            end_date: None,
            max_payments: None,
            external_reference: None,
            split: None,
            callback: None,
        }
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

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    pub fn with_max_payments(mut self, max_payments: u32) -> Self {
        self.max_payments = Some(max_payments);
        self
    }

    pub fn with_external_reference(mut self, reference: impl Into<String>) -> Self {
        self.external_reference = Some(reference.into());
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

/// Body for `PUT /subscriptions/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_type: Option<BillingType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SubscriptionStatus>,
    #[serde(
        with = "date_format::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<Discount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest: Option<Interest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fine: Option<Fine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle: Option<Cycle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        with = "date_format::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<NaiveDate>,
    /// Also apply the new value/billing type to payments already generated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_pending_payments: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split: Option<Vec<Split>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback: Option<Callback>,
}

impl SubscriptionUpdate {
    pub fn with_billing_type(mut self, billing_type: BillingType) -> Self {
        self.billing_type = Some(billing_type);
        self
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_status(mut self, status: SubscriptionStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_next_due_date(mut self, next_due_date: NaiveDate) -> Self {
        self.next_due_date = Some(next_due_date);
        self
    }

    pub fn with_cycle(mut self, cycle: Cycle) -> Self {
        self.cycle = Some(cycle);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    pub fn with_update_pending_payments(mut self, update: bool) -> Self {
        self.update_pending_payments = Some(update);
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

    pub fn with_split(mut self, split: Vec<Split>) -> Self {
        self.split = Some(split);
        self
    }

    pub fn with_callback(mut self, callback: Callback) -> Self {
        self.callback = Some(callback);
        self
    }
}

/// Query filters for `GET /subscriptions`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_type: Option<BillingType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SubscriptionStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_deleted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl SubscriptionFilter {
    pub fn with_customer(mut self, customer: impl Into<String>) -> Self {
        self.customer = Some(customer.into());
        self
    }

    pub fn with_status(mut self, status: SubscriptionStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_billing_type(mut self, billing_type: BillingType) -> Self {
        self.billing_type = Some(billing_type);
        self
    }

    pub fn with_include_deleted(mut self, include_deleted: bool) -> Self {
        self.include_deleted = Some(include_deleted);
        self
    }

    pub fn with_sort(mut self, sort: SortField, order: SortOrder) -> Self {
        self.sort = Some(sort);
        self.order = Some(order);
        self
    }

    pub fn with_page(mut self, offset: u32, limit: u32) -> Self {
        self.offset = Some(offset);
        self.limit = Some(limit);
        self
    }
}
