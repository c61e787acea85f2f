//! Subscription resource.
//!
//! A subscription generates one payment per cycle; those payments are
//! retrieved separately and never embedded here.

pub mod request;

pub use request::{SortField, SortOrder, SubscriptionFilter, SubscriptionRequest, SubscriptionUpdate};

use crate::api_object::ApiObject;
use crate::date_format;
use crate::payment::{BillingType, Discount, Fine, Interest, Split};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

wire_enum! {
    /// Recurrence period.
    pub enum Cycle {
        Weekly => "WEEKLY",
        Biweekly => "BIWEEKLY",
        Monthly => "MONTHLY",
        Bimonthly => "BIMONTHLY",
        Quarterly => "QUARTERLY",
        Semiannually => "SEMIANNUALLY",
        Annually => "ANNUALLY",
    }
}

wire_enum! {
    pub enum SubscriptionStatus {
        Active => "ACTIVE",
        Inactive => "INACTIVE",
        Expired => "EXPIRED",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: String,
    #[serde(with = "date_format")]
    pub date_created: NaiveDate,
    pub customer: String,
    pub billing_type: BillingType,
    pub cycle: Cycle,
    pub value: f64,
    #[serde(with = "date_format")]
    pub next_due_date: NaiveDate,
    pub status: SubscriptionStatus,
    #[serde(
        default,
        with = "date_format::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<Discount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fine: Option<Fine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest: Option<Interest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_payments: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split: Option<Vec<Split>>,
}

impl ApiObject for Subscription {}
