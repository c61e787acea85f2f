//! Surcharge, discount and revenue-sharing rules attached to payments and
//! subscriptions. These travel both ways: callers build them for outbound
//! requests and the API echoes them back.

use crate::api_object::ApiObject;

use serde::{Deserialize, Serialize};

wire_enum! {
    /// How a discount value is applied.
    pub enum DiscountType {
        Fixed => "FIXED",
        Percentage => "PERCENTAGE",
    }
}

wire_enum! {
    /// How a late-payment fine value is applied.
    pub enum FineType {
        Fixed => "FIXED",
        Percentage => "PERCENTAGE",
    }
}

/// Discount granted when paying up to `due_date_limit_days` before the due date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discount {
    pub value: f64,
    #[serde(default)]
    pub due_date_limit_days: u32,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<DiscountType>,
}

impl Discount {
    pub fn fixed(value: f64, due_date_limit_days: u32) -> Self {
        Self {
            value,
            due_date_limit_days,
            discount_type: Some(DiscountType::Fixed),
        }
    }

    pub fn percentage(value: f64, due_date_limit_days: u32) -> Self {
        Self {
            value,
            due_date_limit_days,
            discount_type: Some(DiscountType::Percentage),
        }
    }
}

/// Monthly interest percentage charged after the due date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interest {
    pub value: f64,
}

impl Interest {
    pub fn new(value: f64) -> Self {
        Self { value }
    }
}

/// One-off fine charged after the due date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fine {
    pub value: f64,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub fine_type: Option<FineType>,
}

impl Fine {
    pub fn fixed(value: f64) -> Self {
        Self {
            value,
            fine_type: Some(FineType::Fixed),
        }
    }

    pub fn percentage(value: f64) -> Self {
        Self {
            value,
            fine_type: Some(FineType::Percentage),
        }
    }
}

/// Share of a payment routed to another wallet.
///
/// Exactly one of the three value fields is expected by the API; the
/// constructors enforce that for outbound splits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Split {
    pub wallet_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_fixed_value: Option<f64>,
}

impl Split {
    pub fn fixed(wallet_id: impl Into<String>, value: f64) -> Self {
        Self {
            wallet_id: wallet_id.into(),
            fixed_value: Some(value),
            percentage_value: None,
            total_fixed_value: None,
        }
    }

    pub fn percentage(wallet_id: impl Into<String>, value: f64) -> Self {
        Self {
            wallet_id: wallet_id.into(),
            fixed_value: None,
            percentage_value: Some(value),
            total_fixed_value: None,
        }
    }

    /// Fixed amount spread across all installments of an installment plan.
    pub fn total_fixed(wallet_id: impl Into<String>, value: f64) -> Self {
        Self {
            wallet_id: wallet_id.into(),
            fixed_value: None,
            percentage_value: None,
            total_fixed_value: Some(value),
        }
    }
}

/// Redirect performed after the payer completes checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Callback {
    pub success_url: String,
    #[serde(default = "default_auto_redirect")]
    pub auto_redirect: bool,
}

impl Callback {
    pub fn new(success_url: impl Into<String>) -> Self {
        Self {
            success_url: success_url.into(),
            auto_redirect: default_auto_redirect(),
        }
    }

    pub fn with_auto_redirect(mut self, auto_redirect: bool) -> Self {
        self.auto_redirect = auto_redirect;
        self
    }
}

fn default_auto_redirect() -> bool {
    true
}

impl ApiObject for Discount {}
impl ApiObject for Interest {}
impl ApiObject for Fine {}
impl ApiObject for Split {}
impl ApiObject for Callback {}
