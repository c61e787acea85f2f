//! Payment resource and the objects nested inside it.

pub mod charges;
pub mod refund;
pub mod request;

pub use charges::{Callback, Discount, DiscountType, Fine, FineType, Interest, Split};
pub use refund::{Chargeback, ChargebackReason, ChargebackStatus, Refund, RefundStatus};
pub use request::{PaymentFilter, PaymentRequest, PaymentUpdate, RefundRequest};

use crate::api_object::ApiObject;
use crate::date_format;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

wire_enum! {
    /// Payment method; shared by payments and subscriptions.
    pub enum BillingType {
        Undefined => "UNDEFINED",
        Boleto => "BOLETO",
        CreditCard => "CREDIT_CARD",
        Pix => "PIX",
        DebitCard => "DEBIT_CARD",
        Transfer => "TRANSFER",
        Deposit => "DEPOSIT",
    }
}

wire_enum! {
    /// Lifecycle state of a payment.
    pub enum PaymentStatus {
        Pending => "PENDING",
        Received => "RECEIVED",
        Confirmed => "CONFIRMED",
        Overdue => "OVERDUE",
        Refunded => "REFUNDED",
        RefundRequested => "REFUND_REQUESTED",
        RefundInProgress => "REFUND_IN_PROGRESS",
        ChargebackRequested => "CHARGEBACK_REQUESTED",
        ChargebackDispute => "CHARGEBACK_DISPUTE",
        AwaitingChargebackReversal => "AWAITING_CHARGEBACK_REVERSAL",
        DunningRequested => "DUNNING_REQUESTED",
        DunningReceived => "DUNNING_RECEIVED",
        AwaitingRiskAnalysis => "AWAITING_RISK_ANALYSIS",
        ReceivedInCash => "RECEIVED_IN_CASH",
    }
}

impl PaymentStatus {
    /// Money has reached (or is confirmed to reach) the account.
    pub fn is_paid(&self) -> bool {
        matches!(
            self,
            PaymentStatus::Received | PaymentStatus::Confirmed | PaymentStatus::ReceivedInCash
        )
    }
}

/// A payment (charge) as returned by `/payments`.
///
/// `customer`, `subscription` and `installment` are identifiers; resolve them
/// with separate calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub customer: String,
    #[serde(with = "date_format")]
    pub date_created: NaiveDate,
    #[serde(with = "date_format")]
    pub due_date: NaiveDate,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_type: Option<BillingType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PaymentStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installment_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
    #[serde(
        default,
        with = "date_format::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub original_due_date: Option<NaiveDate>,
    #[serde(
        default,
        with = "date_format::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub payment_date: Option<NaiveDate>,
    #[serde(
        default,
        with = "date_format::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub client_payment_date: Option<NaiveDate>,
    #[serde(
        default,
        with = "date_format::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub confirmed_date: Option<NaiveDate>,
    #[serde(
        default,
        with = "date_format::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub credit_date: Option<NaiveDate>,
    #[serde(
        default,
        with = "date_format::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub estimated_credit_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_slip_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_receipt_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nosso_numero: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anticipated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anticipable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_service: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<Discount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest: Option<Interest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fine: Option<Fine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split: Option<Vec<Split>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refunds: Option<Vec<Refund>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chargeback: Option<Chargeback>,
}

impl ApiObject for Payment {}

/// Envelope of `GET /payments/{id}/status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentStatusResponse {
    pub status: PaymentStatus,
}

impl ApiObject for PaymentStatusResponse {}
