//! Value objects for the Asaas API.
//!
//! This crate contains plain data structures mirroring the API resources
//! (customers, payments, subscriptions) and the request/filter shapes sent to
//! them. Models carry no behavior beyond parsing and serialization; the
//! transport lives in `asaas-client`.
//!
//! Every response type implements [`ApiObject`]: unknown fields are ignored,
//! absent nested objects stay `None`, dates travel as `YYYY-MM-DD`, and
//! enumerations keep values they do not recognize instead of failing.

#[macro_use]
mod wire_enum;

pub mod api_object;
pub mod customer;
pub mod date_format;
pub mod error;
pub mod page;
pub mod payment;
pub mod subscription;

pub use api_object::ApiObject;
pub use customer::{Customer, CustomerFilter, CustomerRequest};
pub use error::model_error::ModelError;
pub use page::Page;
pub use payment::{
    BillingType, Callback, Chargeback, ChargebackReason, ChargebackStatus, Discount,
    DiscountType, Fine, FineType, Interest, Payment, PaymentFilter, PaymentRequest,
    PaymentStatus, PaymentStatusResponse, PaymentUpdate, Refund, RefundRequest, RefundStatus,
    Split,
};
pub use subscription::{
    Cycle, SortField, SortOrder, Subscription, SubscriptionFilter, SubscriptionRequest,
    SubscriptionStatus, SubscriptionUpdate,
};

#[cfg(test)]
mod tests;
