//! Per-resource clients borrowed from [`AsaasClient`](crate::AsaasClient).

pub mod customers;
pub mod payments;
pub mod subscriptions;

pub use customers::Customers;
pub use payments::Payments;
pub use subscriptions::Subscriptions;

use crate::error::AsaasError;

use common::ErrorLocation;

/// An empty id would collapse `resource/{id}` into the collection URL.
#[track_caller]
pub(crate) fn require_id<'a>(kind: &str, id: &'a str) -> Result<&'a str, AsaasError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(AsaasError::InvalidArgument {
            message: format!("{kind} id cannot be empty"),
            location: ErrorLocation::caller(),
        });
    }
    Ok(id)
}
