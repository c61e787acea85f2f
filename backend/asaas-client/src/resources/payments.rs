use super::require_id;
use crate::error::AsaasError;
use crate::field_filter::{to_body, to_query};
use crate::transport::AsaasClient;

use models::{
    Page, Payment, PaymentFilter, PaymentRequest, PaymentStatus, PaymentStatusResponse,
    PaymentUpdate, RefundRequest,
};

use log::{debug, info};
use serde_json::Value;

const PAYMENTS: &str = "payments";
const RESTORE: &str = "restore";
const STATUS: &str = "status";
const REFUND: &str = "refund";

/// `/payments` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Payments<'a> {
    client: &'a AsaasClient,
}

impl<'a> Payments<'a> {
    pub(crate) fn new(client: &'a AsaasClient) -> Self {
        Self { client }
    }

    pub async fn retrieve(&self, payment_id: &str) -> Result<Payment, AsaasError> {
        let id = require_id("payment", payment_id)?;
        self.client.get(&[PAYMENTS, id], &[]).await?.decode()
    }

    /// Create a charge. Only the fields set on `request` are sent.
    pub async fn create(&self, request: &PaymentRequest) -> Result<Payment, AsaasError> {
        let body = to_body(request)?;
        let payment: Payment = self.client.post(&[PAYMENTS], body).await?.decode()?;
        debug!("Created payment {} for {}", payment.id, payment.customer);
        Ok(payment)
    }

    pub async fn list(&self, filter: &PaymentFilter) -> Result<Page<Payment>, AsaasError> {
        let query = to_query(filter)?;
        self.client.get(&[PAYMENTS], &query).await?.decode()
    }

    pub async fn update(
        &self,
        payment_id: &str,
        update: &PaymentUpdate,
    ) -> Result<Payment, AsaasError> {
        let id = require_id("payment", payment_id)?;
        let body = to_body(update)?;
        self.client.put(&[PAYMENTS, id], body).await?.decode()
    }

    pub async fn delete(&self, payment_id: &str) -> Result<(), AsaasError> {
        let id = require_id("payment", payment_id)?;
        self.client.delete(&[PAYMENTS, id]).await?;
        debug!("Deleted payment {id}");
        Ok(())
    }

    pub async fn restore(&self, payment_id: &str) -> Result<Payment, AsaasError> {
        let id = require_id("payment", payment_id)?;
        self.client
            .post(&[PAYMENTS, id, RESTORE], Value::Null)
            .await?
            .decode()
    }

    /// Current status without fetching the whole payment.
    pub async fn retrieve_status(&self, payment_id: &str) -> Result<PaymentStatus, AsaasError> {
        let id = require_id("payment", payment_id)?;
        let response: PaymentStatusResponse = self
            .client
            .get(&[PAYMENTS, id, STATUS], &[])
            .await?
            .decode()?;
        Ok(response.status)
    }

    /// Refund all of a payment, or part of it with [`RefundRequest::partial`].
    pub async fn refund(
        &self,
        payment_id: &str,
        request: &RefundRequest,
    ) -> Result<Payment, AsaasError> {
        let id = require_id("payment", payment_id)?;
        let body = to_body(request)?;
        let payment: Payment = self
            .client
            .post(&[PAYMENTS, id, REFUND], body)
            .await?
            .decode()?;
        info!("Refund requested for payment {id}");
        Ok(payment)
    }
}
