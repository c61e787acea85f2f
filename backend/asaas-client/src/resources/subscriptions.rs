use super::require_id;
use crate::error::AsaasError;
use crate::field_filter::{to_body, to_query};
use crate::transport::AsaasClient;

use models::{
    Page, Payment, PaymentStatus, Subscription, SubscriptionFilter, SubscriptionRequest,
    SubscriptionUpdate,
};

use log::debug;
use serde::Serialize;

const SUBSCRIPTIONS: &str = "subscriptions";
const PAYMENTS: &str = "payments";

/// Query of `GET /subscriptions/{id}/payments`.
#[derive(Debug, Serialize)]
struct SubscriptionPaymentsFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<PaymentStatus>,
}

/// `/subscriptions` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Subscriptions<'a> {
    client: &'a AsaasClient,
}

impl<'a> Subscriptions<'a> {
    pub(crate) fn new(client: &'a AsaasClient) -> Self {
        Self { client }
    }

    pub async fn retrieve(&self, subscription_id: &str) -> Result<Subscription, AsaasError> {
        let id = require_id("subscription", subscription_id)?;
        self.client.get(&[SUBSCRIPTIONS, id], &[]).await?.decode()
    }

    pub async fn create(&self, request: &SubscriptionRequest) -> Result<Subscription, AsaasError> {
        let body = to_body(request)?;
        let subscription: Subscription =
            self.client.post(&[SUBSCRIPTIONS], body).await?.decode()?;
        debug!(
            "Created {} subscription {}",
            subscription.cycle, subscription.id
        );
        Ok(subscription)
    }

    pub async fn list(
        &self,
        filter: &SubscriptionFilter,
    ) -> Result<Page<Subscription>, AsaasError> {
        let query = to_query(filter)?;
        self.client.get(&[SUBSCRIPTIONS], &query).await?.decode()
    }

    pub async fn update(
        &self,
        subscription_id: &str,
        update: &SubscriptionUpdate,
    ) -> Result<Subscription, AsaasError> {
        let id = require_id("subscription", subscription_id)?;
        let body = to_body(update)?;
        self.client.put(&[SUBSCRIPTIONS, id], body).await?.decode()
    }

    pub async fn delete(&self, subscription_id: &str) -> Result<(), AsaasError> {
        let id = require_id("subscription", subscription_id)?;
        self.client.delete(&[SUBSCRIPTIONS, id]).await?;
        debug!("Deleted subscription {id}");
        Ok(())
    }

    /// Payments generated by a subscription, optionally narrowed by status.
    pub async fn list_payments(
        &self,
        subscription_id: &str,
        status: Option<PaymentStatus>,
    ) -> Result<Page<Payment>, AsaasError> {
        let id = require_id("subscription", subscription_id)?;
        let query = to_query(&SubscriptionPaymentsFilter { status })?;
        self.client
            .get(&[SUBSCRIPTIONS, id, PAYMENTS], &query)
            .await?
            .decode()
    }
}
