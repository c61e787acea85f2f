use super::require_id;
use crate::error::AsaasError;
use crate::field_filter::{to_body, to_query};
use crate::transport::AsaasClient;

use models::{Customer, CustomerFilter, CustomerRequest, Page};

use log::debug;
use serde_json::Value;

const CUSTOMERS: &str = "customers";
const RESTORE: &str = "restore";

/// `/customers` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Customers<'a> {
    client: &'a AsaasClient,
}

impl<'a> Customers<'a> {
    pub(crate) fn new(client: &'a AsaasClient) -> Self {
        Self { client }
    }

    pub async fn retrieve(&self, customer_id: &str) -> Result<Customer, AsaasError> {
        let id = require_id("customer", customer_id)?;
        self.client.get(&[CUSTOMERS, id], &[]).await?.decode()
    }

    pub async fn create(&self, request: &CustomerRequest) -> Result<Customer, AsaasError> {
        let body = to_body(request)?;
        let customer: Customer = self.client.post(&[CUSTOMERS], body).await?.decode()?;
        debug!("Created customer {}", customer.id);
        Ok(customer)
    }

    /// One page of customers; an empty filter sends no query string.
    pub async fn list(&self, filter: &CustomerFilter) -> Result<Page<Customer>, AsaasError> {
        let query = to_query(filter)?;
        self.client.get(&[CUSTOMERS], &query).await?.decode()
    }

    pub async fn update(
        &self,
        customer_id: &str,
        request: &CustomerRequest,
    ) -> Result<Customer, AsaasError> {
        let id = require_id("customer", customer_id)?;
        let body = to_body(request)?;
        self.client.put(&[CUSTOMERS, id], body).await?.decode()
    }

    pub async fn delete(&self, customer_id: &str) -> Result<(), AsaasError> {
        let id = require_id("customer", customer_id)?;
        self.client.delete(&[CUSTOMERS, id]).await?;
        debug!("Deleted customer {id}");
        Ok(())
    }

    pub async fn restore(&self, customer_id: &str) -> Result<Customer, AsaasError> {
        let id = require_id("customer", customer_id)?;
        self.client
            .post(&[CUSTOMERS, id, RESTORE], Value::Null)
            .await?
            .decode()
    }
}
