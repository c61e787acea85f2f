//! Client for the Asaas payments API (customers, payments, subscriptions).
//!
//! ```rust,no_run
//! use asaas_client::{AsaasClient, Environment};
//! use asaas_client::common::RedactedApiKey;
//!
//! # async fn example() -> Result<(), asaas_client::AsaasError> {
//! let client = AsaasClient::new(RedactedApiKey::new("$aact_..."), Environment::Sandbox)?;
//! let customer = client.customers().retrieve("cus_000005219613").await?;
//! println!("{}", customer.name);
//! # Ok(())
//! # }
//! ```

pub mod classifier;
pub mod config;
pub mod error;
pub mod field_filter;
pub mod logger;
pub mod resources;
pub mod transport;

#[cfg(test)]
mod tests;

pub use common;
pub use models;

pub use config::{ClientConfig, Environment};
pub use error::{AsaasError, ConfigError, LoggerError, ValidationCode};
pub use resources::{Customers, Payments, Subscriptions};
pub use transport::{ApiResponse, AsaasClient};

pub const API_PATH: &str = "/api/v3";
pub const PRODUCTION_HOST: &str = "https://www.asaas.com";
pub const SANDBOX_HOST: &str = "https://sandbox.asaas.com";
pub const PRODUCTION_BASE_URL: &str = const_format::concatcp!(PRODUCTION_HOST, API_PATH);
pub const SANDBOX_BASE_URL: &str = const_format::concatcp!(SANDBOX_HOST, API_PATH);

/// Header carrying the API key.
pub const ACCESS_TOKEN_HEADER: &str = "access_token";

pub const DEFAULT_USER_AGENT: &str =
    const_format::concatcp!("asaas-client/", env!("CARGO_PKG_VERSION"));
