//! Transport facade.
//!
//! Builds URLs from the fixed base, attaches the access token, sends the
//! request through the injected `reqwest::Client`, runs the response through
//! [`classify`] and only then parses the body.

use crate::ACCESS_TOKEN_HEADER;
use crate::classifier::classify;
use crate::config::{ClientConfig, Environment};
use crate::error::AsaasError;
use crate::resources::{Customers, Payments, Subscriptions};

use common::{ErrorLocation, HttpStatusCode, RedactedApiKey};
use models::ApiObject;

use log::{debug, trace};
use reqwest::{Client, Method};
use serde_json::Value;
use url::Url;

/// A response that passed classification.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: HttpStatusCode,
    pub url: Url,
    /// Parsed body; `Null` when the server sent none and always for DELETE.
    pub body: Value,
}

impl ApiResponse {
    pub fn decode<T: ApiObject>(self) -> Result<T, AsaasError> {
        Ok(T::from_value(self.body)?)
    }
}

/// Entry point for the Asaas API.
///
/// Cheap to clone; the inner `reqwest::Client` shares its connection pool.
#[derive(Debug, Clone)]
pub struct AsaasClient {
    base_url: Url,
    api_key: RedactedApiKey,
    client: Client,
}

impl AsaasClient {
    /// Client for `environment` with default timeout and user agent.
    pub fn new(api_key: RedactedApiKey, environment: Environment) -> Result<Self, AsaasError> {
        Self::from_config(&ClientConfig::for_environment(environment), api_key)
    }

    pub fn from_config(config: &ClientConfig, api_key: RedactedApiKey) -> Result<Self, AsaasError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()?;

        Self::with_http_client(config.resolved_base_url(), api_key, client)
    }

    /// Use a caller-built HTTP client (timeouts, proxies, TLS roots).
    pub fn with_http_client(
        base_url: &str,
        api_key: RedactedApiKey,
        client: Client,
    ) -> Result<Self, AsaasError> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(AsaasError::UrlParse {
                message: format!("{base_url} cannot be used as a base URL"),
                location: ErrorLocation::caller(),
            });
        }

        debug!(
            "Asaas client targeting {base_url} (key: {} chars)",
            api_key.len()
        );

        Ok(Self {
            base_url,
            api_key,
            client,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn customers(&self) -> Customers<'_> {
        Customers::new(self)
    }

    pub fn payments(&self) -> Payments<'_> {
        Payments::new(self)
    }

    pub fn subscriptions(&self) -> Subscriptions<'_> {
        Subscriptions::new(self)
    }

    /// Base URL extended with percent-encoded path segments.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, AsaasError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AsaasError::UrlParse {
                message: format!("{} cannot be used as a base URL", self.base_url),
                location: ErrorLocation::caller(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub async fn get(
        &self,
        segments: &[&str],
        query: &[(String, String)],
    ) -> Result<ApiResponse, AsaasError> {
        let mut url = self.endpoint(segments)?;
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
        self.execute(Method::GET, url, None, true).await
    }

    /// POST `body`; a `Null` body sends no payload.
    pub async fn post(&self, segments: &[&str], body: Value) -> Result<ApiResponse, AsaasError> {
        let url = self.endpoint(segments)?;
        self.execute(Method::POST, url, Some(body), true).await
    }

    pub async fn put(&self, segments: &[&str], body: Value) -> Result<ApiResponse, AsaasError> {
        let url = self.endpoint(segments)?;
        self.execute(Method::PUT, url, Some(body), true).await
    }

    /// DELETE is confirmed by status alone; the body is never parsed.
    pub async fn delete(&self, segments: &[&str]) -> Result<ApiResponse, AsaasError> {
        let url = self.endpoint(segments)?;
        self.execute(Method::DELETE, url, None, false).await
    }

    async fn execute(
        &self,
        method: Method,
        url: Url,
        body: Option<Value>,
        parse_body: bool,
    ) -> Result<ApiResponse, AsaasError> {
        debug!("{method} {url}");

        let mut request = self
            .client
            .request(method.clone(), url.clone())
            .header(ACCESS_TOKEN_HEADER, self.api_key.as_str());

        if let Some(body) = body.filter(|b| !b.is_null()) {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = HttpStatusCode::from(response.status().as_u16());
        let text = response.text().await?;

        trace!("{method} {url} -> HTTP {status} ({} bytes)", text.len());

        classify(status, url.as_str(), &text)?;

        let body = if !parse_body || text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text)?
        };

        Ok(ApiResponse { status, url, body })
    }
}
