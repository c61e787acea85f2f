//! Response classification.
//!
//! Runs on every response before any decoding: a response either passes
//! through untouched or becomes exactly one [`AsaasError`].
//!
//! 1. 400: the first entry of `errors` picks the error kind by its `code`;
//!    unknown codes become a generic API error. The message is the entry's
//!    `description`.
//! 2. 404: not-found carrying the request URL.
//! 3. Any other 4xx/5xx: generic API error with the raw body.
//! 4. 2xx/3xx: pass.

use crate::error::{AsaasError, ValidationCode};

use common::HttpStatusCode;

use log::warn;
use serde::Deserialize;

/// Body of a 400 response: `{ "errors": [{ "code": .., "description": .. }] }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub errors: Vec<ApiErrorEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorEntry {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Classify a completed response.
///
/// `url` is the exact URL requested; `body` is the raw response text.
#[track_caller]
pub fn classify(status: HttpStatusCode, url: &str, body: &str) -> Result<(), AsaasError> {
    if status == HttpStatusCode::BAD_REQUEST {
        let error = classify_bad_request(body);
        warn!("Asaas rejected request to {url}: {error}");
        return Err(error);
    }

    if status == HttpStatusCode::NOT_FOUND {
        warn!("Asaas resource not found: {url}");
        return Err(AsaasError::not_found(url));
    }

    if status.is_error() {
        warn!("Asaas request to {url} failed with HTTP {status}");
        return Err(AsaasError::api(status, None, http_failure_message(body)));
    }

    Ok(())
}

#[track_caller]
fn classify_bad_request(body: &str) -> AsaasError {
    let first = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.errors.into_iter().next());

    let Some(entry) = first else {
        return AsaasError::api(
            HttpStatusCode::BAD_REQUEST,
            None,
            http_failure_message(body),
        );
    };

    let description = entry.description.unwrap_or_default();

    match entry.code.as_deref().and_then(ValidationCode::from_code) {
        Some(code) => AsaasError::validation(code, description),
        None => AsaasError::api(HttpStatusCode::BAD_REQUEST, entry.code, description),
    }
}

fn http_failure_message(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        String::from("empty response body")
    } else {
        trimmed.to_string()
    }
}
