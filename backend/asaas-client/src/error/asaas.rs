//! The single error type surfaced by every client call.
//!
//! Validation codes, not-found and generic API failures are variants of one
//! enum, so callers can match a specific case or treat them all alike.

use common::{ErrorLocation, HttpStatusCode};
use models::ModelError;

use std::fmt;

use thiserror::Error as ThisError;

/// Known `errors[0].code` values of a 400 response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationCode {
    InvalidAction,
    InvalidCreditCard,
    InvalidValue,
    InvalidBillingType,
    InvalidCustomer,
    InvalidDueDate,
    InvalidName,
}

impl ValidationCode {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "invalid_action" => Some(Self::InvalidAction),
            "invalid_creditCard" => Some(Self::InvalidCreditCard),
            "invalid_value" => Some(Self::InvalidValue),
            "invalid_billingType" => Some(Self::InvalidBillingType),
            "invalid_customer" => Some(Self::InvalidCustomer),
            "invalid_dueDate" => Some(Self::InvalidDueDate),
            "invalid_name" => Some(Self::InvalidName),
            _ => None,
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Self::InvalidAction => "invalid_action",
            Self::InvalidCreditCard => "invalid_creditCard",
            Self::InvalidValue => "invalid_value",
            Self::InvalidBillingType => "invalid_billingType",
            Self::InvalidCustomer => "invalid_customer",
            Self::InvalidDueDate => "invalid_dueDate",
            Self::InvalidName => "invalid_name",
        }
    }
}

impl fmt::Display for ValidationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

#[derive(Debug, ThisError)]
pub enum AsaasError {
    #[error("Validation Error: {code}: {message} {location}")]
    Validation {
        code: ValidationCode,
        message: String,
        location: ErrorLocation,
    },

    #[error("Not Found Error: {url} {location}")]
    NotFound { url: String, location: ErrorLocation },

    #[error("API Error: HTTP {status_code} - {message} {location}")]
    Api {
        status_code: HttpStatusCode,
        code: Option<String>,
        message: String,
        location: ErrorLocation,
    },

    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
    },

    #[error("Decode Error: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },

    /// Rejected before any request was sent.
    #[error("Invalid Argument Error: {message} {location}")]
    InvalidArgument {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },
}

impl AsaasError {
    #[track_caller]
    pub fn validation(code: ValidationCode, message: impl Into<String>) -> Self {
        AsaasError::Validation {
            code,
            message: message.into(),
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn not_found(url: impl Into<String>) -> Self {
        AsaasError::NotFound {
            url: url.into(),
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn api(
        status_code: HttpStatusCode,
        code: Option<String>,
        message: impl Into<String>,
    ) -> Self {
        AsaasError::Api {
            status_code,
            code,
            message: message.into(),
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn decode(message: impl Into<String>) -> Self {
        AsaasError::Decode {
            message: message.into(),
            location: ErrorLocation::caller(),
        }
    }

    /// The validation code, for 400 responses with a known code.
    pub fn validation_code(&self) -> Option<ValidationCode> {
        match self {
            AsaasError::Validation { code, .. } => Some(*code),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AsaasError::NotFound { .. })
    }

    /// HTTP status the server answered with, when the failure came from a response.
    pub fn status_code(&self) -> Option<HttpStatusCode> {
        match self {
            AsaasError::Validation { .. } => Some(HttpStatusCode::BAD_REQUEST),
            AsaasError::NotFound { .. } => Some(HttpStatusCode::NOT_FOUND),
            AsaasError::Api { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// Server-supplied description, or the rendered message for local failures.
    pub fn message(&self) -> &str {
        match self {
            AsaasError::Validation { message, .. }
            | AsaasError::Api { message, .. }
            | AsaasError::Http { message, .. }
            | AsaasError::Decode { message, .. }
            | AsaasError::InvalidArgument { message, .. }
            | AsaasError::UrlParse { message, .. } => message,
            AsaasError::NotFound { url, .. } => url,
        }
    }
}

impl From<url::ParseError> for AsaasError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        AsaasError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::caller(),
        }
    }
}

impl From<reqwest::Error> for AsaasError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        AsaasError::Http {
            message: error.to_string(),
            location: ErrorLocation::caller(),
        }
    }
}

impl From<serde_json::Error> for AsaasError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        AsaasError::Decode {
            message: error.to_string(),
            location: ErrorLocation::caller(),
        }
    }
}

impl From<ModelError> for AsaasError {
    #[track_caller]
    fn from(error: ModelError) -> Self {
        AsaasError::Decode {
            message: error.to_string(),
            location: ErrorLocation::caller(),
        }
    }
}
