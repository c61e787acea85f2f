//! Shared primitives for the Asaas client workspace.
//!
//! This crate holds the small building blocks every other crate leans on:
//! error locations, HTTP status classification and the redacted API key.
//!
//! ## Architecture
//!
//! - **common** (this crate): Cross-cutting primitives
//! - **models**: Value objects mirroring the API resources
//! - **asaas-client**: Transport, error classification and resource clients
//!
//! Keeping the primitives here lets `models` and `asaas-client` share them
//! without depending on each other's internals.

pub mod error;
pub mod http_status;
pub mod redacted_key;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_key::RedactedApiKey;

#[cfg(test)]
mod tests;
