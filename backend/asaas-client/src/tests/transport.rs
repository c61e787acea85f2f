// Unit tests for URL construction on the transport facade

use crate::config::{ClientConfig, Environment};
use crate::error::AsaasError;
use crate::transport::AsaasClient;

use common::RedactedApiKey;

fn client(base_url: &str) -> AsaasClient {
    AsaasClient::with_http_client(
        base_url,
        RedactedApiKey::new("test-key"),
        reqwest::Client::new(),
    )
    .unwrap()
}

/// **VALUE**: Verifies endpoint URLs have no trailing slash.
///
/// **BUG THIS CATCHES**: Would catch `customers/` being produced, which the
/// API answers with a redirect or a 404.
#[test]
fn given_base_url_when_endpoint_built_then_segments_appended_without_trailing_slash() {
    let client = client("https://sandbox.asaas.com/api/v3");

    let url = client.endpoint(&["customers", "cus_1", "restore"]).unwrap();

    assert_eq!(
        url.as_str(),
        "https://sandbox.asaas.com/api/v3/customers/cus_1/restore"
    );
}

#[test]
fn given_base_url_with_trailing_slash_when_endpoint_built_then_no_double_slash() {
    let client = client("https://sandbox.asaas.com/api/v3/");

    let url = client.endpoint(&["payments"]).unwrap();

    assert_eq!(url.as_str(), "https://sandbox.asaas.com/api/v3/payments");
}

#[test]
fn given_id_with_reserved_characters_when_endpoint_built_then_percent_encoded() {
    let client = client("https://sandbox.asaas.com/api/v3");

    let url = client.endpoint(&["customers", "a/b?c"]).unwrap();

    assert_eq!(
        url.as_str(),
        "https://sandbox.asaas.com/api/v3/customers/a%2Fb%3Fc"
    );
}

#[test]
fn given_environment_when_client_created_then_uses_environment_base_url() {
    let client = AsaasClient::new(RedactedApiKey::new("k"), Environment::Production).unwrap();
    assert_eq!(client.base_url().as_str(), "https://www.asaas.com/api/v3");
}

#[test]
fn given_config_override_when_client_created_then_uses_override() {
    let mut config = ClientConfig::default();
    config.base_url = Some("http://127.0.0.1:9/api/v3".to_string());

    let client = AsaasClient::from_config(&config, RedactedApiKey::new("k")).unwrap();

    assert_eq!(client.base_url().as_str(), "http://127.0.0.1:9/api/v3");
}

#[test]
fn given_invalid_base_url_when_client_created_then_url_parse_error() {
    let result = AsaasClient::with_http_client(
        "not a url",
        RedactedApiKey::new("k"),
        reqwest::Client::new(),
    );
    assert!(matches!(result, Err(AsaasError::UrlParse { .. })));

    let result = AsaasClient::with_http_client(
        "mailto:someone@example.com",
        RedactedApiKey::new("k"),
        reqwest::Client::new(),
    );
    assert!(matches!(result, Err(AsaasError::UrlParse { .. })));
}

#[test]
fn given_client_when_debug_printed_then_key_not_exposed() {
    let client = AsaasClient::with_http_client(
        "https://sandbox.asaas.com/api/v3",
        RedactedApiKey::new("$aact_secret"),
        reqwest::Client::new(),
    )
    .unwrap();

    assert!(!format!("{client:?}").contains("aact_secret"));
}
