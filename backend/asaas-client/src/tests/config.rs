// Unit tests for configuration loading
// Environment lookups go through closures so tests never touch process env

use crate::config::{
    ClientConfig, DEFAULT_TIMEOUT_SECS, ENV_API_KEY, ENV_BASE_URL, ENV_ENVIRONMENT,
    ENV_TIMEOUT_SECS, Environment, api_key_from_lookup,
};
use crate::error::ConfigError;
use crate::{PRODUCTION_BASE_URL, SANDBOX_BASE_URL};

use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| map.get(name).cloned()
}

#[test]
fn given_environments_when_base_url_then_fixed_api_v3_urls() {
    assert_eq!(PRODUCTION_BASE_URL, "https://www.asaas.com/api/v3");
    assert_eq!(SANDBOX_BASE_URL, "https://sandbox.asaas.com/api/v3");
    assert_eq!(Environment::Production.base_url(), PRODUCTION_BASE_URL);
    assert_eq!(Environment::Sandbox.base_url(), SANDBOX_BASE_URL);
}

/// **VALUE**: Verifies the default environment is the sandbox.
///
/// **BUG THIS CATCHES**: Would catch a default that sends real charges when the
/// caller forgot to pick an environment.
#[test]
fn given_default_config_when_created_then_targets_sandbox() {
    let config = ClientConfig::default();

    assert_eq!(config.environment, Environment::Sandbox);
    assert_eq!(config.resolved_base_url(), SANDBOX_BASE_URL);
    assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    assert!(config.validate().is_ok());
}

#[test]
fn given_base_url_override_when_resolved_then_override_wins() {
    let mut config = ClientConfig::for_environment(Environment::Production);
    config.base_url = Some("http://localhost:8080/api/v3".to_string());

    assert_eq!(config.resolved_base_url(), "http://localhost:8080/api/v3");
}

#[test]
fn given_missing_file_when_loaded_then_defaults() {
    let dir = tempfile::tempdir().unwrap();

    let config = ClientConfig::load(&dir.path().join("asaas.toml")).unwrap();

    assert_eq!(config, ClientConfig::default());
}

/// **VALUE**: Verifies a TOML file is read and partial files keep defaults.
///
/// **BUG THIS CATCHES**: Would catch a missing `#[serde(default)]`, which would
/// make every key mandatory.
#[test]
fn given_partial_toml_when_loaded_then_values_merge_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("asaas.toml");
    std::fs::write(&path, "environment = \"production\"\ntimeout_secs = 10\n").unwrap();

    let config = ClientConfig::load(&path).unwrap();

    assert_eq!(config.environment, Environment::Production);
    assert_eq!(config.timeout_secs, 10);
    assert_eq!(config.base_url, None);
    assert_eq!(config.resolved_base_url(), PRODUCTION_BASE_URL);
}

#[test]
fn given_malformed_toml_when_loaded_then_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("asaas.toml");
    std::fs::write(&path, "environment = [not toml").unwrap();

    let err = ClientConfig::load(&path).unwrap_err();

    assert!(matches!(err, ConfigError::ParseError { .. }), "got {err:?}");
}

#[test]
fn given_unknown_environment_in_toml_when_loaded_then_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("asaas.toml");
    std::fs::write(&path, "environment = \"staging\"\n").unwrap();

    assert!(matches!(
        ClientConfig::load(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn given_out_of_range_timeout_when_validated_then_error() {
    let mut config = ClientConfig::default();

    config.timeout_secs = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));

    config.timeout_secs = 301;
    assert!(config.validate().is_err());

    config.timeout_secs = 300;
    assert!(config.validate().is_ok());
}

#[test]
fn given_non_http_base_url_when_validated_then_error() {
    let mut config = ClientConfig::default();
    config.base_url = Some("ftp://example.com".to_string());

    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn given_env_variables_when_read_then_config_reflects_them() {
    let lookup = lookup_from(&[
        (ENV_ENVIRONMENT, "Production"),
        (ENV_BASE_URL, "https://proxy.example.com/api/v3"),
        (ENV_TIMEOUT_SECS, "45"),
    ]);

    let config = ClientConfig::from_lookup(lookup).unwrap();

    assert_eq!(config.environment, Environment::Production);
    assert_eq!(
        config.base_url.as_deref(),
        Some("https://proxy.example.com/api/v3")
    );
    assert_eq!(config.timeout_secs, 45);
}

#[test]
fn given_no_env_variables_when_read_then_defaults() {
    let config = ClientConfig::from_lookup(|_| None).unwrap();
    assert_eq!(config, ClientConfig::default());
}

#[test]
fn given_blank_env_variable_when_read_then_treated_as_unset() {
    let config = ClientConfig::from_lookup(lookup_from(&[(ENV_ENVIRONMENT, "  ")])).unwrap();
    assert_eq!(config.environment, Environment::Sandbox);
}

#[test]
fn given_bad_env_values_when_read_then_env_error_names_variable() {
    let err = ClientConfig::from_lookup(lookup_from(&[(ENV_TIMEOUT_SECS, "soon")])).unwrap_err();
    match err {
        ConfigError::EnvError { variable, .. } => assert_eq!(variable, ENV_TIMEOUT_SECS),
        other => panic!("expected EnvError, got {other:?}"),
    }

    let err = ClientConfig::from_lookup(lookup_from(&[(ENV_ENVIRONMENT, "staging")])).unwrap_err();
    assert!(matches!(err, ConfigError::EnvError { .. }));
}

/// **VALUE**: Verifies the API key is read, trimmed and never printed.
///
/// **BUG THIS CATCHES**: Would catch a trailing newline from a `.env` file being
/// sent in the header, or the key leaking through `Debug`.
#[test]
fn given_api_key_variable_when_read_then_trimmed_and_redacted() {
    let key = api_key_from_lookup(lookup_from(&[(ENV_API_KEY, "  $aact_abc123\n")])).unwrap();

    assert_eq!(key.as_str(), "$aact_abc123");
    assert!(!format!("{key:?}").contains("aact"));
}

#[test]
fn given_missing_or_empty_api_key_when_read_then_env_error() {
    assert!(matches!(
        api_key_from_lookup(|_| None),
        Err(ConfigError::EnvError { .. })
    ));
    assert!(api_key_from_lookup(lookup_from(&[(ENV_API_KEY, "")])).is_err());
}
