//! Client configuration: target environment, base URL override, timeout.
//!
//! Sources, in the order callers usually combine them:
//! - [`ClientConfig::load`] reads a TOML file (missing file means defaults)
//! - [`ClientConfig::from_env`] reads `ASAAS_*` variables, loading `.env` first
//! - [`load_api_key`] reads `ASAAS_API_KEY`

use crate::error::config::ConfigError;
use crate::{DEFAULT_USER_AGENT, PRODUCTION_BASE_URL, SANDBOX_BASE_URL};

use common::{ErrorLocation, RedactedApiKey};

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use log::{debug, info};
use serde::{Deserialize, Serialize};

pub const ENV_API_KEY: &str = "ASAAS_API_KEY";
pub const ENV_ENVIRONMENT: &str = "ASAAS_ENVIRONMENT";
pub const ENV_BASE_URL: &str = "ASAAS_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "ASAAS_TIMEOUT_SECS";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
const MAX_TIMEOUT_SECS: u64 = 300;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Production,
    #[default]
    Sandbox,
}

impl Environment {
    pub fn base_url(self) -> &'static str {
        match self {
            Environment::Production => PRODUCTION_BASE_URL,
            Environment::Sandbox => SANDBOX_BASE_URL,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Production => "production",
            Environment::Sandbox => "sandbox",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Environment::Production),
            "sandbox" => Ok(Environment::Sandbox),
            other => Err(format!("unknown environment '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    pub environment: Environment,
    /// Overrides the environment's base URL (proxies, mock servers).
    pub base_url: Option<String>,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl ClientConfig {
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            environment,
            base_url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    pub fn resolved_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.environment.base_url())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Load from a TOML file.
    ///
    /// # Errors
    ///
    /// A missing file yields defaults. An unreadable, malformed or invalid
    /// file is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            info!("Config file not found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            location: ErrorLocation::caller(),
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: ClientConfig =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
                location: ErrorLocation::caller(),
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        config.validate()?;

        info!("Config loaded from {}", path.display());
        Ok(config)
    }

    /// Read `ASAAS_ENVIRONMENT`, `ASAAS_BASE_URL` and `ASAAS_TIMEOUT_SECS`,
    /// loading a `.env` file first when one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        load_dotenv();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`ClientConfig::from_env`] over an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let lookup = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(value) = lookup(ENV_ENVIRONMENT) {
            config.environment = value.parse().map_err(|reason| ConfigError::EnvError {
                location: ErrorLocation::caller(),
                variable: ENV_ENVIRONMENT.to_string(),
                reason,
            })?;
        }

        if let Some(value) = lookup(ENV_BASE_URL) {
            config.base_url = Some(value.trim().to_string());
        }

        if let Some(value) = lookup(ENV_TIMEOUT_SECS) {
            config.timeout_secs =
                value
                    .trim()
                    .parse()
                    .map_err(|e: std::num::ParseIntError| ConfigError::EnvError {
                        location: ErrorLocation::caller(),
                        variable: ENV_TIMEOUT_SECS.to_string(),
                        reason: e.to_string(),
                    })?;
        }

        config.validate()?;
        debug!("Config resolved from environment: {}", config.environment);
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if any value is out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_secs == 0 || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::caller(),
                reason: format!(
                    "Invalid timeout: {} (must be 1-{MAX_TIMEOUT_SECS} seconds)",
                    self.timeout_secs
                ),
            });
        }

        if let Some(ref url) = self.base_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::ValidationError {
                    location: ErrorLocation::caller(),
                    reason: format!("Invalid URL format: {url}"),
                });
            }
        }

        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::caller(),
                reason: "user_agent cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}

/// Read `ASAAS_API_KEY`, loading a `.env` file first when one exists.
pub fn load_api_key() -> Result<RedactedApiKey, ConfigError> {
    load_dotenv();
    api_key_from_lookup(|name| std::env::var(name).ok())
}

pub fn api_key_from_lookup<F>(lookup: F) -> Result<RedactedApiKey, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let key = RedactedApiKey::new(
        lookup(ENV_API_KEY)
            .map(|v| v.trim().to_string())
            .unwrap_or_default(),
    );
    if key.is_empty() {
        return Err(ConfigError::EnvError {
            location: ErrorLocation::caller(),
            variable: ENV_API_KEY.to_string(),
            reason: "not set or empty".to_string(),
        });
    }
    Ok(key)
}

fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => debug!("Ignoring unreadable .env file: {e}"),
    }
}
