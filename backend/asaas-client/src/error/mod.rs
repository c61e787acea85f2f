pub mod asaas;
pub mod config;
pub mod logger;

pub use asaas::{AsaasError, ValidationCode};
pub use config::ConfigError;
pub use logger::LoggerError;
