use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Invalid time string: {0}")]
    #[diagnostic(code(salonki::invalid_time))]
    InvalidTime(String),

    #[error("Invalid date string: {0}")]
    #[diagnostic(code(salonki::invalid_date))]
    InvalidDate(String),

    #[error("Environment error: {0}")]
    #[diagnostic(code(salonki::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(salonki::config))]
    Config(String),

    #[error("Schedule store error: {0}")]
    #[diagnostic(code(salonki::store))]
    Store(String),

    #[error("Unknown staff member: {0}")]
    #[diagnostic(code(salonki::staff_not_found))]
    StaffNotFound(String),

    #[error("Component error: {0}")]
    #[diagnostic(code(salonki::component))]
    Component(String),

    #[error(transparent)]
    #[diagnostic(code(salonki::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(salonki::serialization))]
    Serialization(String),

    #[error("Other error: {0}")]
    #[diagnostic(code(salonki::other))]
    Other(String),
}

// Implement From for TOML serialization errors
impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

// Implement From for TOML deserialization errors
impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

// Implement From for JSON errors (seed fixtures)
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type SalonResult<T> = Result<T, Error>;

/// Helper to create environment errors
#[allow(dead_code)]
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Missing environment variable: {}", var))
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create component errors
#[allow(dead_code)]
pub fn component_error(message: &str) -> Error {
    Error::Component(message.to_string())
}

/// Helper to create schedule store errors
pub fn store_error(message: &str) -> Error {
    Error::Store(message.to_string())
}

/// Helper to create invalid-time errors
pub fn invalid_time(time_str: &str) -> Error {
    Error::InvalidTime(time_str.to_string())
}

/// Helper to create invalid-date errors
pub fn invalid_date(date_str: &str) -> Error {
    Error::InvalidDate(date_str.to_string())
}
