//! Error category types for granular error handling.

use thiserror::Error;

/// Configuration-related errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Invalid base URL: {url}")]
    InvalidBaseUrl { url: String },

    #[error("Invalid value for {variable}: {value}")]
    InvalidValue { variable: String, value: String },

    #[error("Unknown auth method: {value} (expected 'query' or 'header')")]
    UnknownAuthMethod { value: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}
