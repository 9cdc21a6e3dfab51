//! Main error type for the embedding adapter.

use thiserror::Error;

use super::categories::ConfigurationError;
use crate::transport::TransportError;

/// Result type alias for adapter operations.
pub type AdapterResult<T> = Result<T, AdapterError>;

/// Message used when the inbound payload has no usable `input`.
pub const MISSING_INPUT_MESSAGE: &str = "Input is missing in the OpenAI payload";

/// Top-level error type for the adapter.
///
/// Every variant is reported to the caller the same way (status 500 with the
/// display text under `error`); the variants only matter for logging and tests.
#[derive(Error, Debug, Clone)]
pub enum AdapterError {
    #[error("Only POST requests are allowed")]
    InvalidMethod,

    #[error("Invalid or missing API key in the Authorization header")]
    MissingCredential,

    #[error("{message}")]
    MalformedRequest { message: String },

    #[error("Gemini API error: {status} {body}")]
    Backend { status: u16, body: String },

    #[error("{message}")]
    BackendShape { message: String },

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
}

impl AdapterError {
    /// Missing or empty `input` in the inbound payload.
    pub fn missing_input() -> Self {
        AdapterError::MalformedRequest {
            message: MISSING_INPUT_MESSAGE.to_string(),
        }
    }

    /// Backend answered 2xx without the expected embeddings field.
    pub fn no_embeddings() -> Self {
        AdapterError::BackendShape {
            message: "No embeddings found in Gemini response".to_string(),
        }
    }

    /// Stable category name, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            AdapterError::InvalidMethod => "invalid_method",
            AdapterError::MissingCredential => "missing_credential",
            AdapterError::MalformedRequest { .. } => "malformed_request",
            AdapterError::Backend { .. } => "backend_error",
            AdapterError::BackendShape { .. } => "backend_shape_error",
            AdapterError::Transport(_) => "transport_error",
            AdapterError::Configuration(_) => "configuration_error",
        }
    }
}

impl From<url::ParseError> for AdapterError {
    fn from(err: url::ParseError) -> Self {
        AdapterError::Configuration(ConfigurationError::InvalidBaseUrl {
            url: err.to_string(),
        })
    }
}
