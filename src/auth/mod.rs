//! Credential extraction and placement.
//!
//! The caller's bearer token is the backend API key. It is pulled out of the
//! inbound `Authorization` header, held as a `SecretString`, and attached to
//! the outbound call according to the configured `AuthMethod`.

use axum::http::{header, HeaderMap};
use secrecy::{ExposeSecret, SecretString};

use crate::config::AuthMethod;
use crate::error::{AdapterError, AdapterResult};

/// Query parameter carrying the key on the backend call.
pub const KEY_QUERY_PARAM: &str = "key";

/// Header carrying the key when `AuthMethod::Header` is configured.
pub const KEY_HEADER: &str = "x-goog-api-key";

const BEARER_PREFIX: &str = "Bearer ";

/// Pull the bearer token out of the inbound headers.
pub fn extract_bearer(headers: &HeaderMap) -> AdapterResult<SecretString> {
    let value = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AdapterError::MissingCredential)?;

    match value.strip_prefix(BEARER_PREFIX) {
        Some(token) if !token.is_empty() => Ok(SecretString::new(token.to_string())),
        _ => Err(AdapterError::MissingCredential),
    }
}

/// Authentication manager for backend calls.
pub trait AuthManager: Send + Sync {
    /// Get the authentication header name and value.
    fn get_auth_header(&self) -> Option<(String, String)>;

    /// Get the authentication query parameter.
    fn get_auth_query_param(&self) -> Option<(String, String)>;
}

/// API key authentication manager, built per request from the caller's token.
pub struct ApiKeyAuthManager {
    api_key: SecretString,
    auth_method: AuthMethod,
}

impl ApiKeyAuthManager {
    /// Create a new API key auth manager.
    pub fn new(api_key: SecretString, auth_method: AuthMethod) -> Self {
        Self { api_key, auth_method }
    }
}

impl AuthManager for ApiKeyAuthManager {
    fn get_auth_header(&self) -> Option<(String, String)> {
        match self.auth_method {
            AuthMethod::Header => Some((
                KEY_HEADER.to_string(),
                self.api_key.expose_secret().to_string(),
            )),
            AuthMethod::QueryParam => None,
        }
    }

    fn get_auth_query_param(&self) -> Option<(String, String)> {
        match self.auth_method {
            AuthMethod::QueryParam => Some((
                KEY_QUERY_PARAM.to_string(),
                self.api_key.expose_secret().to_string(),
            )),
            AuthMethod::Header => None,
        }
    }
}
