//! Configuration types for the embedding adapter.

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

use crate::error::{AdapterError, ConfigurationError};

/// Default Gemini API base URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default API version.
pub const DEFAULT_API_VERSION: &str = "v1beta";

/// Backend model every request is embedded with.
pub const DEFAULT_BACKEND_MODEL: &str = "models/text-embedding-004";

/// Model name reported back when the caller did not send one.
pub const DEFAULT_RESPONSE_MODEL: &str = "text-embedding-ada-002";

/// Default request timeout (120 seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Default connect timeout (30 seconds).
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Default bind host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port.
pub const DEFAULT_PORT: u16 = 8080;

/// Where the caller's credential goes on the outbound call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AuthMethod {
    /// Use the `?key=` query parameter.
    #[default]
    QueryParam,
    /// Use the `x-goog-api-key` header.
    Header,
}

impl FromStr for AuthMethod {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "query" | "query_param" => Ok(AuthMethod::QueryParam),
            "header" => Ok(AuthMethod::Header),
            other => Err(ConfigurationError::UnknownAuthMethod {
                value: other.to_string(),
            }),
        }
    }
}

/// Configuration for the adapter.
#[derive(Clone, Debug)]
pub struct AdapterConfig {
    /// Host to bind the HTTP listener on.
    pub host: String,
    /// Port to bind the HTTP listener on.
    pub port: u16,
    /// Base URL of the backend API.
    pub base_url: Url,
    /// Backend API version path segment.
    pub api_version: String,
    /// Backend model identifier, with the `models/` prefix.
    pub backend_model: String,
    /// Model name reported when the request carries none.
    pub default_response_model: String,
    /// Total timeout for one backend call.
    pub timeout: Duration,
    /// Connect timeout for the backend.
    pub connect_timeout: Duration,
    /// Credential placement on the backend call.
    pub auth_method: AuthMethod,
}

impl AdapterConfig {
    /// Create a new configuration builder.
    pub fn builder() -> AdapterConfigBuilder {
        AdapterConfigBuilder::default()
    }

    /// Create configuration from environment variables.
    ///
    /// Reads `ADAPTER_HOST`, `ADAPTER_PORT`, `GEMINI_BASE_URL`,
    /// `GEMINI_API_VERSION`, `GEMINI_TIMEOUT_SECS`,
    /// `GEMINI_CONNECT_TIMEOUT_SECS` and `GEMINI_AUTH_METHOD`.
    pub fn from_env() -> Result<Self, AdapterError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, AdapterError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(host) = lookup("ADAPTER_HOST") {
            builder = builder.host(&host);
        }
        if let Some(port) = lookup("ADAPTER_PORT") {
            builder = builder.port(parse_var("ADAPTER_PORT", &port)?);
        }
        if let Some(base_url) = lookup("GEMINI_BASE_URL") {
            builder = builder.base_url(&base_url)?;
        }
        if let Some(version) = lookup("GEMINI_API_VERSION") {
            builder = builder.api_version(&version);
        }
        if let Some(secs) = lookup("GEMINI_TIMEOUT_SECS") {
            builder = builder.timeout(Duration::from_secs(parse_var("GEMINI_TIMEOUT_SECS", &secs)?));
        }
        if let Some(secs) = lookup("GEMINI_CONNECT_TIMEOUT_SECS") {
            builder = builder.connect_timeout(Duration::from_secs(parse_var(
                "GEMINI_CONNECT_TIMEOUT_SECS",
                &secs,
            )?));
        }
        if let Some(method) = lookup("GEMINI_AUTH_METHOD") {
            builder = builder.auth_method(method.parse()?);
        }

        builder.build()
    }

    /// Socket address the server binds to.
    pub fn bind_addr(&self) -> Result<SocketAddr, AdapterError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| {
            AdapterError::Configuration(ConfigurationError::InvalidValue {
                variable: "bind address".to_string(),
                value: addr,
            })
        })
    }
}

fn parse_var<T: FromStr>(variable: &str, value: &str) -> Result<T, ConfigurationError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigurationError::InvalidValue {
            variable: variable.to_string(),
            value: value.to_string(),
        })
}

/// Builder for `AdapterConfig`.
#[derive(Default)]
pub struct AdapterConfigBuilder {
    host: Option<String>,
    port: Option<u16>,
    base_url: Option<Url>,
    api_version: Option<String>,
    backend_model: Option<String>,
    default_response_model: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    auth_method: Option<AuthMethod>,
}

impl AdapterConfigBuilder {
    /// Set the bind host.
    pub fn host(mut self, host: &str) -> Self {
        self.host = Some(host.to_string());
        self
    }

    /// Set the bind port.
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the backend base URL.
    pub fn base_url(mut self, base_url: &str) -> Result<Self, AdapterError> {
        self.base_url = Some(Url::parse(base_url)?);
        Ok(self)
    }

    /// Set the backend API version.
    pub fn api_version(mut self, version: &str) -> Self {
        self.api_version = Some(version.to_string());
        self
    }

    /// Set the backend model identifier.
    pub fn backend_model(mut self, model: &str) -> Self {
        self.backend_model = Some(model.to_string());
        self
    }

    /// Set the model name reported when the request has none.
    pub fn default_response_model(mut self, model: &str) -> Self {
        self.default_response_model = Some(model.to_string());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Set the credential placement.
    pub fn auth_method(mut self, method: AuthMethod) -> Self {
        self.auth_method = Some(method);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> Result<AdapterConfig, AdapterError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let backend_model = self
            .backend_model
            .unwrap_or_else(|| DEFAULT_BACKEND_MODEL.to_string());
        if backend_model.trim().is_empty() {
            return Err(ConfigurationError::InvalidConfiguration {
                message: "backend model must not be empty".to_string(),
            }
            .into());
        }

        let timeout = self.timeout.unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        if timeout.is_zero() {
            return Err(ConfigurationError::InvalidConfiguration {
                message: "timeout must be greater than zero".to_string(),
            }
            .into());
        }

        Ok(AdapterConfig {
            host: self.host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: self.port.unwrap_or(DEFAULT_PORT),
            base_url,
            api_version: self
                .api_version
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            backend_model,
            default_response_model: self
                .default_response_model
                .unwrap_or_else(|| DEFAULT_RESPONSE_MODEL.to_string()),
            timeout,
            connect_timeout: self
                .connect_timeout
                .unwrap_or(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS)),
            auth_method: self.auth_method.unwrap_or_default(),
        })
    }
}
