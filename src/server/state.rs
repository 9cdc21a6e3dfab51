//! Application state.

use std::sync::Arc;

use crate::config::AdapterConfig;
use crate::error::AdapterResult;
use crate::transport::{HttpTransport, ReqwestTransport};

/// Shared application state. Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    /// Adapter configuration.
    pub config: Arc<AdapterConfig>,
    /// Outbound transport, shared so connections are pooled.
    pub transport: Arc<dyn HttpTransport>,
}

impl AppState {
    /// Build state with a reqwest transport using the configured timeouts.
    pub fn new(config: AdapterConfig) -> AdapterResult<Self> {
        let transport = ReqwestTransport::new(config.timeout, config.connect_timeout)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Build state around an existing transport.
    pub fn with_transport(config: AdapterConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }
}
