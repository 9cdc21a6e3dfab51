//! # OpenAI → Gemini Embedding Adapter
//!
//! Serves the OpenAI `/embeddings` request/response shape and fulfils each
//! call with Google Gemini's `embedContent` / `batchEmbedContents` endpoints,
//! using the caller's bearer token as the Gemini API key.
//!
//! ## Flow
//!
//! 1. Ingress: method check, bearer extraction, JSON parse (`server`, `auth`)
//! 2. Inbound conversion into the single or batch Gemini shape (`convert`)
//! 3. One backend call, then conversion back with a synthesized usage block
//!    (`services`, `convert`)
//!
//! Every failure is answered with status 500 and `{"error": "<message>"}`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use integrations_embedding_adapter::{run_server, AdapterConfig, AppState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AdapterConfig::from_env()?;
//!     let addr = config.bind_addr()?;
//!     run_server(AppState::new(config)?, addr).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - `config` - Configuration types and builder
//! - `auth` - Bearer extraction and backend key placement
//! - `error` - Error taxonomy and HTTP mapping
//! - `transport` - Outbound HTTP layer
//! - `types` - Wire shapes for both APIs
//! - `convert` - Pure request/response converters and token estimate
//! - `services` - Backend dispatch
//! - `server` - Router and handlers
//! - `observability` - Tracing setup and redaction

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod auth;
pub mod config;
pub mod convert;
pub mod error;
pub mod observability;
pub mod server;
pub mod services;
pub mod transport;
pub mod types;

// Test doubles - always available for integration tests
pub mod mocks;

pub use config::{
    AdapterConfig, AdapterConfigBuilder, AuthMethod, DEFAULT_API_VERSION, DEFAULT_BACKEND_MODEL,
    DEFAULT_BASE_URL, DEFAULT_RESPONSE_MODEL, DEFAULT_TIMEOUT_SECS,
};
pub use convert::{estimate_tokens, to_backend_request, to_openai_response, EmbeddingPayload};
pub use error::{AdapterError, AdapterResult, ConfigurationError};
pub use server::{create_router, run_server, AppState};
pub use services::{EmbeddingsService, EmbeddingsServiceImpl};
pub use transport::{HttpTransport, ReqwestTransport, TransportError};
pub use types::{
    BackendEmbeddingRequest, BackendEmbeddingResponse, EmbeddingInput, InboundEmbeddingRequest,
    OutboundEmbeddingResponse,
};
