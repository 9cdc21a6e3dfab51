//! Embeddings service implementation.

use async_trait::async_trait;
use bytes::Bytes;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use url::Url;

use super::EmbeddingsService;
use crate::auth::AuthManager;
use crate::config::AdapterConfig;
use crate::error::{AdapterError, AdapterResult};
use crate::observability::redact_url;
use crate::transport::{endpoints, HttpMethod, HttpRequest, HttpTransport};
use crate::types::{BackendEmbeddingResponse, BatchEmbedContentsRequest, EmbedContentRequest};

/// Implementation of the `EmbeddingsService`.
///
/// Cheap to build: one is created per inbound request around the caller's
/// credential, sharing the config and the pooled transport.
pub struct EmbeddingsServiceImpl {
    config: Arc<AdapterConfig>,
    transport: Arc<dyn HttpTransport>,
    auth_manager: Arc<dyn AuthManager>,
}

impl EmbeddingsServiceImpl {
    /// Create a new embeddings service implementation.
    pub fn new(
        config: Arc<AdapterConfig>,
        transport: Arc<dyn HttpTransport>,
        auth_manager: Arc<dyn AuthManager>,
    ) -> Self {
        Self {
            config,
            transport,
            auth_manager,
        }
    }

    /// Build the full endpoint URL, auth query parameter included.
    fn build_url(&self, endpoint: &str) -> AdapterResult<Url> {
        let mut url = Url::parse(&format!(
            "{}/{}/{}",
            self.config.base_url.as_str().trim_end_matches('/'),
            self.config.api_version,
            endpoint
        ))?;

        if let Some((key, value)) = self.auth_manager.get_auth_query_param() {
            url.query_pairs_mut().append_pair(&key, &value);
        }

        Ok(url)
    }

    /// Build headers for the request.
    fn build_headers(&self) -> HashMap<String, String> {
        let mut headers = HashMap::new();
        headers.insert(
            "Content-Type".to_string(),
            mime::APPLICATION_JSON.to_string(),
        );

        if let Some((name, value)) = self.auth_manager.get_auth_header() {
            headers.insert(name, value);
        }

        headers
    }

    /// POST `body` to `endpoint` and parse the backend's answer.
    async fn post<T: Serialize + Sync>(
        &self,
        endpoint: &str,
        body: &T,
    ) -> AdapterResult<BackendEmbeddingResponse> {
        let url = self.build_url(endpoint)?;
        tracing::info!(url = %redact_url(&url), "Using Gemini API URL");

        let body_json = serde_json::to_vec(body).map_err(|e| AdapterError::MalformedRequest {
            message: format!("Failed to serialize Gemini payload: {}", e),
        })?;
        tracing::debug!(payload = %String::from_utf8_lossy(&body_json), "Gemini payload");

        let http_request = HttpRequest {
            method: HttpMethod::Post,
            url: url.into(),
            headers: self.build_headers(),
            body: Some(Bytes::from(body_json)),
        };

        let response = self.transport.send(http_request).await?;

        if !response.is_success() {
            let body = response.text();
            tracing::error!(status = response.status, body = %body, "Gemini API error");
            return Err(AdapterError::Backend {
                status: response.status,
                body,
            });
        }

        tracing::debug!(body = %String::from_utf8_lossy(&response.body), "Gemini response");

        serde_json::from_slice(&response.body).map_err(|e| AdapterError::BackendShape {
            message: format!("Failed to parse Gemini response: {}", e),
        })
    }
}

#[async_trait]
impl EmbeddingsService for EmbeddingsServiceImpl {
    async fn embed(
        &self,
        request: EmbedContentRequest,
    ) -> Result<BackendEmbeddingResponse, AdapterError> {
        let endpoint = endpoints::embed_content(&self.config.backend_model);
        self.post(&endpoint, &request).await
    }

    async fn batch_embed(
        &self,
        request: BatchEmbedContentsRequest,
    ) -> Result<BackendEmbeddingResponse, AdapterError> {
        let endpoint = endpoints::batch_embed_contents(&self.config.backend_model);
        self.post(&endpoint, &request).await
    }
}
