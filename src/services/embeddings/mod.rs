//! Embeddings service for the Gemini API.

mod service;

use async_trait::async_trait;

use crate::error::AdapterError;
use crate::types::{
    BackendEmbeddingRequest, BackendEmbeddingResponse, BatchEmbedContentsRequest,
    EmbedContentRequest,
};

pub use service::EmbeddingsServiceImpl;

/// Service for generating embeddings on the backend.
#[async_trait]
pub trait EmbeddingsService: Send + Sync {
    /// Embed a single content via `:embedContent`.
    async fn embed(
        &self,
        request: EmbedContentRequest,
    ) -> Result<BackendEmbeddingResponse, AdapterError>;

    /// Embed several contents via `:batchEmbedContents`.
    async fn batch_embed(
        &self,
        request: BatchEmbedContentsRequest,
    ) -> Result<BackendEmbeddingResponse, AdapterError>;

    /// Send a request of either shape to its matching endpoint.
    async fn dispatch(
        &self,
        request: BackendEmbeddingRequest,
    ) -> Result<BackendEmbeddingResponse, AdapterError> {
        match request {
            BackendEmbeddingRequest::Single(single) => self.embed(single).await,
            BackendEmbeddingRequest::Batch(batch) => self.batch_embed(batch).await,
        }
    }
}
