//! Wire shapes for both sides of the adapter.
//!
//! - `openai` - the `/embeddings` request and response callers speak
//! - `gemini` - the `embedContent` / `batchEmbedContents` shapes sent upstream

pub mod gemini;
pub mod openai;

pub use gemini::{
    BackendEmbedding, BackendEmbeddingRequest, BackendEmbeddingResponse,
    BatchEmbedContentsRequest, Content, EmbedContentRequest, Part,
};
pub use openai::{
    EmbeddingData, EmbeddingInput, EmbeddingUsage, InboundEmbeddingRequest,
    OutboundEmbeddingResponse,
};
