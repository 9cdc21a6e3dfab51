//! Backend service implementations.

pub mod embeddings;

pub use embeddings::{EmbeddingsService, EmbeddingsServiceImpl};
