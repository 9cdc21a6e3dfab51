//! Gemini embedding request and response types.

use serde::{Deserialize, Serialize};

/// A text part of a content message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Part {
    /// The text content.
    pub text: String,
}

/// Content to embed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Content {
    /// The parts making up the content.
    pub parts: Vec<Part>,
}

impl Content {
    /// Content holding a single text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![Part { text: text.into() }],
        }
    }
}

/// Request to embed one piece of content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmbedContentRequest {
    /// Full model resource name, e.g. `models/text-embedding-004`.
    pub model: String,
    /// The content to embed.
    pub content: Content,
}

/// Request to embed several pieces of content in one call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BatchEmbedContentsRequest {
    /// One sub-request per input text, in input order.
    pub requests: Vec<EmbedContentRequest>,
}

/// Outbound request in either shape.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum BackendEmbeddingRequest {
    /// Sent to `:embedContent`.
    Single(EmbedContentRequest),
    /// Sent to `:batchEmbedContents`.
    Batch(BatchEmbedContentsRequest),
}

/// An embedding vector.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackendEmbedding {
    /// The embedding values.
    pub values: Vec<f64>,
}

/// Backend response in either shape.
///
/// `embedContent` fills `embedding`, `batchEmbedContents` fills `embeddings`.
/// Which one is required depends on the request mode, so both are optional here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BackendEmbeddingResponse {
    /// Single-mode result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding: Option<BackendEmbedding>,
    /// Batch-mode results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embeddings: Option<Vec<BackendEmbedding>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_single_request_wire_shape() {
        let request = BackendEmbeddingRequest::Single(EmbedContentRequest {
            model: "models/text-embedding-004".to_string(),
            content: Content::text("hello"),
        });

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "model": "models/text-embedding-004",
                "content": { "parts": [{ "text": "hello" }] }
            })
        );
    }

    #[test]
    fn test_batch_request_wire_shape() {
        let request = BackendEmbeddingRequest::Batch(BatchEmbedContentsRequest {
            requests: vec![EmbedContentRequest {
                model: "models/text-embedding-004".to_string(),
                content: Content::text("a"),
            }],
        });

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "requests": [{
                    "model": "models/text-embedding-004",
                    "content": { "parts": [{ "text": "a" }] }
                }]
            })
        );
    }

    #[test]
    fn test_response_parses_either_shape() {
        let single: BackendEmbeddingResponse =
            serde_json::from_str(r#"{"embedding": {"values": [0.1, 0.2]}}"#).unwrap();
        assert_eq!(single.embedding.unwrap().values, vec![0.1, 0.2]);
        assert!(single.embeddings.is_none());

        let batch: BackendEmbeddingResponse =
            serde_json::from_str(r#"{"embeddings": [{"values": [1]}, {"values": [2]}]}"#).unwrap();
        assert_eq!(batch.embeddings.unwrap().len(), 2);

        let empty: BackendEmbeddingResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, BackendEmbeddingResponse::default());
    }
}
