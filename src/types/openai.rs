//! OpenAI-style embeddings request and response types.

use serde::{Deserialize, Serialize};

/// Embedding input (single string or list of strings).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum EmbeddingInput {
    /// A lone string.
    Single(String),
    /// An ordered list of strings.
    Batch(Vec<String>),
}

impl EmbeddingInput {
    /// Borrow every text in order; a lone string yields one item.
    pub fn texts(&self) -> Vec<&str> {
        match self {
            EmbeddingInput::Single(text) => vec![text.as_str()],
            EmbeddingInput::Batch(texts) => texts.iter().map(String::as_str).collect(),
        }
    }
}

/// Inbound `/embeddings` request body.
///
/// Both fields are optional at the parse level so a missing `input` surfaces
/// as a `MalformedRequest` rather than a serde error. Unknown fields such as
/// `encoding_format` or `user` are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct InboundEmbeddingRequest {
    /// Model name the caller asked for; echoed back in the response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Text(s) to embed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<EmbeddingInput>,
}

/// One embedding entry in the response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbeddingData {
    /// Always `"embedding"`.
    pub object: String,
    /// The vector, relayed verbatim from the backend.
    pub embedding: Vec<f64>,
    /// Position of the matching input.
    pub index: usize,
}

/// Token usage block.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmbeddingUsage {
    /// Estimated prompt tokens.
    pub prompt_tokens: u32,
    /// Same as `prompt_tokens`; embeddings have no completion.
    pub total_tokens: u32,
}

/// Outbound `/embeddings` response body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutboundEmbeddingResponse {
    /// Always `"list"`.
    pub object: String,
    /// One entry per input, in input order.
    pub data: Vec<EmbeddingData>,
    /// Model name reported to the caller.
    pub model: String,
    /// Locally estimated usage.
    pub usage: EmbeddingUsage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_input() {
        let req: InboundEmbeddingRequest =
            serde_json::from_str(r#"{"model": "m", "input": "hello"}"#).unwrap();
        assert_eq!(req.model.as_deref(), Some("m"));
        assert_eq!(req.input, Some(EmbeddingInput::Single("hello".to_string())));
    }

    #[test]
    fn test_parse_batch_input_ignores_unknown_fields() {
        let req: InboundEmbeddingRequest = serde_json::from_str(
            r#"{"input": ["a", "b"], "encoding_format": "float", "user": "u1"}"#,
        )
        .unwrap();
        assert!(req.model.is_none());
        assert_eq!(
            req.input,
            Some(EmbeddingInput::Batch(vec!["a".to_string(), "b".to_string()]))
        );
    }

    #[test]
    fn test_parse_missing_input() {
        let req: InboundEmbeddingRequest = serde_json::from_str(r#"{"model": "m"}"#).unwrap();
        assert!(req.input.is_none());

        let req: InboundEmbeddingRequest = serde_json::from_str(r#"{"input": null}"#).unwrap();
        assert!(req.input.is_none());
    }

    #[test]
    fn test_token_arrays_are_rejected() {
        let result = serde_json::from_str::<InboundEmbeddingRequest>(r#"{"input": [1, 2, 3]}"#);
        assert!(result.is_err());
    }
}
