//! Single/batch tagged payload.

use crate::error::{AdapterError, AdapterResult};
use crate::types::{
    BackendEmbeddingRequest, BatchEmbedContentsRequest, Content, EmbedContentRequest,
    EmbeddingInput, InboundEmbeddingRequest,
};

/// Texts to embed, tagged by dispatch mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmbeddingPayload {
    /// `input` was a lone string.
    Single(String),
    /// `input` was a list of strings.
    Batch(Vec<String>),
}

impl EmbeddingPayload {
    /// Decide the mode from the inbound request.
    ///
    /// A missing `input`, an empty string, or an empty list is a
    /// `MalformedRequest`.
    pub fn from_request(request: &InboundEmbeddingRequest) -> AdapterResult<Self> {
        match &request.input {
            Some(EmbeddingInput::Single(text)) if !text.is_empty() => {
                Ok(EmbeddingPayload::Single(text.clone()))
            }
            Some(EmbeddingInput::Batch(texts)) if !texts.is_empty() => {
                Ok(EmbeddingPayload::Batch(texts.clone()))
            }
            _ => Err(AdapterError::missing_input()),
        }
    }

    /// True for list input.
    pub fn is_batch(&self) -> bool {
        matches!(self, EmbeddingPayload::Batch(_))
    }

    /// Number of embeddings the response must carry.
    pub fn len(&self) -> usize {
        match self {
            EmbeddingPayload::Single(_) => 1,
            EmbeddingPayload::Batch(texts) => texts.len(),
        }
    }

    /// Never true for a payload built by `from_request`.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Build the backend request for `model`.
    pub fn to_backend_request(&self, model: &str) -> BackendEmbeddingRequest {
        match self {
            EmbeddingPayload::Single(text) => BackendEmbeddingRequest::Single(EmbedContentRequest {
                model: model.to_string(),
                content: Content::text(text.as_str()),
            }),
            EmbeddingPayload::Batch(texts) => {
                BackendEmbeddingRequest::Batch(BatchEmbedContentsRequest {
                    requests: texts
                        .iter()
                        .map(|text| EmbedContentRequest {
                            model: model.to_string(),
                            content: Content::text(text.as_str()),
                        })
                        .collect(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(input: Option<EmbeddingInput>) -> InboundEmbeddingRequest {
        InboundEmbeddingRequest { model: None, input }
    }

    #[test]
    fn test_single_and_batch_modes() {
        let single =
            EmbeddingPayload::from_request(&request(Some(EmbeddingInput::Single("hi".into()))))
                .unwrap();
        assert!(!single.is_batch());
        assert_eq!(single.len(), 1);

        // A one-element list still dispatches as a batch.
        let batch = EmbeddingPayload::from_request(&request(Some(EmbeddingInput::Batch(vec![
            "hi".into(),
        ]))))
        .unwrap();
        assert!(batch.is_batch());
        assert_eq!(batch.len(), 1);
    }

    #[test]
    fn test_missing_or_empty_input_is_malformed() {
        let cases = vec![
            None,
            Some(EmbeddingInput::Single(String::new())),
            Some(EmbeddingInput::Batch(vec![])),
        ];

        for input in cases {
            let result = EmbeddingPayload::from_request(&request(input));
            assert!(matches!(result, Err(AdapterError::MalformedRequest { .. })));
        }
    }
}
