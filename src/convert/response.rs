//! Gemini response → OpenAI response.

use super::payload::EmbeddingPayload;
use super::tokens::estimate_tokens;
use crate::error::{AdapterError, AdapterResult};
use crate::types::{
    BackendEmbeddingResponse, EmbeddingData, EmbeddingUsage, InboundEmbeddingRequest,
    OutboundEmbeddingResponse,
};

/// Build the OpenAI-shaped response for a successful backend call.
///
/// Batch mode reads `embeddings`, single mode reads `embedding`; the missing
/// field, or a batch whose length differs from the input, is a `BackendShape`
/// error. The reported model is the caller's, or `default_model` when absent.
pub fn to_openai_response(
    backend: BackendEmbeddingResponse,
    request: &InboundEmbeddingRequest,
    payload: &EmbeddingPayload,
    default_model: &str,
) -> AdapterResult<OutboundEmbeddingResponse> {
    let embeddings = match payload {
        EmbeddingPayload::Batch(_) => backend.embeddings,
        EmbeddingPayload::Single(_) => backend.embedding.map(|embedding| vec![embedding]),
    }
    .ok_or_else(AdapterError::no_embeddings)?;

    if embeddings.len() != payload.len() {
        return Err(AdapterError::BackendShape {
            message: format!(
                "Gemini returned {} embeddings for {} inputs",
                embeddings.len(),
                payload.len()
            ),
        });
    }

    let data = embeddings
        .into_iter()
        .enumerate()
        .map(|(index, embedding)| EmbeddingData {
            object: "embedding".to_string(),
            embedding: embedding.values,
            index,
        })
        .collect();

    let model = request
        .model
        .as_deref()
        .filter(|model| !model.is_empty())
        .unwrap_or(default_model)
        .to_string();

    let tokens = estimate_tokens(request.input.as_ref());

    Ok(OutboundEmbeddingResponse {
        object: "list".to_string(),
        data,
        model,
        usage: EmbeddingUsage {
            prompt_tokens: tokens,
            total_tokens: tokens,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BackendEmbedding, EmbeddingInput};
    use pretty_assertions::assert_eq;

    const DEFAULT_MODEL: &str = "text-embedding-ada-002";

    fn embedding(values: &[f64]) -> BackendEmbedding {
        BackendEmbedding { values: values.to_vec() }
    }

    fn batch_request(texts: &[&str]) -> (InboundEmbeddingRequest, EmbeddingPayload) {
        let request = InboundEmbeddingRequest {
            model: None,
            input: Some(EmbeddingInput::Batch(texts.iter().map(|t| (*t).to_string()).collect())),
        };
        let payload = EmbeddingPayload::from_request(&request).unwrap();
        (request, payload)
    }

    #[test]
    fn test_single_response() {
        let request = InboundEmbeddingRequest {
            model: None,
            input: Some(EmbeddingInput::Single("hello world".to_string())),
        };
        let payload = EmbeddingPayload::from_request(&request).unwrap();
        let backend = BackendEmbeddingResponse {
            embedding: Some(embedding(&[0.1, 0.2])),
            embeddings: None,
        };

        let response = to_openai_response(backend, &request, &payload, DEFAULT_MODEL).unwrap();

        assert_eq!(
            response,
            OutboundEmbeddingResponse {
                object: "list".to_string(),
                data: vec![EmbeddingData {
                    object: "embedding".to_string(),
                    embedding: vec![0.1, 0.2],
                    index: 0,
                }],
                model: "text-embedding-ada-002".to_string(),
                usage: EmbeddingUsage { prompt_tokens: 2, total_tokens: 2 },
            }
        );
    }

    #[test]
    fn test_batch_indices_follow_input_order() {
        let (request, payload) = batch_request(&["a", "b c", "d"]);
        let backend = BackendEmbeddingResponse {
            embedding: None,
            embeddings: Some(vec![embedding(&[1.0]), embedding(&[2.0]), embedding(&[3.0])]),
        };

        let response = to_openai_response(backend, &request, &payload, DEFAULT_MODEL).unwrap();

        assert_eq!(response.data.len(), 3);
        for (i, item) in response.data.iter().enumerate() {
            assert_eq!(item.index, i);
            assert_eq!(item.embedding, vec![(i + 1) as f64]);
        }
        assert_eq!(response.usage.prompt_tokens, 4);
        assert_eq!(response.usage.total_tokens, 4);
    }

    #[test]
    fn test_caller_model_is_echoed() {
        let request = InboundEmbeddingRequest {
            model: Some("text-embedding-3-large".to_string()),
            input: Some(EmbeddingInput::Single("x".to_string())),
        };
        let payload = EmbeddingPayload::from_request(&request).unwrap();
        let backend = BackendEmbeddingResponse {
            embedding: Some(embedding(&[0.5])),
            embeddings: None,
        };

        let response = to_openai_response(backend, &request, &payload, DEFAULT_MODEL).unwrap();
        assert_eq!(response.model, "text-embedding-3-large");
    }

    #[test]
    fn test_empty_model_falls_back_to_default() {
        let request = InboundEmbeddingRequest {
            model: Some(String::new()),
            input: Some(EmbeddingInput::Single("x".to_string())),
        };
        let payload = EmbeddingPayload::from_request(&request).unwrap();
        let backend = BackendEmbeddingResponse {
            embedding: Some(embedding(&[0.5])),
            embeddings: None,
        };

        let response = to_openai_response(backend, &request, &payload, DEFAULT_MODEL).unwrap();
        assert_eq!(response.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_missing_embeddings_is_shape_error() {
        let (request, payload) = batch_request(&["a"]);
        let err = to_openai_response(
            BackendEmbeddingResponse::default(),
            &request,
            &payload,
            DEFAULT_MODEL,
        )
        .unwrap_err();
        assert!(matches!(err, AdapterError::BackendShape { .. }));

        let request = InboundEmbeddingRequest {
            model: None,
            input: Some(EmbeddingInput::Single("a".to_string())),
        };
        let payload = EmbeddingPayload::from_request(&request).unwrap();
        let err = to_openai_response(
            BackendEmbeddingResponse::default(),
            &request,
            &payload,
            DEFAULT_MODEL,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "No embeddings found in Gemini response");
    }

    #[test]
    fn test_field_for_wrong_mode_is_shape_error() {
        // Batch mode must not fall back to the single-mode field.
        let (request, payload) = batch_request(&["a"]);
        let backend = BackendEmbeddingResponse {
            embedding: Some(embedding(&[1.0])),
            embeddings: None,
        };

        let err = to_openai_response(backend, &request, &payload, DEFAULT_MODEL).unwrap_err();
        assert!(matches!(err, AdapterError::BackendShape { .. }));
    }

    #[test]
    fn test_length_mismatch_is_shape_error() {
        let (request, payload) = batch_request(&["a", "b"]);
        let backend = BackendEmbeddingResponse {
            embedding: None,
            embeddings: Some(vec![embedding(&[1.0])]),
        };

        let err = to_openai_response(backend, &request, &payload, DEFAULT_MODEL).unwrap_err();
        assert_eq!(err.to_string(), "Gemini returned 1 embeddings for 2 inputs");
    }
}
