//! OpenAI request → Gemini request.

use super::payload::EmbeddingPayload;
use crate::error::AdapterResult;
use crate::types::{BackendEmbeddingRequest, InboundEmbeddingRequest};

/// Convert an inbound request into the backend shape for `model`.
///
/// Fails with `MalformedRequest` when `input` is missing or empty.
pub fn to_backend_request(
    request: &InboundEmbeddingRequest,
    model: &str,
) -> AdapterResult<BackendEmbeddingRequest> {
    Ok(EmbeddingPayload::from_request(request)?.to_backend_request(model))
}
