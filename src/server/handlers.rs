//! Request handlers.

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use tracing::Instrument;

use super::state::AppState;
use crate::auth::{extract_bearer, ApiKeyAuthManager};
use crate::convert::{to_openai_response, EmbeddingPayload};
use crate::error::{AdapterError, AdapterResult};
use crate::observability::request_span;
use crate::services::{EmbeddingsService, EmbeddingsServiceImpl};
use crate::types::{InboundEmbeddingRequest, OutboundEmbeddingResponse};

/// Body returned for GET probes.
pub const INFO_MESSAGE: &str = "This worker processes embedding requests.";

/// Entry point for every inbound call.
///
/// GET answers with a static description, POST runs the embeddings flow, and
/// any other method is rejected. Failures all become a 500 with `{"error": ..}`.
pub async fn handle_request(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let span = request_span(method.as_str(), uri.path());

    async move {
        if method == Method::GET {
            return Json(json!({ "message": INFO_MESSAGE })).into_response();
        }
        if method != Method::POST {
            return AdapterError::InvalidMethod.into_response();
        }

        tracing::info!(uri = %uri, "Received request");

        match create_embeddings(&state, &headers, &body).await {
            Ok(response) => Json(response).into_response(),
            Err(err) => err.into_response(),
        }
    }
    .instrument(span)
    .await
}

/// Run one embeddings request end to end.
pub async fn create_embeddings(
    state: &AppState,
    headers: &HeaderMap,
    body: &[u8],
) -> AdapterResult<OutboundEmbeddingResponse> {
    let credential = extract_bearer(headers)?;

    let request: InboundEmbeddingRequest =
        serde_json::from_slice(body).map_err(|e| AdapterError::MalformedRequest {
            message: format!("Invalid JSON body: {}", e),
        })?;
    tracing::debug!(payload = ?request, "OpenAI payload");

    let payload = EmbeddingPayload::from_request(&request)?;
    let backend_request = payload.to_backend_request(&state.config.backend_model);

    let auth = Arc::new(ApiKeyAuthManager::new(credential, state.config.auth_method));
    let service =
        EmbeddingsServiceImpl::new(Arc::clone(&state.config), Arc::clone(&state.transport), auth);
    let backend_response = service.dispatch(backend_request).await?;

    let response = to_openai_response(
        backend_response,
        &request,
        &payload,
        &state.config.default_response_model,
    )?;
    tracing::debug!(
        embeddings = response.data.len(),
        prompt_tokens = response.usage.prompt_tokens,
        "OpenAI response"
    );

    Ok(response)
}
