//! HTTP response mapping for adapter errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use super::types::AdapterError;

impl IntoResponse for AdapterError {
    fn into_response(self) -> Response {
        tracing::error!(kind = self.kind(), error = %self, "Error in request handling");

        let body = Json(json!({ "error": self.to_string() }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
