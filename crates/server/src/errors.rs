use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// JSON API error: a status code plus the exact response body the client
/// sees. Handlers build these per endpoint so internal failure detail
/// never leaks into a response.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: serde_json::Value,
}

impl ApiError {
    pub fn new(status: StatusCode, body: serde_json::Value) -> Self {
        Self { status, body }
    }

    /// Shorthand for the common `{"error": msg}` shape.
    pub fn message(status: StatusCode, msg: &str) -> Self {
        Self::new(status, serde_json::json!({ "error": msg }))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
