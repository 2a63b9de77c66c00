use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use service::errors::ServiceError;

/// Handler-level failure. The only expected source is the storage backend,
/// which surfaces as a 500 with a JSON error body.
#[derive(Debug)]
pub struct ApiError(pub String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let msg = self.0;
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        error!(error = %msg, "request failed");
        (status, Json(serde_json::json!({"error": msg}))).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self(err.to_string())
    }
}
