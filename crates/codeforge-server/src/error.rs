use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use codeforge_core::CodeforgeError;
use codeforge_model::ModelError;
use serde_json::json;
use tracing::error;

use crate::share_store::StoreError;

/// Error returned by route handlers, rendered as `{"error": "..."}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<CodeforgeError> for ApiError {
    fn from(e: CodeforgeError) -> Self {
        let message = match e {
            // Validation messages are written for end users as they are.
            CodeforgeError::InvalidInput(msg) => msg,
            other => other.to_string(),
        };
        Self::bad_request(message)
    }
}

impl From<ModelError> for ApiError {
    fn from(e: ModelError) -> Self {
        error!("model call failed: {e}");
        let status = match e {
            ModelError::RateLimited(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, format!("An error occurred: {e}"))
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, "File not found"),
            StoreError::Expired(_) => Self::new(StatusCode::GONE, "File has expired"),
            StoreError::Internal(msg) => {
                error!("snippet store error: {msg}");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "An unexpected error occurred")
            }
        }
    }
}
