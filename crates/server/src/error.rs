//! Error → HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use nlq_core::AppError;
use serde_json::json;

/// An [`AppError`] on its way out as `{"error": "<message>"}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// Used by the health check when the store is unreachable.
    pub fn unavailable(error: AppError) -> Self {
        Self {
            status: StatusCode::SERVICE_UNAVAILABLE,
            message: error.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<AppError> for ApiError {
    fn from(error: AppError) -> Self {
        let status = if error.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        Self {
            status,
            message: error.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, "Request failed: {}", self.message);
        } else {
            tracing::warn!(status = %self.status, "Request rejected: {}", self.message);
        }
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AppError::InvalidRequest("missing".into()), StatusCode::BAD_REQUEST),
            (AppError::InvalidQuery("empty".into()), StatusCode::BAD_REQUEST),
            (AppError::Translation("Invalid JSON".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (AppError::Llm("quota".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (AppError::Store("down".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (error, status) in cases {
            assert_eq!(ApiError::from(error).status(), status);
        }
    }

    #[test]
    fn test_message_is_error_display() {
        let error = ApiError::from(AppError::Llm("quota exceeded".into()));
        assert_eq!(error.message(), "LLM error: quota exceeded");
    }
}
