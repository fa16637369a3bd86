use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid input: {0}")]
    Validation(String),
    #[error("Base prompt not found: {0}")]
    NotFound(String),
    #[error("Runware API error {status}: {body}")]
    Remote { status: u16, body: String },
    #[error("Unexpected response format: {0}")]
    Format(String),
    #[error("{0}")]
    Generation(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Remote { .. } | ApiError::Format(_) => StatusCode::BAD_GATEWAY,
            ApiError::Generation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(ErrorResponse { error: self.to_string() })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_per_variant() {
        assert_eq!(
            ApiError::Validation("bad".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("abc".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Remote { status: 500, body: "boom".to_string() }.status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApiError::Format("{}".to_string()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApiError::Generation("failed".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn remote_error_message_carries_status_and_body() {
        let err = ApiError::Remote { status: 503, body: "overloaded".to_string() };
        let message = err.to_string();
        assert!(message.contains("503"));
        assert!(message.contains("overloaded"));
    }
}
