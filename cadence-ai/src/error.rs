//! API error types for cadence-ai

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// API error type
///
/// Serializes to the product's `{error, message}` envelope.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Invalid request (400) - missing or empty required field
    #[error("{0}")]
    BadRequest(String),

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request window exhausted (429)
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),

    /// cadence-common error (database, config, io)
    #[error(transparent)]
    Common(#[from] cadence_common::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone(), msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "Not found".to_string(), msg),
            ApiError::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                "Too many requests".to_string(),
                "Rate limit exceeded: 100 requests per 15 minutes".to_string(),
            ),
            ApiError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
                msg,
            ),
            ApiError::Common(err) => match err {
                cadence_common::Error::InvalidInput(msg) => {
                    (StatusCode::BAD_REQUEST, msg.clone(), msg)
                }
                cadence_common::Error::NotFound(msg) => {
                    (StatusCode::NOT_FOUND, "Not found".to_string(), msg)
                }
                other => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    other.to_string(),
                ),
            },
        };

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), %message, "Request failed");
        }

        let body = Json(json!({
            "error": error,
            "message": message,
        }));

        (status, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_maps_to_400() {
        let response = ApiError::BadRequest("Transcript is required".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn database_error_maps_to_500() {
        let err = ApiError::Common(cadence_common::Error::Internal("boom".to_string()));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
