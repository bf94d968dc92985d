//! API error types and response formatting.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bookstall_core::StoreError;
use serde::Serialize;

/// API error type that converts to appropriate HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Authentication failed (missing/invalid token, or bad credentials).
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Invalid request parameters.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Resource already exists.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Token encoding failed.
    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        let msg = err.to_string();
        match err {
            StoreError::MissingField(_) => Self::BadRequest(msg),
            StoreError::BookNotFound(_)
            | StoreError::ReviewNotFound { .. }
            | StoreError::NoBooksFound { .. }
            | StoreError::UserNotFound(_) => Self::NotFound(msg),
            StoreError::UsernameTaken(_) => Self::Conflict(msg),
            StoreError::InvalidCredentials | StoreError::Unauthenticated => {
                Self::Unauthorized(msg)
            }
        }
    }
}

/// JSON error response body.
#[derive(Debug, Clone, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match &self {
            Self::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "unauthorized", Some(msg.clone())),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", Some(msg.clone())),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", Some(msg.clone())),
            Self::Conflict(msg) => (StatusCode::CONFLICT, "conflict", Some(msg.clone())),
            Self::Token(err) => {
                tracing::error!(error = %err, "token encoding error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    Some("An internal error occurred".to_string()),
                )
            }
            Self::Internal(err) => {
                tracing::error!(error = %err, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    Some("An internal error occurred".to_string()),
                )
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}
