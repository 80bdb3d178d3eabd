use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// `IndexOutOfRange`, `UnknownLayout` and `UnknownSectionKey` are invariant
/// violations, not expected runtime conditions: a correct caller never
/// produces them. They abort the operation that detected them and leave the
/// last good document snapshot untouched.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Index {index} out of range for {list} (len {len})")]
    IndexOutOfRange {
        list: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Unknown layout: {0}")]
    UnknownLayout(String),

    #[error("Unknown section key: {0}")]
    UnknownSectionKey(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::IndexOutOfRange { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "INDEX_OUT_OF_RANGE",
                self.to_string(),
            ),
            AppError::UnknownLayout(id) => (
                StatusCode::BAD_REQUEST,
                "UNKNOWN_LAYOUT",
                format!("'{id}' is not a registered layout"),
            ),
            AppError::UnknownSectionKey(key) => (
                StatusCode::BAD_REQUEST,
                "UNKNOWN_SECTION_KEY",
                format!("'{key}' is not a registered section"),
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
