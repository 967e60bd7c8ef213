//! Application error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::models::MessageResponse;

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level errors with HTTP status mapping.
///
/// Client input problems and duplicate usernames both answer 400, matching
/// the wire contract; bad credentials answer 400 with one fixed message so
/// an unknown username is indistinguishable from a wrong password.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(m) => (StatusCode::BAD_REQUEST, m.as_str()),
            AppError::Conflict(m) => (StatusCode::BAD_REQUEST, m.as_str()),
            AppError::InvalidCredentials => {
                (StatusCode::BAD_REQUEST, "Invalid username or password")
            }
            AppError::Unauthorized(m) => (StatusCode::UNAUTHORIZED, m.as_str()),
            AppError::NotFound(m) => (StatusCode::NOT_FOUND, m.as_str()),
            AppError::Internal(detail) => {
                error!(%detail, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };
        let body = Json(MessageResponse {
            message: message.to_string(),
        });
        (status, body).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => AppError::NotFound("row not found".into()),
            _ => AppError::Internal(e.to_string()),
        }
    }
}

impl From<postpal_core::auth::AuthError> for AppError {
    fn from(e: postpal_core::auth::AuthError) -> Self {
        match e {
            postpal_core::auth::AuthError::TokenExpired => {
                AppError::Unauthorized("Token has expired".into())
            }
            postpal_core::auth::AuthError::TokenInvalid => {
                AppError::Unauthorized("Invalid token".into())
            }
            postpal_core::auth::AuthError::Db(e) => AppError::from(e),
            postpal_core::auth::AuthError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<postpal_core::gallery::GalleryError> for AppError {
    fn from(e: postpal_core::gallery::GalleryError) -> Self {
        match e {
            postpal_core::gallery::GalleryError::InvalidDataUrl => {
                AppError::Validation("Invalid image data".into())
            }
            postpal_core::gallery::GalleryError::TooLarge => {
                AppError::Validation("Image size exceeds 5MB limit".into())
            }
            postpal_core::gallery::GalleryError::Db(e) => AppError::from(e),
        }
    }
}
