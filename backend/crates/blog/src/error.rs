//! Blog Error Types
//!
//! Blog-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use auth::AuthError;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Blog-specific result type alias
pub type BlogResult<T> = Result<T, BlogError>;

/// Blog-specific error variants
#[derive(Debug, Error)]
pub enum BlogError {
    /// Request input failed validation
    #[error("{0}")]
    Validation(String),

    /// Post ID is malformed or unknown
    #[error("Blog not found")]
    PostNotFound,

    /// Requester is not the author
    #[error("{0}")]
    Forbidden(&'static str),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BlogError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            BlogError::Validation(_) => ErrorKind::BadRequest,
            BlogError::PostNotFound => ErrorKind::NotFound,
            BlogError::Forbidden(_) => ErrorKind::Forbidden,
            BlogError::Database(_) | BlogError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Machine-readable code sent as the `error` field
    pub fn code(&self) -> &'static str {
        match self {
            BlogError::Validation(_) => "VALIDATION_ERROR",
            BlogError::PostNotFound => "NOT_FOUND",
            BlogError::Forbidden(_) => "FORBIDDEN",
            BlogError::Database(_) | BlogError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to AppError. Server-side details are not exposed.
    pub fn to_app_error(&self) -> AppError {
        let message = match self {
            BlogError::Database(_) | BlogError::Internal(_) => "Server error".to_string(),
            other => other.to_string(),
        };
        AppError::new(self.kind(), message).with_code(self.code())
    }

    fn log(&self) {
        match self {
            BlogError::Database(e) => {
                tracing::error!(error = %e, "Blog database error");
            }
            BlogError::Internal(msg) => {
                tracing::error!(message = %msg, "Blog internal error");
            }
            BlogError::Forbidden(reason) => {
                tracing::warn!(reason, "Rejected non-author modification");
            }
            _ => {
                tracing::debug!(error = %self, "Blog error");
            }
        }
    }
}

impl IntoResponse for BlogError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AuthError> for BlogError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Database(e) => BlogError::Database(e),
            other => BlogError::Internal(other.to_string()),
        }
    }
}

impl From<JsonRejection> for BlogError {
    fn from(rejection: JsonRejection) -> Self {
        BlogError::Validation(rejection.body_text())
    }
}
