//! Unified error handling for the user service.
//!
//! All route handlers return `Result<T, AppError>`; the `IntoResponse`
//! impl maps each failure to its status and plain-text body at the handler
//! boundary. Of note: unknown-name and wrong-password login failures are
//! both 404s, deliberately indistinguishable to the caller.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::db::{CounterError, StoreError};

/// Application-level error type for the user service.
#[derive(Debug, Error)]
pub enum AppError {
    /// The document-store connection is not yet established.
    #[error("database not available")]
    Unavailable,

    /// Required request fields are missing, or the name is taken.
    #[error("{0}")]
    BadRequest(&'static str),

    /// A well-formed lookup had no result (or the password was wrong).
    #[error("{0}")]
    NotFound(&'static str),

    /// A document-store operation failed; the raw driver error is
    /// surfaced.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A counter operation failed; the raw error is surfaced.
    #[error(transparent)]
    Counter(#[from] CounterError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::Unavailable | Self::Store(_) | Self::Counter(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        (status, self.to_string()).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
