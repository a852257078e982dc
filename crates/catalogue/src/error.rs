//! Unified error handling for the catalogue service.
//!
//! All route handlers return `Result<T, AppError>`; the `IntoResponse`
//! impl maps each failure to its status and plain-text body at the handler
//! boundary. There are no retries and no partial-failure semantics.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::db::StoreError;

/// Application-level error type for the catalogue service.
#[derive(Debug, Error)]
pub enum AppError {
    /// The store connection is not yet established.
    #[error("database not available")]
    Unavailable,

    /// A well-formed singular lookup had no result.
    #[error("{0}")]
    NotFound(&'static str),

    /// A store operation failed; the raw driver error is surfaced.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::Unavailable | Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
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
