//! Health check handler.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::state::AppState;

/// Readiness snapshot returned by `GET /health`.
#[derive(Debug, Serialize)]
pub struct Health {
    /// Always `"OK"` while the process is serving.
    pub app: &'static str,
    /// Whether the document-store connection is established.
    pub mongo: bool,
}

/// Report process and store status.
///
/// Answers 200 regardless of connectivity; the body carries the store
/// state.
pub async fn health(State(state): State<AppState>) -> Json<Health> {
    Json(Health {
        app: "OK",
        mongo: state.readiness().is_ready(),
    })
}
