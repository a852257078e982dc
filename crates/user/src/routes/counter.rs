//! Anonymous-visitor id handler.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::error::Result;
use crate::state::AppState;

/// Response body of `GET /uniqueid`.
#[derive(Debug, Serialize)]
pub struct UniqueId {
    /// The field name is historical wire contract; the value is a
    /// prefixed counter, not a UUID.
    pub uuid: String,
}

/// `GET /uniqueid` - mint an anonymous visitor id.
///
/// Backed by the key-value store's atomic increment, so concurrent callers
/// always receive distinct values. Not gated on the document-store flag;
/// a counter outage surfaces as a plain 500.
pub async fn unique_id(State(state): State<AppState>) -> Result<Json<UniqueId>> {
    let value = state.counter().increment().await?;
    Ok(Json(UniqueId {
        uuid: format!("anonymous-{value}"),
    }))
}
