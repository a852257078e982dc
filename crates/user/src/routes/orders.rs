//! Order-history handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::Value;

use super::ensure_ready;
use crate::error::{AppError, Result};
use crate::models::OrderHistory;
use crate::state::AppState;

/// `POST /order/{id}` - append an opaque order payload to a user's
/// history.
///
/// Find-then-write with no concurrency control: two simultaneous appends
/// for the same user read the same snapshot and the last write wins. The
/// store's own guarantees are the only ones on offer here.
pub async fn append(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(order): Json<Value>,
) -> Result<&'static str> {
    ensure_ready(&state)?;

    if state.store().find_user(&id).await?.is_none() {
        return Err(AppError::NotFound("name not found"));
    }

    match state.store().find_history(&id).await? {
        Some(mut record) => {
            record.history.push(order);
            state.store().set_history(&id, &record.history).await?;
        }
        None => {
            let record = OrderHistory {
                name: id.clone(),
                history: vec![order],
            };
            state.store().insert_history(&record).await?;
        }
    }

    tracing::info!(name = %id, "order recorded");
    Ok("OK")
}

/// `GET /history/{id}` - the full history document for a user.
pub async fn history(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<OrderHistory>> {
    ensure_ready(&state)?;
    state
        .store()
        .find_history(&id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound("history not found"))
}
