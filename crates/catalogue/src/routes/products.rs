//! Product query handlers.
//!
//! Each handler is one store round-trip with no caching: gate on
//! readiness, run the query, serialize the result.

use axum::{
    Json,
    extract::{Path, State},
};
use mongodb::bson::Document;

use super::ensure_ready;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// `GET /products` - every product document.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Document>>> {
    ensure_ready(&state)?;
    Ok(Json(state.store().all().await?))
}

/// `GET /product/{sku}` - exact-match lookup.
pub async fn by_sku(
    State(state): State<AppState>,
    Path(sku): Path<String>,
) -> Result<Json<Document>> {
    ensure_ready(&state)?;
    let product = state.store().by_sku(&sku).await?;
    tracing::info!(%sku, found = product.is_some(), "product lookup");
    product.map(Json).ok_or(AppError::NotFound("SKU not found"))
}

/// `GET /products/{cat}` - membership filter on `categories`, sorted by
/// name. Zero matches is an empty list, not an error.
pub async fn by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<Document>>> {
    ensure_ready(&state)?;
    Ok(Json(state.store().in_category(&category).await?))
}

/// `GET /categories` - distinct category values as a flat list.
pub async fn categories(State(state): State<AppState>) -> Result<Json<Vec<String>>> {
    ensure_ready(&state)?;
    Ok(Json(state.store().categories().await?))
}

/// `GET /search/{text}` - text-index search in store relevance order.
pub async fn search(
    State(state): State<AppState>,
    Path(text): Path<String>,
) -> Result<Json<Vec<Document>>> {
    ensure_ready(&state)?;
    Ok(Json(state.store().text_search(&text).await?))
}
