//! HTTP route handlers for the catalogue service.
//!
//! # Route Structure
//!
//! ```text
//! GET /health          - Readiness snapshot {app, mongo}
//! GET /products        - All products
//! GET /product/{sku}   - Product by SKU
//! GET /products/{cat}  - Products in a category, sorted by name
//! GET /categories      - Distinct category values
//! GET /search/{text}   - Full-text search over name/description
//! ```
//!
//! Every data endpoint checks the readiness flag before touching the
//! store; `/health` answers regardless of connectivity.

pub mod health;
pub mod products;

use axum::{Router, middleware as axum_middleware, routing::get};
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::middleware::cross_origin_headers;
use crate::state::AppState;

/// Create the catalogue service router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/products", get(products::list))
        .route("/product/{sku}", get(products::by_sku))
        .route("/products/{cat}", get(products::by_category))
        .route("/categories", get(products::categories))
        .route("/search/{text}", get(products::search))
        .layer(axum_middleware::from_fn(cross_origin_headers))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Refuse with `database not available` while the store is disconnected.
pub(crate) fn ensure_ready(state: &AppState) -> Result<(), AppError> {
    if state.readiness().is_ready() {
        Ok(())
    } else {
        Err(AppError::Unavailable)
    }
}
