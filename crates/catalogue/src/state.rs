//! Application state shared across handlers.

use std::sync::Arc;

use clockwork_core::readiness::Readiness;

use crate::db::ProductStore;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The store client and the readiness flag are
/// the only shared state the service has; both are injected so tests can
/// supply an in-memory store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: Arc<dyn ProductStore>,
    readiness: Readiness,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(store: Arc<dyn ProductStore>, readiness: Readiness) -> Self {
        Self {
            inner: Arc::new(AppStateInner { store, readiness }),
        }
    }

    /// Get a reference to the product store.
    #[must_use]
    pub fn store(&self) -> &dyn ProductStore {
        self.inner.store.as_ref()
    }

    /// Get the store-connectivity flag.
    #[must_use]
    pub fn readiness(&self) -> &Readiness {
        &self.inner.readiness
    }
}
