//! Application state shared across handlers.

use std::sync::Arc;

use clockwork_core::readiness::Readiness;

use crate::db::{Counter, UserStore};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Both stores and the readiness flag are
/// injected so tests can supply in-memory implementations.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: Arc<dyn UserStore>,
    counter: Arc<dyn Counter>,
    readiness: Readiness,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(store: Arc<dyn UserStore>, counter: Arc<dyn Counter>, readiness: Readiness) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                store,
                counter,
                readiness,
            }),
        }
    }

    /// Get a reference to the account/order store.
    #[must_use]
    pub fn store(&self) -> &dyn UserStore {
        self.inner.store.as_ref()
    }

    /// Get a reference to the anonymous-visitor counter.
    #[must_use]
    pub fn counter(&self) -> &dyn Counter {
        self.inner.counter.as_ref()
    }

    /// Get the document-store connectivity flag.
    #[must_use]
    pub fn readiness(&self) -> &Readiness {
        &self.inner.readiness
    }
}
