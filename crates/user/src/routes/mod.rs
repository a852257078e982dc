//! HTTP route handlers for the user service.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health        - Readiness snapshot {app, mongo}
//! GET  /uniqueid      - Anonymous visitor id from the atomic counter
//! GET  /check/{id}    - Account existence check
//! GET  /users         - Debug dump of all accounts
//! POST /login         - Plain-equality credential check
//! POST /register      - Best-effort-unique account creation
//! POST /order/{id}    - Append an opaque order payload to history
//! GET  /history/{id}  - Full order history for an account
//! ```
//!
//! Every document-store endpoint checks the readiness flag before touching
//! the store; `/health` and `/uniqueid` answer regardless of it.

pub mod counter;
pub mod health;
pub mod orders;
pub mod users;

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::middleware::cross_origin_headers;
use crate::state::AppState;

/// Create the user service router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/uniqueid", get(counter::unique_id))
        .route("/check/{id}", get(users::check))
        .route("/users", get(users::list))
        .route("/login", post(users::login))
        .route("/register", post(users::register))
        .route("/order/{id}", post(orders::append))
        .route("/history/{id}", get(orders::history))
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

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::Json;
    use axum::extract::{Path, State};
    use axum::response::IntoResponse;
    use serde_json::{Value, json};

    use clockwork_core::readiness::Readiness;

    use super::*;
    use crate::db::{Counter, CounterError, StoreError, UserStore};
    use crate::models::{LoginRequest, OrderHistory, RegisterRequest, User};

    /// In-memory account and order store.
    ///
    /// Deliberately allows duplicate names, like the real store: the
    /// service's check-then-insert is the only uniqueness enforcement.
    #[derive(Default)]
    struct FakeStore {
        users: Mutex<Vec<User>>,
        orders: Mutex<Vec<OrderHistory>>,
    }

    #[async_trait]
    impl UserStore for FakeStore {
        async fn find_user(&self, name: &str) -> Result<Option<User>, StoreError> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.name == name)
                .cloned())
        }

        async fn all_users(&self) -> Result<Vec<User>, StoreError> {
            Ok(self.users.lock().unwrap().clone())
        }

        async fn insert_user(&self, user: &User) -> Result<(), StoreError> {
            self.users.lock().unwrap().push(user.clone());
            Ok(())
        }

        async fn find_history(&self, name: &str) -> Result<Option<OrderHistory>, StoreError> {
            Ok(self
                .orders
                .lock()
                .unwrap()
                .iter()
                .find(|h| h.name == name)
                .cloned())
        }

        async fn set_history(&self, name: &str, history: &[Value]) -> Result<(), StoreError> {
            if let Some(record) = self
                .orders
                .lock()
                .unwrap()
                .iter_mut()
                .find(|h| h.name == name)
            {
                record.history = history.to_vec();
            }
            Ok(())
        }

        async fn insert_history(&self, record: &OrderHistory) -> Result<(), StoreError> {
            self.orders.lock().unwrap().push(record.clone());
            Ok(())
        }
    }

    /// In-memory counter with the same atomicity as the real one.
    #[derive(Default)]
    struct FakeCounter {
        value: AtomicI64,
    }

    #[async_trait]
    impl Counter for FakeCounter {
        async fn increment(&self) -> Result<i64, CounterError> {
            Ok(self.value.fetch_add(1, Ordering::SeqCst) + 1)
        }
    }

    fn connected_state() -> AppState {
        let (readiness, writer) = Readiness::new();
        writer.mark_connected();
        AppState::new(
            Arc::new(FakeStore::default()),
            Arc::new(FakeCounter::default()),
            readiness,
        )
    }

    fn disconnected_state() -> AppState {
        let (readiness, _writer) = Readiness::new();
        AppState::new(
            Arc::new(FakeStore::default()),
            Arc::new(FakeCounter::default()),
            readiness,
        )
    }

    fn register_body(name: &str) -> RegisterRequest {
        RegisterRequest {
            name: name.to_string(),
            password: "ticktock".to_string(),
            email: format!("{name}@example.com"),
        }
    }

    async fn register_ok(state: &AppState, name: &str) {
        let ok = users::register(State(state.clone()), Json(register_body(name)))
            .await
            .unwrap();
        assert_eq!(ok, "OK");
    }

    #[tokio::test]
    async fn register_then_login_roundtrip() {
        let state = connected_state();
        register_ok(&state, "kettle").await;

        let Json(user) = users::login(
            State(state),
            Json(LoginRequest {
                name: "kettle".to_string(),
                password: "ticktock".to_string(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(user.name, "kettle");
        assert_eq!(user.email, "kettle@example.com");
        // The stored plaintext password comes back with the document.
        assert_eq!(user.password, "ticktock");
    }

    #[tokio::test]
    async fn duplicate_registration_is_rejected() {
        let state = connected_state();
        register_ok(&state, "kettle").await;

        let result = users::register(State(state), Json(register_body("kettle"))).await;

        assert!(matches!(
            result,
            Err(AppError::BadRequest("name already exists"))
        ));
    }

    #[tokio::test]
    async fn registration_requires_every_field() {
        let state = connected_state();
        let mut body = register_body("kettle");
        body.email = String::new();

        let result = users::register(State(state), Json(body)).await;

        assert!(matches!(
            result,
            Err(AppError::BadRequest("insufficient data"))
        ));
    }

    #[tokio::test]
    async fn login_requires_name_and_password() {
        let state = connected_state();

        let result = users::login(
            State(state),
            Json(LoginRequest {
                name: "kettle".to_string(),
                password: String::new(),
            }),
        )
        .await;

        assert!(matches!(
            result,
            Err(AppError::BadRequest("name or password not supplied"))
        ));
    }

    #[tokio::test]
    async fn failed_logins_are_indistinguishable_by_status() {
        let state = connected_state();
        register_ok(&state, "kettle").await;

        let wrong_password = users::login(
            State(state.clone()),
            Json(LoginRequest {
                name: "kettle".to_string(),
                password: "wrong".to_string(),
            }),
        )
        .await
        .unwrap_err();

        let unknown_name = users::login(
            State(state),
            Json(LoginRequest {
                name: "nobody".to_string(),
                password: "ticktock".to_string(),
            }),
        )
        .await
        .unwrap_err();

        assert_eq!(
            wrong_password.into_response().status(),
            unknown_name.into_response().status()
        );
    }

    #[tokio::test]
    async fn check_reports_existing_and_missing_accounts() {
        let state = connected_state();
        register_ok(&state, "kettle").await;

        let ok = users::check(State(state.clone()), Path("kettle".to_string()))
            .await
            .unwrap();
        assert_eq!(ok, "OK");

        let missing = users::check(State(state), Path("nobody".to_string())).await;
        assert!(matches!(missing, Err(AppError::NotFound("user not found"))));
    }

    #[tokio::test]
    async fn users_dump_lists_registered_accounts() {
        let state = connected_state();
        register_ok(&state, "kettle").await;
        register_ok(&state, "sprocket").await;

        let Json(all) = users::list(State(state)).await.unwrap();

        let names: Vec<&str> = all.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["kettle", "sprocket"]);
    }

    #[tokio::test]
    async fn first_order_creates_a_single_element_history() {
        let state = connected_state();
        register_ok(&state, "kettle").await;

        let ok = orders::append(
            State(state.clone()),
            Path("kettle".to_string()),
            Json(json!({"total": 12.5})),
        )
        .await
        .unwrap();
        assert_eq!(ok, "OK");

        let Json(record) = orders::history(State(state), Path("kettle".to_string()))
            .await
            .unwrap();
        assert_eq!(record.history, vec![json!({"total": 12.5})]);
    }

    #[tokio::test]
    async fn sequential_orders_append_in_submission_order() {
        let state = connected_state();
        register_ok(&state, "kettle").await;

        for total in [1, 2] {
            orders::append(
                State(state.clone()),
                Path("kettle".to_string()),
                Json(json!({"total": total})),
            )
            .await
            .unwrap();
        }

        let Json(record) = orders::history(State(state), Path("kettle".to_string()))
            .await
            .unwrap();
        assert_eq!(
            record.history,
            vec![json!({"total": 1}), json!({"total": 2})]
        );
    }

    #[tokio::test]
    async fn orders_for_unknown_users_are_rejected() {
        let state = connected_state();

        let result = orders::append(
            State(state),
            Path("nobody".to_string()),
            Json(json!({"total": 1})),
        )
        .await;

        assert!(matches!(result, Err(AppError::NotFound("name not found"))));
    }

    #[tokio::test]
    async fn missing_history_is_not_found() {
        let state = connected_state();
        register_ok(&state, "kettle").await;

        let result = orders::history(State(state), Path("kettle".to_string())).await;

        assert!(matches!(
            result,
            Err(AppError::NotFound("history not found"))
        ));
    }

    #[tokio::test]
    async fn unique_id_prefixes_the_counter_value() {
        let state = connected_state();

        let Json(first) = counter::unique_id(State(state.clone())).await.unwrap();
        let Json(second) = counter::unique_id(State(state)).await.unwrap();

        assert_eq!(first.uuid, "anonymous-1");
        assert_eq!(second.uuid, "anonymous-2");
    }

    #[tokio::test]
    async fn concurrent_unique_ids_are_distinct_and_gap_free() {
        const CALLERS: i64 = 32;
        let state = connected_state();

        let handles: Vec<_> = (0..CALLERS)
            .map(|_| {
                let state = state.clone();
                tokio::spawn(async move { counter::unique_id(State(state)).await })
            })
            .collect();

        let mut values = Vec::new();
        for handle in handles {
            let Json(id) = handle.await.unwrap().unwrap();
            let value: i64 = id
                .uuid
                .strip_prefix("anonymous-")
                .unwrap()
                .parse()
                .unwrap();
            values.push(value);
        }

        values.sort_unstable();
        assert_eq!(values, (1..=CALLERS).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn document_endpoints_refuse_while_disconnected() {
        let state = disconnected_state();

        assert!(matches!(
            users::list(State(state.clone())).await,
            Err(AppError::Unavailable)
        ));
        assert!(matches!(
            users::register(State(state.clone()), Json(register_body("kettle"))).await,
            Err(AppError::Unavailable)
        ));
        assert!(matches!(
            orders::history(State(state), Path("kettle".to_string())).await,
            Err(AppError::Unavailable)
        ));
    }

    #[tokio::test]
    async fn unique_id_is_not_gated_by_the_document_store() {
        let state = disconnected_state();

        let Json(id) = counter::unique_id(State(state)).await.unwrap();

        assert_eq!(id.uuid, "anonymous-1");
    }
}
