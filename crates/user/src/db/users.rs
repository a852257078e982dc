//! Account and order-history store operations.
//!
//! Handlers depend on the [`UserStore`] trait rather than the driver, so
//! tests can substitute an in-memory store.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, to_bson};
use mongodb::{Client, Collection};
use serde_json::Value;

use super::{DB_NAME, StoreError};
use crate::models::{OrderHistory, User};

/// Store operations over the `users` and `orders` collections.
///
/// Each method is one store round-trip. The order-append sequence
/// (find history, rewrite sequence) is composed in the handler, not here,
/// so the store surface stays one-operation-per-call.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Exact-match lookup on account `name`.
    async fn find_user(&self, name: &str) -> Result<Option<User>, StoreError>;

    /// Every account document. Debug affordance, not access-controlled.
    async fn all_users(&self) -> Result<Vec<User>, StoreError>;

    /// Insert an account document verbatim.
    async fn insert_user(&self, user: &User) -> Result<(), StoreError>;

    /// The order-history document for a user, if any orders exist.
    async fn find_history(&self, name: &str) -> Result<Option<OrderHistory>, StoreError>;

    /// Replace the history sequence of an existing record.
    async fn set_history(&self, name: &str, history: &[Value]) -> Result<(), StoreError>;

    /// Create the first history record for a user.
    async fn insert_history(&self, record: &OrderHistory) -> Result<(), StoreError>;
}

/// Production [`UserStore`] backed by the user database.
pub struct MongoUserStore {
    users: Collection<User>,
    orders: Collection<OrderHistory>,
}

impl MongoUserStore {
    /// Create a store over the client's user database.
    #[must_use]
    pub fn new(client: &Client) -> Self {
        let db = client.database(DB_NAME);
        Self {
            users: db.collection("users"),
            orders: db.collection("orders"),
        }
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn find_user(&self, name: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.find_one(doc! { "name": name }).await?)
    }

    async fn all_users(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.users.find(doc! {}).await?.try_collect().await?)
    }

    async fn insert_user(&self, user: &User) -> Result<(), StoreError> {
        self.users.insert_one(user).await?;
        Ok(())
    }

    async fn find_history(&self, name: &str) -> Result<Option<OrderHistory>, StoreError> {
        Ok(self.orders.find_one(doc! { "name": name }).await?)
    }

    async fn set_history(&self, name: &str, history: &[Value]) -> Result<(), StoreError> {
        let sequence = to_bson(history)?;
        self.orders
            .update_one(
                doc! { "name": name },
                doc! { "$set": { "history": sequence } },
            )
            .await?;
        Ok(())
    }

    async fn insert_history(&self, record: &OrderHistory) -> Result<(), StoreError> {
        self.orders.insert_one(record).await?;
        Ok(())
    }
}
