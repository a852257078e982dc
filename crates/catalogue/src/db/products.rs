//! Product store operations.
//!
//! Handlers depend on the [`ProductStore`] trait rather than the driver, so
//! tests can substitute an in-memory catalogue.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{Document, doc};
use mongodb::{Client, Collection};

use super::{DB_NAME, StoreError};

/// Read-only query surface over the product collection.
///
/// Products are passed through as raw documents: the store is the source of
/// truth for their shape and the service enforces no schema beyond the
/// fields it queries on.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Every product document, in store order.
    async fn all(&self) -> Result<Vec<Document>, StoreError>;

    /// Exact-match lookup on `sku`.
    async fn by_sku(&self, sku: &str) -> Result<Option<Document>, StoreError>;

    /// Products whose `categories` field contains `category`, sorted
    /// ascending by `name`.
    async fn in_category(&self, category: &str) -> Result<Vec<Document>, StoreError>;

    /// Distinct values of the `categories` field across all products.
    async fn categories(&self) -> Result<Vec<String>, StoreError>;

    /// Products matching `text` against the store's text index, in the
    /// store's default relevance order.
    async fn text_search(&self, text: &str) -> Result<Vec<Document>, StoreError>;
}

/// Production [`ProductStore`] backed by the `products` collection.
pub struct MongoProductStore {
    products: Collection<Document>,
}

impl MongoProductStore {
    /// Create a store over the client's catalogue database.
    #[must_use]
    pub fn new(client: &Client) -> Self {
        Self {
            products: client.database(DB_NAME).collection("products"),
        }
    }
}

#[async_trait]
impl ProductStore for MongoProductStore {
    async fn all(&self) -> Result<Vec<Document>, StoreError> {
        Ok(self.products.find(doc! {}).await?.try_collect().await?)
    }

    async fn by_sku(&self, sku: &str) -> Result<Option<Document>, StoreError> {
        Ok(self.products.find_one(doc! { "sku": sku }).await?)
    }

    async fn in_category(&self, category: &str) -> Result<Vec<Document>, StoreError> {
        Ok(self
            .products
            .find(doc! { "categories": category })
            .sort(doc! { "name": 1 })
            .await?
            .try_collect()
            .await?)
    }

    async fn categories(&self) -> Result<Vec<String>, StoreError> {
        let values = self.products.distinct("categories", doc! {}).await?;
        Ok(values
            .into_iter()
            .filter_map(|value| value.as_str().map(ToOwned::to_owned))
            .collect())
    }

    async fn text_search(&self, text: &str) -> Result<Vec<Document>, StoreError> {
        Ok(self
            .products
            .find(doc! { "$text": { "$search": text } })
            .await?
            .try_collect()
            .await?)
    }
}
