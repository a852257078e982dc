//! Document store access for the catalogue service.
//!
//! # Database: `catalogue`
//!
//! One collection, `products`: schema-flexible display documents with a
//! unique `sku`, a `name`, a `description` and a multi-valued `categories`
//! field. A text index over name/description is assumed to exist for
//! `/search`; the service never creates indexes itself.

use std::time::Duration;

use mongodb::Client;
use mongodb::bson::doc;
use thiserror::Error;

use clockwork_core::readiness::ReadinessWriter;

pub mod products;

pub use products::{MongoProductStore, ProductStore};

/// Name of the catalogue database, matching the path of the connection URL.
pub const DB_NAME: &str = "catalogue";

/// How long to wait between connection attempts.
pub const RETRY_INTERVAL: Duration = Duration::from_secs(2);

/// Errors raised by store operations.
///
/// The display text is surfaced verbatim to the client on a 500 response.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying driver call failed.
    #[error("{0}")]
    Mongo(#[from] mongodb::error::Error),
}

/// Build the store client.
///
/// The driver connects lazily; this only fails on a malformed connection
/// string. Actual connectivity is established (and reported) by
/// [`watch_connection`].
///
/// # Errors
///
/// Returns `StoreError::Mongo` if the connection string cannot be parsed.
pub async fn connect(url: &str) -> Result<Client, StoreError> {
    Ok(Client::with_uri_str(url).await?)
}

/// Background task: ping the store every [`RETRY_INTERVAL`] until it
/// answers, then mark the service ready.
///
/// Connection failure is never fatal, only delayed availability. Once the
/// first ping succeeds the driver's pool handles any later reconnection,
/// so the flag is not cleared again.
pub async fn watch_connection(client: Client, writer: ReadinessWriter) {
    loop {
        match client.database(DB_NAME).run_command(doc! { "ping": 1 }).await {
            Ok(_) => {
                writer.mark_connected();
                tracing::info!("MongoDB connected");
                return;
            }
            Err(e) => {
                tracing::error!(error = %e, "MongoDB connection error, retrying");
                tokio::time::sleep(RETRY_INTERVAL).await;
            }
        }
    }
}
