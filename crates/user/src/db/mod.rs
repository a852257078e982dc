//! Store access for the user service.
//!
//! # Database: `users`
//!
//! Two collections:
//!
//! - `users` - account documents `{name, password, email}`, keyed by
//!   `name` (no store-level uniqueness; registration enforces it
//!   best-effort)
//! - `orders` - order-history documents `{name, history: [...]}`, one per
//!   user, created on first order
//!
//! Plus one key in the key-value store, `anonymous-counter`, atomically
//! incremented for anonymous visitor ids.

use std::time::Duration;

use mongodb::Client;
use mongodb::bson::doc;
use thiserror::Error;

use clockwork_core::readiness::ReadinessWriter;

pub mod counter;
pub mod users;

pub use counter::{Counter, CounterError, RedisCounter};
pub use users::{MongoUserStore, UserStore};

/// Name of the user database, matching the path of the connection URL.
pub const DB_NAME: &str = "users";

/// How long to wait between connection attempts.
pub const RETRY_INTERVAL: Duration = Duration::from_secs(2);

/// Errors raised by document-store operations.
///
/// The display text is surfaced verbatim to the client on a 500 response.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying driver call failed.
    #[error("{0}")]
    Mongo(#[from] mongodb::error::Error),

    /// A history sequence could not be encoded for the store.
    #[error("{0}")]
    Encode(#[from] mongodb::bson::ser::Error),
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
