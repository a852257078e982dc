//! Anonymous-visitor counter backed by the key-value store.
//!
//! The one genuinely atomic operation in the service: the key-value
//! store's increment primitive is race-free by construction, so concurrent
//! callers always receive distinct, gap-free values.

use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use redis::aio::{ConnectionManager, ConnectionManagerConfig};
use redis::{AsyncCommands, Client};
use thiserror::Error;

use super::RETRY_INTERVAL;

/// Key holding the anonymous-visitor counter.
pub const COUNTER_KEY: &str = "anonymous-counter";

/// Errors raised by counter operations.
#[derive(Debug, Error)]
pub enum CounterError {
    /// The key-value store connection has not been established yet.
    #[error("counter store not connected")]
    NotConnected,

    /// The underlying command failed.
    #[error("{0}")]
    Redis(#[from] redis::RedisError),
}

/// Atomic counter surface.
#[async_trait]
pub trait Counter: Send + Sync {
    /// Increment the counter and return the new value.
    async fn increment(&self) -> Result<i64, CounterError>;
}

/// Production [`Counter`] backed by Redis `INCR`.
///
/// The managed connection is established by [`RedisCounter::connect`] in
/// the background; until then [`Counter::increment`] fails with
/// [`CounterError::NotConnected`]. The connection state is tracked and
/// logged independently of the document store and gates nothing else.
#[derive(Clone, Default)]
pub struct RedisCounter {
    connection: Arc<OnceLock<ConnectionManager>>,
}

impl RedisCounter {
    /// Create a counter with no connection yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Background task: establish the managed connection, retrying every
    /// [`RETRY_INTERVAL`] until it succeeds.
    ///
    /// The manager reconnects on its own afterwards.
    pub async fn connect(&self, url: &str) {
        let client = match Client::open(url) {
            Ok(client) => client,
            Err(e) => {
                tracing::error!(error = %e, "invalid Redis connection string");
                return;
            }
        };

        loop {
            let config =
                ConnectionManagerConfig::new().set_connection_timeout(RETRY_INTERVAL);
            match client.get_connection_manager_with_config(config).await {
                Ok(manager) => {
                    // A second connect call would be a programming error;
                    // the extra manager is simply dropped.
                    let _ = self.connection.set(manager);
                    tracing::info!("Redis READY");
                    return;
                }
                Err(e) => {
                    tracing::error!(error = %e, "Redis ERROR");
                    tokio::time::sleep(RETRY_INTERVAL).await;
                }
            }
        }
    }
}

#[async_trait]
impl Counter for RedisCounter {
    async fn increment(&self) -> Result<i64, CounterError> {
        let mut connection = self
            .connection
            .get()
            .ok_or(CounterError::NotConnected)?
            .clone();
        let value: i64 = connection.incr(COUNTER_KEY, 1).await?;
        Ok(value)
    }
}
