//! Clockwork User - Account, order-history and counter service binary.
//!
//! Serves the user surface on `USER_SERVER_PORT` (default 8080) over the
//! `users` document store and the key-value counter. Startup never waits
//! for either store: the process binds immediately, each connection is
//! established by its own background task, and document endpoints answer
//! `database not available` until the first successful ping.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clockwork_core::readiness::Readiness;
use clockwork_user::config::UserConfig;
use clockwork_user::db::{self, MongoUserStore, RedisCounter};
use clockwork_user::routes;
use clockwork_user::state::AppState;

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = UserConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "clockwork_user=info,tower_http=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Build the document-store client; connectivity is established in the
    // background
    let mongo_url = config.mongo_url();
    tracing::info!(url = %mongo_url, "connecting to MongoDB");
    let client = db::connect(&mongo_url)
        .await
        .expect("Invalid MongoDB connection string");

    let (readiness, writer) = Readiness::new();
    tokio::spawn(db::watch_connection(client.clone(), writer));

    // The counter link is independent: tracked, logged, gating nothing
    let counter = Arc::new(RedisCounter::new());
    tokio::spawn({
        let counter = Arc::clone(&counter);
        let redis_url = config.redis_url();
        async move { counter.connect(&redis_url).await }
    });

    // Build application state and router
    let state = AppState::new(Arc::new(MongoUserStore::new(&client)), counter, readiness);
    let app = routes::app(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("user service listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
