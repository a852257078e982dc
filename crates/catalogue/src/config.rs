//! Catalogue service configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `MONGO_HOST` - Document store host (default: mongodb)
//! - `CATALOGUE_SERVER_PORT` - Listen port (default: 8080)

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clockwork_core::env::{ConfigError, parsed_var_or, var_or};

/// Catalogue service configuration.
#[derive(Debug, Clone)]
pub struct CatalogueConfig {
    /// Document store host
    pub mongo_host: String,
    /// Port to listen on
    pub port: u16,
}

impl CatalogueConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            mongo_host: var_or("MONGO_HOST", "mongodb"),
            port: parsed_var_or("CATALOGUE_SERVER_PORT", "8080")?,
        })
    }

    /// Connection string for the catalogue document store.
    #[must_use]
    pub fn mongo_url(&self) -> String {
        format!("mongodb://{}:27017/catalogue", self.mongo_host)
    }

    /// Returns the socket address for binding the server.
    ///
    /// The service always binds every interface; only the port is
    /// configurable.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), self.port)
    }
}
