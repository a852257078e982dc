//! User service configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `MONGO_HOST` - Document store host (default: mongodb)
//! - `REDIS_HOST` - Key-value store host (default: redis)
//! - `USER_SERVER_PORT` - Listen port (default: 8080)

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clockwork_core::env::{ConfigError, parsed_var_or, var_or};

/// User service configuration.
#[derive(Debug, Clone)]
pub struct UserConfig {
    /// Document store host
    pub mongo_host: String,
    /// Key-value store host
    pub redis_host: String,
    /// Port to listen on
    pub port: u16,
}

impl UserConfig {
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
            redis_host: var_or("REDIS_HOST", "redis"),
            port: parsed_var_or("USER_SERVER_PORT", "8080")?,
        })
    }

    /// Connection string for the user document store.
    #[must_use]
    pub fn mongo_url(&self) -> String {
        format!("mongodb://{}:27017/users", self.mongo_host)
    }

    /// Connection string for the key-value store.
    #[must_use]
    pub fn redis_url(&self) -> String {
        format!("redis://{}:6379", self.redis_host)
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

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> UserConfig {
        UserConfig {
            mongo_host: "mongo.internal".to_string(),
            redis_host: "redis.internal".to_string(),
            port: 9091,
        }
    }

    #[test]
    fn mongo_url_targets_users_database() {
        assert_eq!(
            test_config().mongo_url(),
            "mongodb://mongo.internal:27017/users"
        );
    }

    #[test]
    fn redis_url_uses_default_port() {
        assert_eq!(test_config().redis_url(), "redis://redis.internal:6379");
    }

    #[test]
    fn binds_all_interfaces() {
        let addr = test_config().socket_addr();
        assert_eq!(addr.ip().to_string(), "0.0.0.0");
        assert_eq!(addr.port(), 9091);
    }
}
