//! Live end-to-end tests for the Clockwork services.
//!
//! These tests hit running service processes over HTTP and therefore need
//! the full stack up: MongoDB, Redis, and both binaries. They are
//! `#[ignore]`d so that `cargo test` stays green without infrastructure.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the stores and both services, then:
//! cargo test -p clockwork-integration-tests -- --ignored
//! ```
//!
//! Service locations are taken from `CATALOGUE_URL` and `USER_URL`,
//! defaulting to the local development ports.

#![cfg_attr(not(test), forbid(unsafe_code))]

/// Base URL of the catalogue service under test.
#[must_use]
pub fn catalogue_url() -> String {
    std::env::var("CATALOGUE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string())
}

/// Base URL of the user service under test.
#[must_use]
pub fn user_url() -> String {
    std::env::var("USER_URL").unwrap_or_else(|_| "http://localhost:8081".to_string())
}

/// An account name that will not collide across test runs.
#[must_use]
pub fn unique_name(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    format!("{prefix}-{nanos}")
}
