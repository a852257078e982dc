//! Environment variable lookup with defaults.
//!
//! Every deployment knob in the services is an environment variable with a
//! fixed fallback, so the helpers here never fail on a missing variable -
//! only on one that is present but unparseable.

use std::fmt::Display;
use std::str::FromStr;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed into the expected type.
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Get an environment variable with a default value.
///
/// The core crate carries no logging dependency; callers log their resolved
/// configuration once at startup instead of logging each fallback here.
#[must_use]
pub fn var_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get an environment variable parsed into `T`, falling back to `default`
/// when unset.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` if the variable (or the default) is
/// set but does not parse as `T`.
pub fn parsed_var_or<T: FromStr>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    var_or(key, default)
        .parse()
        .map_err(|e: T::Err| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}
