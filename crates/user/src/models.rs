//! Account and order-history documents, plus request payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An account document in the `users` collection.
///
/// `name` is the natural key; there is no surrogate id. The password is
/// stored and compared in plaintext and is returned in the login response -
/// kept for compatibility with the existing stored data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub password: String,
    pub email: String,
}

/// An order-history document in the `orders` collection, keyed by user
/// name.
///
/// Orders are opaque payloads appended in submission order; the service
/// never validates or deduplicates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderHistory {
    pub name: String,
    pub history: Vec<Value>,
}

/// Body of `POST /login`.
///
/// Fields default to empty so that missing and empty values are rejected
/// the same way.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub password: String,
}

/// Body of `POST /register`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub email: String,
}
