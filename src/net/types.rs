//! Wire DTOs for the users API.
//!
//! DESIGN
//! ======
//! The user record is opaque to the client. The JSON the backend returned is
//! kept as-is and the few fields the UI reads are exposed as accessors, so
//! the persisted copy matches the response byte for byte in meaning.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Authenticated user as returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct User(serde_json::Value);

impl User {
    #[must_use]
    pub fn from_value(record: serde_json::Value) -> Self {
        Self(record)
    }

    /// The record exactly as received.
    #[must_use]
    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(serde_json::Value::as_str)
    }

    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.str_field("username")
    }

    #[must_use]
    pub fn first_name(&self) -> Option<&str> {
        self.str_field("firstName")
    }

    /// Bearer token, when the backend issues one.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.str_field("token")
    }

    /// Name for display: first name, else username, else empty.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.first_name()
            .filter(|n| !n.is_empty())
            .or_else(|| self.username())
            .unwrap_or_default()
    }
}

/// Login request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Signup request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl From<Credentials> for SignupRequest {
    fn from(creds: Credentials) -> Self {
        Self { username: creds.username, password: creds.password, first_name: None, last_name: None }
    }
}
