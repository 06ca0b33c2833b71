//! In-memory users backend.
//!
//! Stands in for the real API when `LOCKBOX_BACKEND=fake`, so the app can be
//! exercised without a server. Also the default backend in tests.

#[cfg(test)]
#[path = "fake_backend_test.rs"]
mod fake_backend_test;

use std::sync::RwLock;

use async_trait::async_trait;

use super::api::AuthApi;
use super::types::{Credentials, SignupRequest, User};
use crate::error::AuthError;

pub const FAKE_TOKEN: &str = "fake-jwt-token";

#[derive(Clone, Debug)]
struct StoredUser {
    id: u64,
    username: String,
    password: String,
    first_name: Option<String>,
    last_name: Option<String>,
}

impl StoredUser {
    fn to_user(&self, token: Option<&str>) -> User {
        let mut record = serde_json::Map::new();
        record.insert("id".to_owned(), self.id.into());
        record.insert("username".to_owned(), self.username.clone().into());
        if let Some(first) = &self.first_name {
            record.insert("firstName".to_owned(), first.clone().into());
        }
        if let Some(last) = &self.last_name {
            record.insert("lastName".to_owned(), last.clone().into());
        }
        if let Some(token) = token {
            record.insert("token".to_owned(), token.into());
        }
        User::from_value(record.into())
    }
}

#[derive(Debug, Default)]
pub struct FakeBackend {
    users: RwLock<Vec<StoredUser>>,
}

impl FakeBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn user_count(&self) -> usize {
        self.users.read().map_or(0, |u| u.len())
    }
}

fn bad_request(message: impl Into<String>) -> AuthError {
    AuthError::Status { status: 400, status_text: "Bad Request".to_owned(), message: Some(message.into()) }
}

fn poisoned() -> AuthError {
    AuthError::Status { status: 500, status_text: "Internal Server Error".to_owned(), message: None }
}

#[async_trait(?Send)]
impl AuthApi for FakeBackend {
    async fn authenticate(&self, creds: &Credentials) -> Result<User, AuthError> {
        let users = self.users.read().map_err(|_| poisoned())?;
        users
            .iter()
            .find(|u| u.username == creds.username && u.password == creds.password)
            .map(|u| u.to_user(Some(FAKE_TOKEN)))
            .ok_or_else(|| bad_request("Username or password is incorrect"))
    }

    async fn signup(&self, req: &SignupRequest) -> Result<User, AuthError> {
        let username = req.username.trim();
        if username.is_empty() || req.password.is_empty() {
            return Err(bad_request("Username and password are required"));
        }

        let mut users = self.users.write().map_err(|_| poisoned())?;
        if users.iter().any(|u| u.username == username) {
            return Err(bad_request(format!("Username \"{username}\" is already taken")));
        }

        let id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        let stored = StoredUser {
            id,
            username: username.to_owned(),
            password: req.password.clone(),
            first_name: req.first_name.clone(),
            last_name: req.last_name.clone(),
        };
        let user = stored.to_user(None);
        users.push(stored);
        log::debug!("fake backend registered user id={id}");
        Ok(user)
    }
}
