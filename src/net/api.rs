//! Users API used by the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store is generic over `AuthApi` so it can run against the
//! real backend, the in-memory fake backend, or a test double.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::fake_backend::FakeBackend;
use super::fetch::post_json;
use super::types::{Credentials, SignupRequest, User};
use crate::config::{AppConfig, BackendMode};
use crate::error::AuthError;

/// External authentication backend.
#[async_trait(?Send)]
pub trait AuthApi {
    /// Exchange credentials for a user record.
    async fn authenticate(&self, creds: &Credentials) -> Result<User, AuthError>;

    /// Create an account and return its user record.
    async fn signup(&self, req: &SignupRequest) -> Result<User, AuthError>;
}

/// `AuthApi` over HTTP: `POST {users_url}/authenticate` and `/signup`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpAuthApi {
    users_url: String,
}

impl HttpAuthApi {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self { users_url: config.users_url() }
    }

    pub(crate) fn authenticate_endpoint(&self) -> String {
        format!("{}/authenticate", self.users_url)
    }

    pub(crate) fn signup_endpoint(&self) -> String {
        format!("{}/signup", self.users_url)
    }
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn authenticate(&self, creds: &Credentials) -> Result<User, AuthError> {
        post_json(&self.authenticate_endpoint(), creds).await
    }

    async fn signup(&self, req: &SignupRequest) -> Result<User, AuthError> {
        post_json(&self.signup_endpoint(), req).await
    }
}

/// Backend selected by [`BackendMode`].
#[derive(Debug)]
pub enum AuthClient {
    Http(HttpAuthApi),
    Fake(FakeBackend),
}

impl AuthClient {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        match config.backend {
            BackendMode::Http => Self::Http(HttpAuthApi::new(config)),
            BackendMode::Fake => Self::Fake(FakeBackend::new()),
        }
    }
}

#[async_trait(?Send)]
impl AuthApi for AuthClient {
    async fn authenticate(&self, creds: &Credentials) -> Result<User, AuthError> {
        match self {
            Self::Http(api) => api.authenticate(creds).await,
            Self::Fake(api) => api.authenticate(creds).await,
        }
    }

    async fn signup(&self, req: &SignupRequest) -> Result<User, AuthError> {
        match self {
            Self::Http(api) => api.signup(req).await,
            Self::Fake(api) => api.signup(req).await,
        }
    }
}
