//! Session store: the current user and the pending return URL.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shared by the route guard and the pages. Login and registration go through
//! the injected `AuthApi`; the user record is mirrored to durable storage under
//! `USER_KEY` so a reload keeps the session.
//!
//! CONCURRENCY
//! ===========
//! The session lock is only taken for synchronous reads and writes, never
//! across an `.await`. Overlapping logins resolve as last write wins.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::AuthError;
use crate::net::api::AuthApi;
use crate::net::types::{Credentials, SignupRequest, User};
use crate::router::{DEFAULT_PATH, LOGIN_PATH};
use crate::storage::{KeyValueStore, load_json, save_json};

/// Storage key holding the serialized user.
pub const USER_KEY: &str = "user";

/// Performs route changes on behalf of the store.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str),
{
    fn navigate(&self, path: &str) {
        self(path);
    }
}

/// Snapshot of session state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub user: Option<User>,
    /// Path requested before a login redirect.
    pub return_url: Option<String>,
}

impl Session {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

pub struct SessionStore<A, S, N> {
    api: A,
    storage: S,
    navigator: N,
    session: RwLock<Session>,
}

impl<A, S, N> SessionStore<A, S, N>
where
    A: AuthApi,
    S: KeyValueStore,
    N: Navigator,
{
    /// Create the store, restoring the user persisted in `storage`.
    ///
    /// An unreadable persisted value counts as logged out and is removed.
    pub fn new(api: A, storage: S, navigator: N) -> Self {
        let user = match load_json::<User, _>(&storage, USER_KEY) {
            Ok(user) => user,
            Err(e) => {
                log::warn!("discarding unreadable persisted user: {e}");
                if let Err(e) = storage.remove(USER_KEY) {
                    log::warn!("failed to remove persisted user: {e}");
                }
                None
            }
        };
        if let Some(user) = &user {
            log::debug!("restored session for {}", user.display_name());
        }
        Self { api, storage, navigator, session: RwLock::new(Session { user, return_url: None }) }
    }

    fn read(&self) -> RwLockReadGuard<'_, Session> {
        self.session.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Session> {
        self.session.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn session(&self) -> Session {
        self.read().clone()
    }

    pub fn user(&self) -> Option<User> {
        self.read().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().is_authenticated()
    }

    pub fn return_url(&self) -> Option<String> {
        self.read().return_url.clone()
    }

    pub fn set_return_url(&self, path: impl Into<String>) {
        self.write().return_url = Some(path.into());
    }

    /// Authenticate, persist the user, and navigate to the return URL or `/`.
    ///
    /// # Errors
    ///
    /// Backend errors are returned unchanged and leave the session untouched.
    /// `AuthError::Storage` if the user could not be persisted.
    pub async fn login(&self, username: &str, password: &str) -> Result<User, AuthError> {
        let creds = Credentials { username: username.to_owned(), password: password.to_owned() };
        let user = self.api.authenticate(&creds).await.inspect_err(|e| {
            log::info!("login failed for {username}: {e}");
        })?;
        self.establish(user)
    }

    /// Create an account with just a username and password.
    ///
    /// # Errors
    ///
    /// See [`Self::register_with`].
    pub async fn register(&self, username: &str, password: &str) -> Result<User, AuthError> {
        let creds = Credentials { username: username.to_owned(), password: password.to_owned() };
        self.register_with(creds.into()).await
    }

    /// Create an account, then behave like a successful login.
    ///
    /// # Errors
    ///
    /// Backend failures become `AuthError::Registration`, carrying the backend
    /// message or "Registration failed". `AuthError::Storage` if the user could
    /// not be persisted.
    pub async fn register_with(&self, req: SignupRequest) -> Result<User, AuthError> {
        let user = self.api.signup(&req).await.map_err(|e| {
            log::info!("registration failed for {}: {e}", req.username);
            e.into_registration()
        })?;
        self.establish(user)
    }

    fn establish(&self, user: User) -> Result<User, AuthError> {
        save_json(&self.storage, USER_KEY, &user).map_err(AuthError::Storage)?;
        let target = {
            let mut session = self.write();
            session.user = Some(user.clone());
            session.return_url.take()
        };
        let target = target.unwrap_or_else(|| DEFAULT_PATH.to_owned());
        log::info!("signed in as {}, continuing to {target}", user.display_name());
        self.navigator.navigate(&target);
        Ok(user)
    }

    /// Clear the user from memory and storage, then navigate to the login page.
    pub fn logout(&self) {
        self.write().user = None;
        if let Err(e) = self.storage.remove(USER_KEY) {
            log::warn!("failed to remove persisted user: {e}");
        }
        log::info!("signed out");
        self.navigator.navigate(LOGIN_PATH);
    }
}
