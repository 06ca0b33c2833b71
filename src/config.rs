//! Application configuration resolved at build time.
//!
//! The WASM bundle has no process environment, so values are baked in with
//! `option_env!` when the crate is compiled. `from_lookup` takes the same
//! keys from an arbitrary source for tests.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::error::ConfigError;

pub const DEFAULT_API_URL: &str = "http://localhost:4000";

pub const API_URL_KEY: &str = "LOCKBOX_API_URL";
pub const BACKEND_KEY: &str = "LOCKBOX_BACKEND";

/// Which [`crate::net::api::AuthApi`] implementation the app talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendMode {
    /// Real HTTP backend at `api_url`.
    #[default]
    Http,
    /// In-memory fake backend; no network traffic.
    Fake,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_url: String,
    pub backend: BackendMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { api_url: DEFAULT_API_URL.to_owned(), backend: BackendMode::Http }
    }
}

impl AppConfig {
    /// Build config from values captured at compile time.
    ///
    /// Optional:
    /// - `LOCKBOX_API_URL`: backend base URL, default `http://localhost:4000`
    /// - `LOCKBOX_BACKEND`: `http` (default) or `fake`
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| match key {
            API_URL_KEY => option_env!("LOCKBOX_API_URL").map(str::to_owned),
            BACKEND_KEY => option_env!("LOCKBOX_BACKEND").map(str::to_owned),
            _ => None,
        })
    }

    /// Build config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup(API_URL_KEY)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_owned())
            .trim()
            .trim_end_matches('/')
            .to_owned();
        let backend = parse_backend(lookup(BACKEND_KEY).as_deref())?;
        Ok(Self { api_url, backend })
    }

    /// Base URL of the users resource, e.g. `http://localhost:4000/users`.
    #[must_use]
    pub fn users_url(&self) -> String {
        format!("{}/users", self.api_url)
    }
}

fn parse_backend(raw: Option<&str>) -> Result<BackendMode, ConfigError> {
    match raw.map(str::trim).unwrap_or("http") {
        "" | "http" => Ok(BackendMode::Http),
        "fake" => Ok(BackendMode::Fake),
        other => Err(ConfigError::Parse(format!(
            "unknown {BACKEND_KEY} '{other}' (expected 'http' or 'fake')"
        ))),
    }
}
