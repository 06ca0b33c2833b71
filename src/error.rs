//! Error types surfaced by the session store and its collaborators.
//!
//! ERROR HANDLING
//! ==============
//! Every failure reaches the initiating call site so pages can render it.
//! The only swallowed failure is a storage removal during logout.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Fallback message when a signup failure carries no message of its own.
pub const REGISTRATION_FAILED: &str = "Registration failed";

/// Errors produced by login, registration, and session persistence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The HTTP request could not be built or sent.
    #[error("request failed: {0}")]
    Request(String),

    /// The backend answered with a non-success status.
    ///
    /// `message` is the body's `message` field; `status_text` only feeds
    /// `Display` when the body has none.
    #[error("{}", status_display(*.status, .status_text, .message.as_deref()))]
    Status { status: u16, status_text: String, message: Option<String> },

    /// A success response body could not be deserialized.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// Signup failed; carries the backend message or the generic fallback.
    #[error("{0}")]
    Registration(String),

    /// The user record could not be written to durable storage.
    #[error("storage write failed: {0}")]
    Storage(String),

    /// HTTP is only available in the browser build.
    #[error("not available outside the browser")]
    Unavailable,
}

impl AuthError {
    /// The message sent by the backend, if this error carries one.
    ///
    /// HTTP status text is not a backend message and is never returned here.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            Self::Registration(message) => Some(message),
            _ => None,
        }
    }

    /// Wrap a signup failure, falling back to [`REGISTRATION_FAILED`].
    #[must_use]
    pub fn into_registration(self) -> Self {
        let message = self
            .message()
            .filter(|m| !m.is_empty())
            .unwrap_or(REGISTRATION_FAILED)
            .to_owned();
        Self::Registration(message)
    }
}

fn status_display(status: u16, status_text: &str, message: Option<&str>) -> String {
    match message {
        Some(message) if !message.is_empty() => message.to_owned(),
        _ if !status_text.trim().is_empty() => status_text.trim().to_owned(),
        _ => format!("request failed with status {status}"),
    }
}

/// Errors raised while resolving [`crate::config::AppConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    Parse(String),
}
