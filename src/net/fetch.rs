//! Thin JSON-over-HTTP helper.
//!
//! Client-side (csr): real requests via `gloo-net`.
//! Elsewhere: every request fails with `AuthError::Unavailable`.
//!
//! ERROR HANDLING
//! ==============
//! Non-success responses become `AuthError::Status`. Only the body's
//! `message` field counts as a backend message; the status text is kept
//! separately for display. No retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::AuthError;

/// POST `body` as JSON to `url` and parse the JSON response.
///
/// # Errors
///
/// Returns `AuthError::Request` on transport failure, `AuthError::Status`
/// on a non-success status, and `AuthError::Parse` on a malformed body.
pub async fn post_json<B, T>(url: &str, body: &B) -> Result<T, AuthError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(url)
            .json(body)
            .map_err(|e| AuthError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Request(e.to_string()))?;
        let status = resp.status();
        let status_text = resp.status_text();
        let text = resp.text().await.map_err(|e| AuthError::Request(e.to_string()))?;
        handle_response(status, &status_text, &text)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (url, body);
        Err(AuthError::Unavailable)
    }
}

/// Turn a raw HTTP response into a parsed body or an error.
///
/// # Errors
///
/// See [`post_json`].
pub fn handle_response<T: DeserializeOwned>(status: u16, status_text: &str, body: &str) -> Result<T, AuthError> {
    if !(200..300).contains(&status) {
        return Err(AuthError::Status { status, status_text: status_text.trim().to_owned(), message: body_message(body) });
    }
    serde_json::from_str(body).map_err(|e| AuthError::Parse(e.to_string()))
}

fn body_message(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_owned))
        .filter(|m| !m.is_empty())
}
