//! Networking modules for the users API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `fetch` wraps raw HTTP, `api` defines the `AuthApi` seam and its HTTP
//! implementation, `fake_backend` is the in-memory alternative, and `types`
//! holds the wire schema.

pub mod api;
pub mod fake_backend;
pub mod fetch;
pub mod types;
