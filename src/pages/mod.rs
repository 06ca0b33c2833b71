//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! `components::route_view` picks the page for the current location after the
//! guard has run. Protected pages can assume a signed-in user.

pub mod bank_card;
pub mod binary_data;
pub mod credentials;
pub mod home;
pub mod login;
pub mod not_found;
pub mod signup;
