//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the session store from Leptos context; pages compose them.

pub mod nav_bar;
pub mod route_view;
