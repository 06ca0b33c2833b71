//! Static route table.
//!
//! DESIGN
//! ======
//! Routes are plain data so the guard can be evaluated without the UI
//! framework. `app` builds the Leptos routes from `ROUTES`.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

pub const LOGIN_PATH: &str = "/login";
pub const SIGNUP_PATH: &str = "/signup";
pub const DEFAULT_PATH: &str = "/";

/// Page rendered for a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Login,
    Signup,
    Home,
    Credentials,
    BankCard,
    BinaryData,
}

/// One entry of the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDef {
    pub path: &'static str,
    pub name: &'static str,
    pub view: View,
    pub requires_auth: bool,
}

pub static ROUTES: &[RouteDef] = &[
    RouteDef { path: LOGIN_PATH, name: "Login", view: View::Login, requires_auth: false },
    RouteDef { path: SIGNUP_PATH, name: "Signup", view: View::Signup, requires_auth: false },
    RouteDef { path: DEFAULT_PATH, name: "home", view: View::Home, requires_auth: true },
    RouteDef { path: "/credentials", name: "credentials", view: View::Credentials, requires_auth: true },
    RouteDef { path: "/bank-card", name: "bank-card", view: View::BankCard, requires_auth: true },
    RouteDef { path: "/binary-data", name: "binary-data", view: View::BinaryData, requires_auth: true },
];

/// Path portion of a full path, without query string or fragment.
#[must_use]
pub fn path_only(full_path: &str) -> &str {
    let end = full_path.find(['?', '#']).unwrap_or(full_path.len());
    &full_path[..end]
}

/// Find the route for `full_path`. One trailing slash is tolerated.
#[must_use]
pub fn resolve(full_path: &str) -> Option<&'static RouteDef> {
    let path = path_only(full_path);
    let path = if path.len() > 1 { path.strip_suffix('/').unwrap_or(path) } else { path };
    ROUTES.iter().find(|r| r.path == path)
}
