//! Navigation guard.
//!
//! `check` is the pure allow/redirect decision. `before_each` is what the
//! router runs on every navigation: it resolves the target, applies `check`,
//! and remembers the requested path when redirecting to login.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::net::api::AuthApi;
use crate::router::{LOGIN_PATH, RouteDef, resolve};
use crate::session::{Navigator, Session, SessionStore};
use crate::storage::KeyValueStore;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    Allow,
    RedirectTo(String),
}

/// Allow unless `route` requires auth and the session has no user.
#[must_use]
pub fn check(session: &Session, route: &RouteDef) -> Decision {
    if route.requires_auth && session.user.is_none() {
        Decision::RedirectTo(LOGIN_PATH.to_owned())
    } else {
        Decision::Allow
    }
}

/// Guard a navigation to `target` (full path, query string included).
///
/// Paths with no route are allowed so the router can show its fallback.
pub fn before_each<A, S, N>(store: &SessionStore<A, S, N>, target: &str) -> Decision
where
    A: AuthApi,
    S: KeyValueStore,
    N: Navigator,
{
    let Some(route) = resolve(target) else {
        return Decision::Allow;
    };
    let decision = check(&store.session(), route);
    if let Decision::RedirectTo(to) = &decision {
        log::debug!("guard: {target} requires auth, redirecting to {to}");
        store.set_return_url(target);
    }
    decision
}
