use super::*;
use crate::net::fake_backend::FakeBackend;
use crate::net::types::User;
use crate::router::{ROUTES, resolve};
use crate::storage::MemoryStore;

fn user(name: &str) -> User {
    serde_json::from_value(serde_json::json!({ "id": 1, "username": name })).unwrap()
}

fn signed_in() -> Session {
    Session { user: Some(user("alice")), return_url: None }
}

fn stay(_: &str) {}

fn store() -> SessionStore<FakeBackend, MemoryStore, fn(&str)> {
    SessionStore::new(FakeBackend::new(), MemoryStore::new(), stay as fn(&str))
}

// =============================================================
// check
// =============================================================

#[test]
fn check_redirects_every_protected_route_without_user() {
    let session = Session::default();
    for route in ROUTES.iter().filter(|r| r.requires_auth) {
        assert_eq!(check(&session, route), Decision::RedirectTo(LOGIN_PATH.to_owned()), "{}", route.path);
    }
}

#[test]
fn check_allows_public_routes_regardless_of_session() {
    for route in ROUTES.iter().filter(|r| !r.requires_auth) {
        assert_eq!(check(&Session::default(), route), Decision::Allow);
        assert_eq!(check(&signed_in(), route), Decision::Allow);
    }
}

#[test]
fn check_allows_protected_routes_with_user() {
    for route in ROUTES {
        assert_eq!(check(&signed_in(), route), Decision::Allow);
    }
}

#[test]
fn check_ignores_return_url() {
    let session = Session { user: None, return_url: Some("/bank-card".to_owned()) };
    let route = resolve("/login").unwrap();
    assert_eq!(check(&session, route), Decision::Allow);
}

// =============================================================
// before_each
// =============================================================

#[test]
fn before_each_records_return_url_on_redirect() {
    let store = store();
    let decision = before_each(&store, "/credentials");
    assert_eq!(decision, Decision::RedirectTo("/login".to_owned()));
    assert_eq!(store.return_url().as_deref(), Some("/credentials"));
}

#[test]
fn before_each_records_full_path_with_query() {
    let store = store();
    before_each(&store, "/binary-data?file=backup.bin");
    assert_eq!(store.return_url().as_deref(), Some("/binary-data?file=backup.bin"));
}

#[test]
fn before_each_latest_redirect_wins() {
    let store = store();
    before_each(&store, "/credentials");
    before_each(&store, "/bank-card");
    assert_eq!(store.return_url().as_deref(), Some("/bank-card"));
}

#[test]
fn before_each_public_route_leaves_return_url() {
    let store = store();
    before_each(&store, "/credentials");
    assert_eq!(before_each(&store, "/login"), Decision::Allow);
    assert_eq!(store.return_url().as_deref(), Some("/credentials"));
}

#[test]
fn before_each_unknown_path_is_allowed() {
    let store = store();
    assert_eq!(before_each(&store, "/does-not-exist"), Decision::Allow);
    assert!(store.return_url().is_none());
}
