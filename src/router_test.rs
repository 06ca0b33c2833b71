use super::*;

// =============================================================
// Route table
// =============================================================

#[test]
fn route_paths_are_unique() {
    for (i, a) in ROUTES.iter().enumerate() {
        for b in &ROUTES[i + 1..] {
            assert_ne!(a.path, b.path);
            assert_ne!(a.name, b.name);
        }
    }
}

#[test]
fn only_login_and_signup_are_public() {
    let public: Vec<_> = ROUTES.iter().filter(|r| !r.requires_auth).map(|r| r.path).collect();
    assert_eq!(public, vec![LOGIN_PATH, SIGNUP_PATH]);
}

#[test]
fn every_view_has_a_route() {
    for view in [View::Login, View::Signup, View::Home, View::Credentials, View::BankCard, View::BinaryData] {
        assert_eq!(ROUTES.iter().filter(|r| r.view == view).count(), 1, "{view:?}");
    }
}

#[test]
fn public_route_names_are_capitalized() {
    assert_eq!(resolve(LOGIN_PATH).map(|r| r.name), Some("Login"));
    assert_eq!(resolve(SIGNUP_PATH).map(|r| r.name), Some("Signup"));
}

// =============================================================
// resolve
// =============================================================

#[test]
fn resolve_exact_paths() {
    assert_eq!(resolve("/").map(|r| r.view), Some(View::Home));
    assert_eq!(resolve("/credentials").map(|r| r.view), Some(View::Credentials));
    assert_eq!(resolve("/bank-card").map(|r| r.view), Some(View::BankCard));
    assert_eq!(resolve("/binary-data").map(|r| r.view), Some(View::BinaryData));
    assert_eq!(resolve("/login").map(|r| r.view), Some(View::Login));
}

#[test]
fn resolve_ignores_query_and_fragment() {
    assert_eq!(resolve("/credentials?tab=web#top").map(|r| r.name), Some("credentials"));
    assert_eq!(resolve("/?x=1").map(|r| r.name), Some("home"));
}

#[test]
fn resolve_tolerates_trailing_slash() {
    assert_eq!(resolve("/bank-card/").map(|r| r.name), Some("bank-card"));
}

#[test]
fn resolve_unknown_path_is_none() {
    assert!(resolve("/nope").is_none());
    assert!(resolve("").is_none());
    assert!(resolve("/credentials/extra").is_none());
}

#[test]
fn path_only_strips_suffixes() {
    assert_eq!(path_only("/a?b=c"), "/a");
    assert_eq!(path_only("/a#frag"), "/a");
    assert_eq!(path_only("/a"), "/a");
}
