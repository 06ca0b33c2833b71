use super::*;
use crate::pages::login::MISSING_CREDENTIALS;

#[test]
fn build_signup_request_trims_and_drops_blank_names() {
    let req = build_signup_request(" alice ", "pw", "  ", " Liddell ").unwrap();
    assert_eq!(req.username, "alice");
    assert_eq!(req.password, "pw");
    assert!(req.first_name.is_none());
    assert_eq!(req.last_name.as_deref(), Some("Liddell"));
}

#[test]
fn build_signup_request_requires_credentials() {
    assert_eq!(build_signup_request("", "pw", "Alice", ""), Err(MISSING_CREDENTIALS));
    assert_eq!(build_signup_request("alice", "", "", ""), Err(MISSING_CREDENTIALS));
}
