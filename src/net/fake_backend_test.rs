use super::*;
use serde_json::json;

fn creds(username: &str, password: &str) -> Credentials {
    Credentials { username: username.to_owned(), password: password.to_owned() }
}

#[tokio::test]
async fn signup_assigns_incrementing_ids() {
    let backend = FakeBackend::new();
    let first = backend.signup(&creds("alice", "pw").into()).await.unwrap();
    let second = backend.signup(&creds("bob", "pw").into()).await.unwrap();

    assert_eq!(first.as_value()["id"], json!(1));
    assert_eq!(second.as_value()["id"], json!(2));
    assert_eq!(backend.user_count(), 2);
}

#[tokio::test]
async fn signup_does_not_issue_token() {
    let backend = FakeBackend::new();
    let user = backend.signup(&creds("alice", "pw").into()).await.unwrap();
    assert!(user.token().is_none());
    assert!(user.as_value().get("token").is_none());
    assert!(user.as_value().get("firstName").is_none());
}

#[tokio::test]
async fn signup_rejects_duplicate_username() {
    let backend = FakeBackend::new();
    backend.signup(&creds("alice", "pw").into()).await.unwrap();

    let err = backend.signup(&creds("alice", "other").into()).await.unwrap_err();
    assert_eq!(err.message(), Some("Username \"alice\" is already taken"));
    assert_eq!(backend.user_count(), 1);
}

#[tokio::test]
async fn signup_requires_username_and_password() {
    let backend = FakeBackend::new();
    assert!(backend.signup(&creds("  ", "pw").into()).await.is_err());
    assert!(backend.signup(&creds("alice", "").into()).await.is_err());
    assert_eq!(backend.user_count(), 0);
}

#[tokio::test]
async fn signup_keeps_names() {
    let backend = FakeBackend::new();
    let req = SignupRequest {
        username: "alice".to_owned(),
        password: "pw".to_owned(),
        first_name: Some("Alice".to_owned()),
        last_name: Some("Liddell".to_owned()),
    };
    backend.signup(&req).await.unwrap();

    let user = backend.authenticate(&creds("alice", "pw")).await.unwrap();
    assert_eq!(user.first_name(), Some("Alice"));
    assert_eq!(user.as_value()["lastName"], json!("Liddell"));
}

#[tokio::test]
async fn authenticate_returns_user_with_token() {
    let backend = FakeBackend::new();
    backend.signup(&creds("alice", "pw").into()).await.unwrap();

    let user = backend.authenticate(&creds("alice", "pw")).await.unwrap();
    assert_eq!(user.username(), Some("alice"));
    assert_eq!(user.token(), Some(FAKE_TOKEN));
}

#[tokio::test]
async fn authenticate_rejects_wrong_password() {
    let backend = FakeBackend::new();
    backend.signup(&creds("alice", "pw").into()).await.unwrap();

    let err = backend.authenticate(&creds("alice", "nope")).await.unwrap_err();
    assert_eq!(err.message(), Some("Username or password is incorrect"));
    assert!(matches!(err, AuthError::Status { status: 400, .. }));
}

#[tokio::test]
async fn authenticate_unknown_user_fails() {
    let backend = FakeBackend::new();
    assert!(backend.authenticate(&creds("ghost", "pw")).await.is_err());
}
