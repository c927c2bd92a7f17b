mod common;

use std::sync::Arc;

use bookling_application::notice::{
    self, CONNECTION_FAILED, INVALID_CREDENTIALS, SESSION_NOT_REMEMBERED,
};
use bookling_application::{AuthUseCase, NoticeLevel};
use bookling_core::BooklingError;
use bookling_core::error::Result;
use bookling_core::session::{SessionContext, SessionState, SessionStore};
use bookling_core::user::{Credentials, User};
use common::{Fixture, MockGateway};
use serde_json::json;

/// Store whose writes always fail, like a read-only profile directory.
struct ReadOnlyStore;

impl SessionStore for ReadOnlyStore {
    fn save(&self, _user: &User) -> Result<()> {
        Err(BooklingError::io("read-only file system"))
    }

    fn load(&self) -> Option<User> {
        None
    }

    fn clear(&self) -> Result<()> {
        Err(BooklingError::io("read-only file system"))
    }
}

#[tokio::test]
async fn test_login_pushes_user_into_session_and_store() {
    let fx = Fixture::anonymous();
    fx.gateway.on(
        "POST /users/login",
        Ok(json!({"id": 1, "username": "ann", "email": "ann@example.com"})),
    );
    let auth = AuthUseCase::new(fx.session.clone(), fx.gateway());

    let outcome = auth.login(&Credentials::new("ann", "pw")).await.unwrap();

    assert!(outcome.is_remembered());
    assert!(outcome.warning().is_none());
    assert_eq!(fx.session.current_user(), Some(outcome.user.clone()));
    assert_eq!(fx.persisted_user(), Some(outcome.user));
}

#[tokio::test]
async fn test_login_reports_unsaved_session() {
    let session = Arc::new(SessionContext::new(Arc::new(ReadOnlyStore)));
    let gateway = MockGateway::new();
    gateway.on("POST /users/login", Ok(json!({"id": 1, "username": "ann"})));
    let auth = AuthUseCase::new(session.clone(), gateway);

    let outcome = auth.login(&Credentials::new("ann", "pw")).await.unwrap();

    assert!(!outcome.is_remembered());
    assert!(matches!(outcome.persisted, Err(BooklingError::Io { .. })));
    let warning = outcome.warning().unwrap();
    assert_eq!(warning.level, NoticeLevel::Warning);
    assert_eq!(warning.message, SESSION_NOT_REMEMBERED);
    // Signed in for the rest of this run.
    assert_eq!(session.current_user(), Some(User::new(1, "ann")));
}

#[tokio::test]
async fn test_register_reports_unsaved_session() {
    let session = Arc::new(SessionContext::new(Arc::new(ReadOnlyStore)));
    let gateway = MockGateway::new();
    gateway.on("POST /users/register", Ok(json!({"id": 8, "username": "new"})));
    let auth = AuthUseCase::new(session.clone(), gateway);

    let outcome = auth.register(&Credentials::new("new", "pw")).await.unwrap();
    assert!(outcome.warning().is_some());
    assert!(session.is_authenticated());
}

#[tokio::test]
async fn test_rejected_login_leaves_session_anonymous() {
    let fx = Fixture::anonymous();
    fx.gateway
        .on("POST /users/login", Err(BooklingError::http(401, "")));
    let auth = AuthUseCase::new(fx.session.clone(), fx.gateway());

    let err = auth.login(&Credentials::new("ann", "bad")).await.unwrap_err();

    assert_eq!(notice::login_error(&err).message, INVALID_CREDENTIALS);
    assert_eq!(fx.session.state(), SessionState::Anonymous);
    assert!(fx.persisted_user().is_none());
}

#[tokio::test]
async fn test_unreachable_server_message() {
    let fx = Fixture::anonymous();
    fx.gateway
        .on("POST /users/login", Err(BooklingError::network("refused")));
    let auth = AuthUseCase::new(fx.session.clone(), fx.gateway());

    let err = auth.login(&Credentials::new("ann", "pw")).await.unwrap_err();
    assert_eq!(notice::login_error(&err).message, CONNECTION_FAILED);
}

#[tokio::test]
async fn test_blank_credentials_are_not_sent() {
    let fx = Fixture::anonymous();
    let auth = AuthUseCase::new(fx.session.clone(), fx.gateway());

    let err = auth.login(&Credentials::new("", "pw")).await.unwrap_err();
    assert!(matches!(err, BooklingError::InvalidInput(_)));
    assert!(fx.gateway.sent().is_empty());
}

#[tokio::test]
async fn test_register_signs_in() {
    let fx = Fixture::anonymous();
    fx.gateway
        .on("POST /users/register", Ok(json!({"id": 8, "username": "new"})));
    let auth = AuthUseCase::new(fx.session.clone(), fx.gateway());

    let outcome = auth.register(&Credentials::new("new", "pw")).await.unwrap();
    assert!(outcome.is_remembered());
    assert_eq!(fx.session.current_user(), Some(User::new(8, "new")));
}

#[tokio::test]
async fn test_register_failure_shows_server_message() {
    let fx = Fixture::anonymous();
    fx.gateway.on(
        "POST /users/register",
        Err(BooklingError::http(400, r#"{"message":"Username already taken"}"#)),
    );
    let auth = AuthUseCase::new(fx.session.clone(), fx.gateway());

    let err = auth
        .register(&Credentials::new("ann", "pw"))
        .await
        .unwrap_err();
    assert_eq!(notice::register_error(&err).message, "Username already taken");
    assert!(!fx.session.is_authenticated());
}

#[tokio::test]
async fn test_rename_updates_server_then_session_only() {
    let fx = Fixture::signed_in(User::new(1, "ann").with_field("email", "a@b.c"));
    fx.gateway
        .on("PUT /users/1", Ok(json!("User updated successfully!")));
    let auth = AuthUseCase::new(fx.session.clone(), fx.gateway());

    let renamed = auth.rename("anna").await.unwrap();

    assert_eq!(renamed.username, "anna");
    assert_eq!(fx.session.current_user(), Some(renamed));
    assert_eq!(
        fx.gateway.sent()[0].body,
        Some(json!({"id": 1, "username": "anna", "email": "a@b.c"}))
    );
    // Local rename is not persisted until the next login.
    assert_eq!(fx.persisted_user().unwrap().username, "ann");
}

#[tokio::test]
async fn test_failed_rename_keeps_name() {
    let fx = Fixture::signed_in(User::new(1, "ann"));
    fx.gateway
        .on("PUT /users/1", Err(BooklingError::http(400, "Error updating user.")));
    let auth = AuthUseCase::new(fx.session.clone(), fx.gateway());

    assert!(auth.rename("anna").await.is_err());
    assert_eq!(fx.session.current_user(), Some(User::new(1, "ann")));
}

#[tokio::test]
async fn test_rename_requires_session() {
    let fx = Fixture::anonymous();
    let auth = AuthUseCase::new(fx.session.clone(), fx.gateway());

    assert_eq!(
        auth.rename("anna").await.unwrap_err(),
        BooklingError::NotAuthenticated
    );
    assert!(fx.gateway.sent().is_empty());
}

#[tokio::test]
async fn test_delete_account_signs_out() {
    let fx = Fixture::signed_in(User::new(1, "ann"));
    fx.gateway
        .on("DELETE /users/1", Ok(json!("User deleted successfully")));
    let auth = AuthUseCase::new(fx.session.clone(), fx.gateway());

    auth.delete_account().await.unwrap();

    assert!(!fx.session.is_authenticated());
    assert!(fx.persisted_user().is_none());
}

#[tokio::test]
async fn test_failed_delete_keeps_session() {
    let fx = Fixture::signed_in(User::new(1, "ann"));
    fx.gateway.on("DELETE /users/1", Err(BooklingError::http(500, "")));
    let auth = AuthUseCase::new(fx.session.clone(), fx.gateway());

    assert!(auth.delete_account().await.is_err());
    assert!(fx.session.is_authenticated());
}

#[tokio::test]
async fn test_logout_makes_no_request() {
    let fx = Fixture::signed_in(User::new(1, "ann"));
    let auth = AuthUseCase::new(fx.session.clone(), fx.gateway());

    auth.logout().unwrap();

    assert!(!fx.session.is_authenticated());
    assert!(fx.persisted_user().is_none());
    assert!(fx.gateway.sent().is_empty());
}
