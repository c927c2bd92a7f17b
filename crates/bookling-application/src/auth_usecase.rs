//! Authentication use case.
//!
//! Connects the users endpoints with the session context: a successful login
//! or registration is pushed into the session, account changes go to the
//! server first and only then into local state.

use std::sync::Arc;

use bookling_core::error::{BooklingError, Result};
use bookling_core::gateway::{Gateway, UsersApi};
use bookling_core::session::SessionContext;
use bookling_core::user::{Credentials, ProfilePatch, User};

use crate::notice::{Notice, SESSION_NOT_REMEMBERED};

/// A successful login or registration.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginOutcome {
    pub user: User,
    /// Result of writing the session record. The in-memory session is
    /// active either way; on failure the next start is anonymous.
    pub persisted: Result<()>,
}

impl LoginOutcome {
    pub fn is_remembered(&self) -> bool {
        self.persisted.is_ok()
    }

    /// Warning to show when the session will not survive a restart.
    pub fn warning(&self) -> Option<Notice> {
        self.persisted
            .as_ref()
            .err()
            .map(|_| Notice::warning(SESSION_NOT_REMEMBERED))
    }
}

pub struct AuthUseCase {
    session: Arc<SessionContext>,
    users: UsersApi,
}

impl AuthUseCase {
    pub fn new(session: Arc<SessionContext>, gateway: Arc<dyn Gateway>) -> Self {
        Self {
            session,
            users: UsersApi::new(gateway),
        }
    }

    pub fn session(&self) -> &Arc<SessionContext> {
        &self.session
    }

    /// Authenticates and signs the returned user in.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginOutcome> {
        credentials.validate()?;
        let user = self.users.login(credentials).await?;
        Ok(self.sign_in(user))
    }

    /// Creates an account and signs the returned user in.
    pub async fn register(&self, credentials: &Credentials) -> Result<LoginOutcome> {
        credentials.validate()?;
        let user = self.users.register(credentials).await?;
        Ok(self.sign_in(user))
    }

    /// Local sign-out. No request is made.
    pub fn logout(&self) -> Result<()> {
        self.session.logout()
    }

    /// Renames the signed-in user on the server, then in the session.
    ///
    /// The server receives the full record with the new name. Locally the
    /// change is a partial update, so it lasts until the next login.
    pub async fn rename(&self, username: &str) -> Result<User> {
        let current = self.require_user()?;
        if username.trim().is_empty() {
            return Err(BooklingError::invalid_input("Username is required"));
        }

        let patch = ProfilePatch::username(username.trim());
        let renamed = current.merged(&patch)?;
        self.users.update(&renamed).await?;
        self.session.update_user(&patch)
    }

    /// Deletes the signed-in account, then signs out.
    pub async fn delete_account(&self) -> Result<()> {
        let current = self.require_user()?;
        self.users.delete(current.id).await?;
        tracing::info!(user_id = current.id, "Account deleted");
        self.session.logout()
    }

    fn require_user(&self) -> Result<User> {
        self.session
            .current_user()
            .ok_or(BooklingError::NotAuthenticated)
    }

    fn sign_in(&self, user: User) -> LoginOutcome {
        let persisted = self.session.login(user.clone());
        LoginOutcome { user, persisted }
    }
}
