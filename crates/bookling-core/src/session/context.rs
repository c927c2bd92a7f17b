//! Session context: the single in-process holder of the login state.

use std::sync::Arc;

use tokio::sync::watch;

use super::state::SessionState;
use super::store::SessionStore;
use crate::error::{BooklingError, Result};
use crate::user::{ProfilePatch, User};

/// Owns the current [`SessionState`] and mirrors it into a [`SessionStore`].
///
/// Transitions go through the watch channel's write lock, so a login, logout
/// or partial update is serialized with every other transition and visible to
/// all subscribers as soon as the call returns.
pub struct SessionContext {
    state: watch::Sender<SessionState>,
    store: Arc<dyn SessionStore>,
}

impl SessionContext {
    /// Creates the context, hydrating the initial state from `store`.
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        let initial = SessionState::from(store.load());
        match initial.user() {
            Some(user) => tracing::info!(user_id = user.id, "Restored session"),
            None => tracing::debug!("No stored session"),
        }

        let (state, _) = watch::channel(initial);
        Self { state, store }
    }

    /// Subscribes to state transitions.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Returns a snapshot of the current state.
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn current_user(&self) -> Option<User> {
        self.state.borrow().user().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    /// Signs `user` in and persists the record.
    ///
    /// The in-memory transition always happens. An error only means the
    /// record could not be written to the store.
    pub fn login(&self, user: User) -> Result<()> {
        let mut persisted = Ok(());
        self.state.send_modify(|state| {
            persisted = self.store.save(&user);
            tracing::info!(user_id = user.id, username = %user.username, "Signed in");
            *state = SessionState::Authenticated(user);
        });

        if let Err(e) = &persisted {
            tracing::warn!(error = %e, "Session record was not persisted");
        }
        persisted
    }

    /// Signs out and removes the persisted record.
    ///
    /// Same error convention as [`login`](Self::login).
    pub fn logout(&self) -> Result<()> {
        let mut cleared = Ok(());
        self.state.send_modify(|state| {
            cleared = self.store.clear();
            if let Some(user) = state.user() {
                tracing::info!(user_id = user.id, "Signed out");
            }
            *state = SessionState::Anonymous;
        });

        if let Err(e) = &cleared {
            tracing::warn!(error = %e, "Session record was not removed");
        }
        cleared
    }

    /// Merges `patch` into the signed-in user and returns the result.
    ///
    /// The merged record is kept in memory only: the persisted record keeps
    /// the value from the last login until the next one.
    pub fn update_user(&self, patch: &ProfilePatch) -> Result<User> {
        let mut outcome = Err(BooklingError::NotAuthenticated);
        self.state.send_if_modified(|state| {
            let SessionState::Authenticated(current) = state else {
                return false;
            };
            match current.merged(patch) {
                Ok(merged) => {
                    *current = merged.clone();
                    outcome = Ok(merged);
                    true
                }
                Err(e) => {
                    outcome = Err(e);
                    false
                }
            }
        });

        if let Ok(user) = &outcome {
            tracing::debug!(user_id = user.id, "Updated session user");
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{
        DurableStore, MemoryDurableStore, PersistentSessionStore, SESSION_KEY,
    };

    fn context_over(storage: &MemoryDurableStore) -> SessionContext {
        SessionContext::new(Arc::new(PersistentSessionStore::new(Arc::new(
            storage.clone(),
        ))))
    }

    fn fresh_load(storage: &MemoryDurableStore) -> Option<User> {
        PersistentSessionStore::new(Arc::new(storage.clone())).load()
    }

    #[test]
    fn test_starts_anonymous_on_empty_store() {
        let ctx = context_over(&MemoryDurableStore::new());
        assert_eq!(ctx.state(), SessionState::Anonymous);
        assert!(ctx.current_user().is_none());
    }

    #[test]
    fn test_hydrates_from_store() {
        let storage = MemoryDurableStore::new();
        context_over(&storage).login(User::new(4, "dan")).unwrap();

        let ctx = context_over(&storage);
        assert!(ctx.is_authenticated());
        assert_eq!(ctx.current_user(), Some(User::new(4, "dan")));
    }

    #[test]
    fn test_corrupted_record_starts_anonymous() {
        let storage = MemoryDurableStore::new();
        storage.set_item(SESSION_KEY, "garbage").unwrap();

        let ctx = context_over(&storage);
        assert!(!ctx.is_authenticated());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_login_is_visible_to_fresh_store() {
        let storage = MemoryDurableStore::new();
        let user = User::new(1, "ann").with_field("email", "ann@example.com");

        context_over(&storage).login(user.clone()).unwrap();
        assert_eq!(fresh_load(&storage), Some(user));
    }

    #[test]
    fn test_login_rename_logout_scenario() {
        let storage = MemoryDurableStore::new();
        let ctx = context_over(&storage);

        ctx.login(User::new(1, "ann")).unwrap();
        assert_eq!(ctx.state(), SessionState::Authenticated(User::new(1, "ann")));

        let updated = ctx.update_user(&ProfilePatch::username("anna")).unwrap();
        assert_eq!(updated, User::new(1, "anna"));
        assert_eq!(ctx.current_user(), Some(User::new(1, "anna")));

        ctx.logout().unwrap();
        assert_eq!(ctx.state(), SessionState::Anonymous);
        assert!(fresh_load(&storage).is_none());
    }

    #[test]
    fn test_update_user_is_not_persisted() {
        let storage = MemoryDurableStore::new();
        let ctx = context_over(&storage);
        ctx.login(User::new(1, "ann")).unwrap();

        ctx.update_user(&ProfilePatch::username("anna")).unwrap();

        assert_eq!(fresh_load(&storage), Some(User::new(1, "ann")));
    }

    #[test]
    fn test_update_user_while_anonymous_fails() {
        let storage = MemoryDurableStore::new();
        let ctx = context_over(&storage);

        let result = ctx.update_user(&ProfilePatch::username("ghost"));
        assert_eq!(result, Err(BooklingError::NotAuthenticated));
        assert_eq!(ctx.state(), SessionState::Anonymous);
    }

    #[test]
    fn test_invalid_update_leaves_session_untouched() {
        let ctx = context_over(&MemoryDurableStore::new());
        ctx.login(User::new(1, "ann")).unwrap();

        let result = ctx.update_user(&ProfilePatch::new().set("username", 42));
        assert!(matches!(result, Err(BooklingError::InvalidInput(_))));
        assert_eq!(ctx.current_user(), Some(User::new(1, "ann")));
    }

    #[test]
    fn test_logout_when_anonymous_is_harmless() {
        let storage = MemoryDurableStore::new();
        let ctx = context_over(&storage);
        ctx.logout().unwrap();
        ctx.logout().unwrap();
        assert!(fresh_load(&storage).is_none());
    }

    #[test]
    fn test_subscribers_see_transitions() {
        let ctx = context_over(&MemoryDurableStore::new());
        let mut rx = ctx.subscribe();
        assert!(!rx.has_changed().unwrap());

        ctx.login(User::new(1, "ann")).unwrap();
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_authenticated());

        ctx.logout().unwrap();
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), SessionState::Anonymous);
    }

    #[test]
    fn test_failed_update_does_not_notify() {
        let ctx = context_over(&MemoryDurableStore::new());
        let rx = ctx.subscribe();

        let _ = ctx.update_user(&ProfilePatch::username("ghost"));
        assert!(!rx.has_changed().unwrap());
    }

    struct BrokenStore;

    impl SessionStore for BrokenStore {
        fn save(&self, _user: &User) -> Result<()> {
            Err(BooklingError::io("read-only"))
        }

        fn load(&self) -> Option<User> {
            None
        }

        fn clear(&self) -> Result<()> {
            Err(BooklingError::io("read-only"))
        }
    }

    #[test]
    fn test_transitions_happen_even_when_store_fails() {
        let ctx = SessionContext::new(Arc::new(BrokenStore));

        assert!(ctx.login(User::new(1, "ann")).is_err());
        assert!(ctx.is_authenticated());

        assert!(ctx.logout().is_err());
        assert!(!ctx.is_authenticated());
    }
}
