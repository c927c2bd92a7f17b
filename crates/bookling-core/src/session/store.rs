//! Persistent session store.
//!
//! The session record is the JSON encoding of [`User`] kept under a fixed key
//! in a key-value [`DurableStore`]. Loading fails open: a record that does
//! not decode is purged and reported as absent.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::Result;
use crate::user::User;

/// Fixed key of the persisted session record.
pub const SESSION_KEY: &str = "user";

/// Key-value storage that survives process restarts.
///
/// Values are opaque strings, mirroring browser local storage.
pub trait DurableStore: Send + Sync {
    /// Reads the value stored under `key`, if any.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;
}

/// Storage of the current user record.
pub trait SessionStore: Send + Sync {
    /// Serializes `user` and writes it under the fixed key.
    fn save(&self, user: &User) -> Result<()>;

    /// Reads the persisted user.
    ///
    /// Never fails: an undecodable record is removed and `None` returned.
    fn load(&self) -> Option<User>;

    /// Removes the persisted user. Idempotent.
    fn clear(&self) -> Result<()>;
}

/// [`SessionStore`] backed by any [`DurableStore`].
#[derive(Clone)]
pub struct PersistentSessionStore {
    storage: Arc<dyn DurableStore>,
    key: String,
}

impl PersistentSessionStore {
    /// Creates a store using the default [`SESSION_KEY`].
    pub fn new(storage: Arc<dyn DurableStore>) -> Self {
        Self::with_key(storage, SESSION_KEY)
    }

    /// Creates a store using a custom key (for testing).
    pub fn with_key(storage: Arc<dyn DurableStore>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    fn purge_corrupted(&self, reason: &str) {
        tracing::warn!(
            key = %self.key,
            reason = %reason,
            "Discarding corrupted session record"
        );
        if let Err(e) = self.storage.remove_item(&self.key) {
            tracing::warn!(key = %self.key, error = %e, "Failed to remove corrupted session record");
        }
    }
}

impl SessionStore for PersistentSessionStore {
    fn save(&self, user: &User) -> Result<()> {
        let encoded = serde_json::to_string(user)?;
        self.storage.set_item(&self.key, &encoded)
    }

    fn load(&self) -> Option<User> {
        let raw = match self.storage.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to read session record");
                return None;
            }
        };

        match serde_json::from_str::<User>(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                self.purge_corrupted(&e.to_string());
                None
            }
        }
    }

    fn clear(&self) -> Result<()> {
        self.storage.remove_item(&self.key)
    }
}

/// In-process [`DurableStore`].
///
/// Survives as long as the value itself; clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryDurableStore {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryDurableStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DurableStore for MemoryDurableStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let mut items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        items.remove(key);
        Ok(())
    }
}
