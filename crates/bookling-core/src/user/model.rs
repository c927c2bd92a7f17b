//! User domain model.
//!
//! Represents the user record returned by login/registration and kept as the
//! local session.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{BooklingError, Result};

/// A user record as returned by the login and registration endpoints.
///
/// Only `id` and `username` are required. Every other field the server sends
/// is kept in `profile` and written back unchanged, so the record round-trips
/// through the session store without losing data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned identifier, used in path segments
    pub id: i64,
    /// Login name
    pub username: String,
    /// Additional profile fields merged in over time
    #[serde(flatten)]
    pub profile: Map<String, Value>,
}

impl User {
    /// Creates a user record with no additional profile fields.
    pub fn new(id: i64, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            profile: Map::new(),
        }
    }

    /// Adds a profile field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.profile.insert(key.into(), value.into());
        self
    }

    /// Returns a profile field by name.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.profile.get(key)
    }

    /// Returns a copy of this user with `patch` merged in.
    ///
    /// Shallow merge: fields in the patch overwrite same-named fields, all
    /// others are kept. The result must still be a valid `User` (`id` an
    /// integer, `username` a string), otherwise the merge fails and `self`
    /// is left as it was.
    pub fn merged(&self, patch: &ProfilePatch) -> Result<User> {
        let mut fields = self.profile.clone();
        fields.insert("id".to_string(), Value::from(self.id));
        fields.insert("username".to_string(), Value::from(self.username.clone()));
        for (key, value) in patch.fields() {
            fields.insert(key.clone(), value.clone());
        }

        serde_json::from_value(Value::Object(fields))
            .map_err(|e| BooklingError::invalid_input(format!("Invalid profile update: {}", e)))
    }
}

/// A partial update of the user record.
///
/// Holds an arbitrary JSON object; see [`User::merged`] for merge rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfilePatch(Map<String, Value>);

impl ProfilePatch {
    /// Creates an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field in the patch.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Shorthand for a patch that only changes the username.
    pub fn username(username: impl Into<String>) -> Self {
        Self::new().set("username", username.into())
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for ProfilePatch {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Login/registration request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Rejects blank fields before anything is sent.
    pub fn validate(&self) -> Result<()> {
        if self.username.trim().is_empty() {
            return Err(BooklingError::invalid_input("Username is required"));
        }
        if self.password.is_empty() {
            return Err(BooklingError::invalid_input("Password is required"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_keeps_extra_fields() {
        let user: User =
            serde_json::from_value(json!({"id": 7, "username": "ann", "email": "a@b.c"})).unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.username, "ann");
        assert_eq!(user.field("email"), Some(&json!("a@b.c")));

        let back = serde_json::to_value(&user).unwrap();
        assert_eq!(back, json!({"id": 7, "username": "ann", "email": "a@b.c"}));
    }

    #[test]
    fn test_deserialize_rejects_missing_id() {
        let result = serde_json::from_value::<User>(json!({"username": "ann"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_merge_overwrites_and_retains() {
        let user = User::new(1, "ann").with_field("bio", "reader");
        let merged = user.merged(&ProfilePatch::username("anna")).unwrap();

        assert_eq!(merged.id, 1);
        assert_eq!(merged.username, "anna");
        assert_eq!(merged.field("bio"), Some(&json!("reader")));
    }

    #[test]
    fn test_merge_adds_new_fields() {
        let user = User::new(1, "ann");
        let merged = user
            .merged(&ProfilePatch::new().set("city", "Minsk"))
            .unwrap();
        assert_eq!(merged.username, "ann");
        assert_eq!(merged.field("city"), Some(&json!("Minsk")));
    }

    #[test]
    fn test_merge_rejects_invalid_shape() {
        let user = User::new(1, "ann");
        let result = user.merged(&ProfilePatch::new().set("id", "not-a-number"));
        assert!(matches!(result, Err(BooklingError::InvalidInput(_))));
    }

    #[test]
    fn test_credentials_validation() {
        assert!(Credentials::new("ann", "secret").validate().is_ok());
        assert!(Credentials::new("  ", "secret").validate().is_err());
        assert!(Credentials::new("ann", "").validate().is_err());
    }
}
