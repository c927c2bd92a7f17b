use crate::user::User;

/// The current login state.
///
/// There is no partial or placeholder session: a user is either fully
/// present or absent.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    /// No user is signed in
    #[default]
    Anonymous,
    /// A user returned by a successful login or registration
    Authenticated(User),
}

impl SessionState {
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(user) => Some(user),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

impl From<Option<User>> for SessionState {
    fn from(user: Option<User>) -> Self {
        match user {
            Some(user) => Self::Authenticated(user),
            None => Self::Anonymous,
        }
    }
}
