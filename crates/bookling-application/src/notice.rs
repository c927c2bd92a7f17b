//! User-facing notices.
//!
//! Views report outcomes as a [`Notice`]; the front-end decides how to show
//! it. Message selection for remote failures lives here so every screen words
//! the same failure the same way.

use std::fmt;

use bookling_core::BooklingError;
use serde_json::Value;

pub const CONNECTION_FAILED: &str = "Could not connect to the server.";
pub const INVALID_CREDENTIALS: &str = "Invalid login credentials.";
pub const REGISTRATION_FAILED: &str = "Registration failed.";
pub const NOT_SIGNED_IN: &str = "You are not signed in.";
pub const SESSION_NOT_REMEMBERED: &str =
    "The session could not be saved; you will have to sign in again next time.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }

    /// Error notice for a failed action, e.g. "Could not add book: ...".
    pub fn failed(action: &str, error: &BooklingError) -> Self {
        Self::error(format!("Could not {}: {}", action, describe_error(error)))
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Short human wording for any error.
pub fn describe_error(error: &BooklingError) -> String {
    match error {
        BooklingError::Network { .. } => CONNECTION_FAILED.to_string(),
        BooklingError::Http { status, body } => match server_message(body) {
            Some(message) => message,
            None => format!("the server answered with status {}", status),
        },
        BooklingError::NotAuthenticated => NOT_SIGNED_IN.to_string(),
        BooklingError::InvalidInput(message) => message.clone(),
        other => other.to_string(),
    }
}

/// Wording for a failed login.
pub fn login_error(error: &BooklingError) -> Notice {
    match error {
        BooklingError::Http {
            status: 400 | 401 | 403 | 404,
            ..
        } => Notice::error(INVALID_CREDENTIALS),
        BooklingError::Network { .. } => Notice::error(CONNECTION_FAILED),
        other => Notice::error(describe_error(other)),
    }
}

/// Wording for a failed registration: the server's own message if it sent one.
pub fn register_error(error: &BooklingError) -> Notice {
    match error {
        BooklingError::Http { body, .. } => {
            Notice::error(server_message(body).unwrap_or_else(|| REGISTRATION_FAILED.to_string()))
        }
        BooklingError::Network { .. } => Notice::error(CONNECTION_FAILED),
        other => Notice::error(describe_error(other)),
    }
}

/// Extracts a readable message from an error body.
///
/// Accepts `{"message": "..."}` or a short plain-text body.
fn server_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(map)) => map
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.trim().is_empty())
            .map(str::to_string),
        Ok(Value::String(text)) => Some(text),
        Ok(_) => None,
        Err(_) if trimmed.len() <= 200 && !trimmed.starts_with('<') => Some(trimmed.to_string()),
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_error_wording() {
        for status in [400, 401, 403, 404] {
            assert_eq!(
                login_error(&BooklingError::http(status, "")).message,
                INVALID_CREDENTIALS
            );
        }
        assert_eq!(
            login_error(&BooklingError::network("refused")).message,
            CONNECTION_FAILED
        );
        assert!(login_error(&BooklingError::http(500, "")).message.contains("500"));
    }

    #[test]
    fn test_register_error_prefers_server_message() {
        let err = BooklingError::http(400, r#"{"message":"Username already taken"}"#);
        assert_eq!(register_error(&err).message, "Username already taken");

        let err = BooklingError::http(400, "User with this name exists");
        assert_eq!(register_error(&err).message, "User with this name exists");

        let err = BooklingError::http(400, r#"{"error":"Bad Request"}"#);
        assert_eq!(register_error(&err).message, REGISTRATION_FAILED);

        let err = BooklingError::http(502, "<html><body>Bad gateway</body></html>");
        assert_eq!(register_error(&err).message, REGISTRATION_FAILED);
    }

    #[test]
    fn test_failed_notice() {
        let notice = Notice::failed("add book", &BooklingError::http(500, ""));
        assert!(notice.is_error());
        assert_eq!(
            notice.message,
            "Could not add book: the server answered with status 500"
        );
    }
}
