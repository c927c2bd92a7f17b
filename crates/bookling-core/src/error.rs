//! Error types for the Bookling client.

use thiserror::Error;

/// A shared error type for the entire Bookling client.
///
/// Remote failures keep the distinction between a request that never reached
/// the server (`Network`) and a server that answered with a non-2xx status
/// (`Http`), so views can pick status-specific messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BooklingError {
    /// Configuration error (missing or malformed API base address, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport failure: the request never reached the API boundary
    #[error("Network error: {message}")]
    Network { message: String },

    /// The API answered with a non-2xx status
    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// The operation needs a signed-in user
    #[error("Not authenticated")]
    NotAuthenticated,

    /// User input rejected before any request was made
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BooklingError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a Network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates an Http error
    pub fn http(status: u16, body: impl Into<String>) -> Self {
        Self::Http {
            status,
            body: body.into(),
        }
    }

    /// Creates a JSON Serialization error
    pub fn json(message: impl Into<String>) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: message.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates an InvalidInput error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Check if this is a transport failure
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }

    /// Check if this is a non-2xx answer from the API
    pub fn is_http(&self) -> bool {
        matches!(self, Self::Http { .. })
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    /// Returns the HTTP status for `Http` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true for remote failures a view should surface to the user.
    ///
    /// Covers `Network` and `Http`; neither is retried automatically.
    pub fn is_remote(&self) -> bool {
        self.is_network() || self.is_http()
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for BooklingError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for BooklingError {
    fn from(err: serde_json::Error) -> Self {
        Self::json(err.to_string())
    }
}

impl From<toml::de::Error> for BooklingError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for BooklingError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, BooklingError>`.
pub type Result<T> = std::result::Result<T, BooklingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_exposes_status() {
        let err = BooklingError::http(500, "boom");
        assert!(err.is_http());
        assert!(err.is_remote());
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.to_string(), "HTTP error 500: boom");
    }

    #[test]
    fn test_network_error_has_no_status() {
        let err = BooklingError::network("connection refused");
        assert!(err.is_network());
        assert!(err.is_remote());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_from_serde_json_error() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        let err: BooklingError = parse_err.into();
        match err {
            BooklingError::Serialization { format, .. } => assert_eq!(format, "JSON"),
            other => panic!("Expected Serialization error, got {other:?}"),
        }
    }

    #[test]
    fn test_local_errors_are_not_remote() {
        assert!(!BooklingError::NotAuthenticated.is_remote());
        assert!(!BooklingError::config("missing").is_remote());
    }
}
