//! Configuration model.
//!
//! `RootConfig` mirrors `config.toml`; `ApiConfig` is the validated form the
//! gateway is built from.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{BooklingError, Result};

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Contents of `config.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct RootConfig {
    #[serde(default)]
    pub api: ApiSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ApiSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct LoggingSection {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

/// Validated settings for the API gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base address without a trailing slash, e.g. `http://localhost:8080/api`
    pub base_url: String,
    pub timeout: Duration,
}

impl ApiConfig {
    /// Validates `base_url` and builds the config.
    ///
    /// The address must be absolute `http` or `https`. There is no default
    /// address: a missing or malformed one is a `Config` error.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let trimmed = base_url.trim();
        if trimmed.is_empty() {
            return Err(BooklingError::config("API base URL is empty"));
        }

        let rest = trimmed
            .strip_prefix("http://")
            .or_else(|| trimmed.strip_prefix("https://"))
            .ok_or_else(|| {
                BooklingError::config(format!(
                    "API base URL must start with http:// or https://, got '{}'",
                    trimmed
                ))
            })?;
        if rest.is_empty() || rest.starts_with('/') {
            return Err(BooklingError::config(format!(
                "API base URL has no host: '{}'",
                trimmed
            )));
        }

        let parsed = Url::parse(trimmed).map_err(|e| {
            BooklingError::config(format!("Invalid API base URL '{}': {}", trimmed, e))
        })?;
        if parsed.host_str().is_none_or(str::is_empty) {
            return Err(BooklingError::config(format!(
                "API base URL has no host: '{}'",
                trimmed
            )));
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(BooklingError::config(format!(
                "API base URL must not carry a query or fragment: '{}'",
                trimmed
            )));
        }

        Ok(Self {
            base_url: trimmed.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    /// Joins an endpoint path (starting with `/`) onto the base address.
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}
