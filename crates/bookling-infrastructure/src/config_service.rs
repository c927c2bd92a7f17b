//! Configuration service implementation.
//!
//! Loads `config.toml` and resolves the API settings. The base address is
//! taken, in order, from an explicit override, the `BOOKLING_API_URL`
//! environment variable, then `[api] base_url` in the file.

use std::fs;
use std::time::Duration;

use bookling_core::config::{ApiConfig, RootConfig};
use bookling_core::error::{BooklingError, Result};

use crate::paths::BooklingPaths;

pub const API_URL_ENV: &str = "BOOKLING_API_URL";

/// Loads the root configuration and derives validated settings from it.
#[derive(Debug, Clone)]
pub struct ConfigService {
    paths: BooklingPaths,
}

impl ConfigService {
    pub fn new(paths: BooklingPaths) -> Self {
        Self { paths }
    }

    /// Reads `config.toml`. A missing file yields the defaults.
    pub fn load_root(&self) -> Result<RootConfig> {
        let path = self.paths.config_file()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(RootConfig::default());
        }

        let content = fs::read_to_string(&path)?;
        toml::from_str(&content).map_err(|e| {
            BooklingError::config(format!("Invalid config file {}: {}", path.display(), e))
        })
    }

    /// Resolves the API settings using the process environment.
    pub fn api_config(&self, root: &RootConfig, override_url: Option<&str>) -> Result<ApiConfig> {
        self.api_config_with_env(root, override_url, |name| std::env::var(name).ok())
    }

    /// Resolves the API settings with an explicit environment lookup.
    pub fn api_config_with_env<F>(
        &self,
        root: &RootConfig,
        override_url: Option<&str>,
        env: F,
    ) -> Result<ApiConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let from_env = env(API_URL_ENV).filter(|value| !value.trim().is_empty());

        let base_url = override_url
            .map(str::to_string)
            .or(from_env)
            .or_else(|| root.api.base_url.clone())
            .ok_or_else(|| {
                BooklingError::config(format!(
                    "API base URL is not configured; set {} or [api] base_url in {}",
                    API_URL_ENV,
                    self.paths
                        .config_file()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|_| "config.toml".to_string())
                ))
            })?;

        ApiConfig::new(&base_url, Duration::from_secs(root.api.timeout_secs))
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new(BooklingPaths::default())
    }
}
