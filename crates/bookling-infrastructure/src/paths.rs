//! Unified path management for bookling files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/bookling/          # Config directory
//! ├── config.toml              # Application configuration
//! ├── storage.toml             # Durable key-value store (session record)
//! └── logs/                    # Application logs
//!     └── bookling.log.YYYY-MM-DD
//! ```

use std::path::PathBuf;

use bookling_core::error::{BooklingError, Result};

const APP_DIR: &str = "bookling";

/// Resolves every on-disk location used by the client.
///
/// Defaults to the platform configuration directory. A base override puts
/// the whole tree under another directory, which the CLI exposes as `--home`
/// and tests use for isolation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooklingPaths {
    base: Option<PathBuf>,
}

impl BooklingPaths {
    pub fn new(base: Option<PathBuf>) -> Self {
        Self { base }
    }

    /// Returns the bookling configuration directory.
    ///
    /// With an override this is the override itself; otherwise
    /// `<platform config dir>/bookling`.
    pub fn config_dir(&self) -> Result<PathBuf> {
        match &self.base {
            Some(base) => Ok(base.clone()),
            None => dirs::config_dir()
                .map(|dir| dir.join(APP_DIR))
                .ok_or_else(|| BooklingError::config("Cannot find configuration directory")),
        }
    }

    pub fn config_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    /// Path of the durable key-value store holding the session record.
    pub fn storage_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join("storage.toml"))
    }

    pub fn logs_dir(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join("logs"))
    }
}

impl Default for BooklingPaths {
    fn default() -> Self {
        Self::new(None)
    }
}
