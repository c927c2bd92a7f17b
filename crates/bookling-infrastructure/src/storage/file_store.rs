//! File-backed durable key-value store.

use std::collections::BTreeMap;
use std::path::PathBuf;

use bookling_core::error::{BooklingError, Result};
use bookling_core::session::DurableStore;

use super::atomic_toml::AtomicTomlFile;
use crate::paths::BooklingPaths;

type Items = BTreeMap<String, String>;

/// [`DurableStore`] keeping string values in a single TOML table.
///
/// ```toml
/// user = '{"id":1,"username":"ann"}'
/// ```
///
/// A file that no longer parses as a table of strings is treated as empty
/// and replaced by the next write.
pub struct FileDurableStore {
    file: AtomicTomlFile<Items>,
}

impl FileDurableStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: AtomicTomlFile::new(path),
        }
    }

    /// Opens the store at its default location.
    pub fn from_paths(paths: &BooklingPaths) -> Result<Self> {
        Ok(Self::new(paths.storage_file()?))
    }

    fn read_items(&self) -> Result<Items> {
        match self.file.load() {
            Ok(items) => Ok(items.unwrap_or_default()),
            Err(e) if e.is_serialization() => {
                tracing::warn!(
                    path = %self.file.path().display(),
                    error = %e,
                    "Storage file is unreadable, treating it as empty"
                );
                Ok(Items::new())
            }
            Err(e) => Err(e),
        }
    }

    fn write<F>(&self, f: F) -> Result<()>
    where
        F: Fn(&mut Items),
    {
        let result = self.file.update(Items::new(), |items| {
            f(items);
            Ok(())
        });

        match result {
            Err(e) if e.is_serialization() => {
                tracing::warn!(
                    path = %self.file.path().display(),
                    error = %e,
                    "Replacing unreadable storage file"
                );
                let mut items = Items::new();
                f(&mut items);
                self.file.save(&items)
            }
            other => other,
        }
    }
}

impl DurableStore for FileDurableStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_items()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.write(|items| {
            items.insert(key.to_string(), value.to_string());
        })
        .map_err(|e| annotate(e, key))
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        if !self.file.path().exists() {
            return Ok(());
        }
        self.write(|items| {
            items.remove(key);
        })
        .map_err(|e| annotate(e, key))
    }
}

fn annotate(error: BooklingError, key: &str) -> BooklingError {
    match error {
        BooklingError::Io { message } => {
            BooklingError::io(format!("storage key '{}': {}", key, message))
        }
        other => other,
    }
}
