//! Storage layer for atomic file operations.

mod atomic_toml;
mod file_store;

pub use atomic_toml::AtomicTomlFile;
pub use file_store::FileDurableStore;
