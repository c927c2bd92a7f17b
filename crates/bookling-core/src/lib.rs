pub mod catalog;
pub mod config;
pub mod error;
pub mod gateway;
pub mod session;
pub mod user;

// Re-export common error type
pub use error::BooklingError;
