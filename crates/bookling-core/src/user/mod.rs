//! User domain module.
//!
//! This module contains the signed-in user record and the payloads used to
//! authenticate and edit it.
//!
//! # Module Structure
//!
//! - `model`: `User` record, `ProfilePatch` merge input, `Credentials`
//!
//! # Usage
//!
//! ```ignore
//! use bookling_core::user::{User, ProfilePatch};
//! ```

mod model;

// Re-export public API
pub use model::{Credentials, ProfilePatch, User};
