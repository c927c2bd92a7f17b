//! API gateway abstraction.
//!
//! Every outbound call goes through a [`Gateway`]. The trait is the seam
//! between views and the HTTP implementation in the infrastructure crate;
//! typed wrappers in [`api`] give each backend endpoint a checked signature.

pub mod api;
mod observer;
mod request;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

pub use api::{BooksApi, CategoriesApi, ReviewsApi, UsersApi};
pub use observer::{LoggingObserver, ResponseObserver};
pub use request::{ApiRequest, Method};

/// The single outbound channel to the REST backend.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Sends `request` and returns the decoded response body.
    ///
    /// Successful JSON bodies are parsed, plain-text bodies become a JSON
    /// string and empty bodies `null`. Failures are `Network` or `Http`.
    async fn send(&self, request: ApiRequest) -> Result<Value>;
}
