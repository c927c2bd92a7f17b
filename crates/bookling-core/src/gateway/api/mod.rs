//! Typed endpoint wrappers over a [`Gateway`](super::Gateway).
//!
//! Each wrapper owns the paths of one backend resource and checks response
//! shapes at the boundary. A body that does not decode becomes a
//! `Serialization` error naming the endpoint.

mod books;
mod categories;
mod reviews;
mod users;

pub use books::BooksApi;
pub use categories::CategoriesApi;
pub use reviews::ReviewsApi;
pub use users::UsersApi;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{BooklingError, Result};

use super::ApiRequest;

fn decode<T: DeserializeOwned>(request: &ApiRequest, body: Value) -> Result<T> {
    serde_json::from_value(body).map_err(|e| {
        BooklingError::json(format!(
            "Unexpected response from {}: {}",
            request.endpoint(),
            e
        ))
    })
}

/// Turns a mutation response into a short acknowledgement text.
///
/// The backend answers most mutations with a plain sentence.
fn acknowledgement(body: Value) -> String {
    match body {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Reads a server-assigned id out of a creation response, if it has one.
fn created_id(body: &Value) -> Option<i64> {
    match body {
        Value::Number(n) => n.as_i64(),
        Value::String(text) => text.trim().parse().ok(),
        Value::Object(map) => map.get("id").and_then(Value::as_i64),
        _ => None,
    }
}
