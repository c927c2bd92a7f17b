use serde::{Deserialize, Serialize};

use crate::error::{BooklingError, Result};

/// A review ("response") left by a user on a book.
///
/// The author and book ids are optional because some endpoints return the
/// short form with only `id` and `content`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_user_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book_id: Option<i64>,
}

/// Request body for creating or editing a review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewContent {
    pub content: String,
}

impl ReviewContent {
    /// Blank reviews are rejected before anything is sent.
    pub fn new(content: impl Into<String>) -> Result<Self> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(BooklingError::invalid_input("Review cannot be empty"));
        }
        Ok(Self { content })
    }
}
