use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::Category;
use crate::error::{BooklingError, Result};

/// A book in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub categories: BTreeSet<Category>,
}

impl Book {
    pub fn new(id: i64, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            categories: BTreeSet::new(),
        }
    }

    /// Returns a copy with a new title and author, keeping id and categories.
    pub fn edited(&self, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: self.id,
            title: title.into(),
            author: author.into(),
            categories: self.categories.clone(),
        }
    }

    pub fn has_category(&self, category_id: i64) -> bool {
        self.categories.iter().any(|c| c.id == category_id)
    }
}

/// Request body for `POST /books`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBook {
    pub title: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
}

impl NewBook {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            category_id: None,
        }
    }

    pub fn with_category(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(BooklingError::invalid_input("Book title is required"));
        }
        if self.author.trim().is_empty() {
            return Err(BooklingError::invalid_input("Book author is required"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_book_without_categories_field() {
        let book: Book =
            serde_json::from_value(json!({"id": 1, "title": "Dune", "author": "Herbert"})).unwrap();
        assert!(book.categories.is_empty());
    }

    #[test]
    fn test_book_categories_are_a_set() {
        let book: Book = serde_json::from_value(json!({
            "id": 1,
            "title": "Dune",
            "author": "Herbert",
            "categories": [{"id": 2, "name": "Sci-fi"}, {"id": 2, "name": "Sci-fi"}]
        }))
        .unwrap();
        assert_eq!(book.categories.len(), 1);
        assert!(book.has_category(2));
    }

    #[test]
    fn test_new_book_serializes_camel_case() {
        let body = serde_json::to_value(NewBook::new("Dune", "Herbert").with_category(4)).unwrap();
        assert_eq!(body, json!({"title": "Dune", "author": "Herbert", "categoryId": 4}));

        let body = serde_json::to_value(NewBook::new("Dune", "Herbert")).unwrap();
        assert_eq!(body, json!({"title": "Dune", "author": "Herbert"}));
    }

    #[test]
    fn test_edited_keeps_categories() {
        let mut book = Book::new(1, "Dune", "Herbert");
        book.categories.insert(Category::new(2, "Sci-fi"));
        let edited = book.edited("Dune Messiah", "F. Herbert");
        assert_eq!(edited.id, 1);
        assert_eq!(edited.title, "Dune Messiah");
        assert!(edited.has_category(2));
    }
}
