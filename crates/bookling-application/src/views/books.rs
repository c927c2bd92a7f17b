use std::sync::Arc;

use bookling_core::BooklingError;
use bookling_core::catalog::{Book, NewBook};
use bookling_core::error::Result;
use bookling_core::gateway::{BooksApi, Gateway};

use crate::notice::{Notice, describe_error};

/// Result of adding a book.
///
/// Creating the book and attaching its category are two requests; the
/// second may fail after the first succeeded.
#[derive(Debug, Clone, PartialEq)]
pub enum AddBookOutcome {
    /// Book created and category attached
    CategoryAttached { book_id: i64 },
    /// Book created, attaching the category failed
    CategoryNotAttached { book_id: i64, error: BooklingError },
    /// Book created without a category, either because none was chosen or
    /// because the server did not report the new id
    CreatedWithoutCategory { book_id: Option<i64> },
}

impl AddBookOutcome {
    pub fn book_id(&self) -> Option<i64> {
        match self {
            Self::CategoryAttached { book_id } | Self::CategoryNotAttached { book_id, .. } => {
                Some(*book_id)
            }
            Self::CreatedWithoutCategory { book_id } => *book_id,
        }
    }

    pub fn notice(&self) -> Notice {
        match self {
            Self::CategoryAttached { .. } => Notice::success("Book and category added."),
            Self::CategoryNotAttached { error, .. } => Notice::success(format!(
                "Book added, but the category could not be attached: {}",
                describe_error(error)
            )),
            Self::CreatedWithoutCategory { .. } => {
                Notice::success("Book added without a category.")
            }
        }
    }
}

/// The book list screen.
pub struct BooksView {
    api: BooksApi,
    books: Vec<Book>,
}

impl BooksView {
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        Self {
            api: BooksApi::new(gateway),
            books: Vec::new(),
        }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn find(&self, book_id: i64) -> Option<&Book> {
        self.books.iter().find(|b| b.id == book_id)
    }

    /// Reloads the list. On failure the current list is kept.
    pub async fn refresh(&mut self) -> Result<()> {
        self.books = self.api.list().await?;
        Ok(())
    }

    /// Creates a book, then attaches the chosen category when possible.
    pub async fn add(&mut self, book: NewBook) -> Result<AddBookOutcome> {
        book.validate()?;
        let created = self.api.create(&book).await?;

        let outcome = match (created, book.category_id) {
            (Some(book_id), Some(category_id)) => {
                match self.api.attach_category(book_id, category_id).await {
                    Ok(_) => AddBookOutcome::CategoryAttached { book_id },
                    Err(error) => {
                        tracing::warn!(book_id, category_id, error = %error, "Category not attached");
                        AddBookOutcome::CategoryNotAttached { book_id, error }
                    }
                }
            }
            (book_id, _) => AddBookOutcome::CreatedWithoutCategory { book_id },
        };

        if let Some(book_id) = outcome.book_id() {
            self.books
                .insert(0, Book::new(book_id, book.title, book.author));
        }
        Ok(outcome)
    }

    /// Changes title and author of a listed book.
    pub async fn update(&mut self, book_id: i64, title: &str, author: &str) -> Result<Book> {
        let current = self
            .find(book_id)
            .ok_or_else(|| BooklingError::invalid_input(format!("Book {} is not listed", book_id)))?;
        let edited = current.edited(title, author);
        NewBook::new(&edited.title, &edited.author).validate()?;

        self.api.update(&edited).await?;
        if let Some(slot) = self.books.iter_mut().find(|b| b.id == book_id) {
            *slot = edited.clone();
        }
        Ok(edited)
    }

    pub async fn delete(&mut self, book_id: i64) -> Result<()> {
        self.api.delete(book_id).await?;
        self.books.retain(|b| b.id != book_id);
        Ok(())
    }

    /// Removes a category from a book. The listed copy loses the category
    /// only once the server confirmed.
    pub async fn detach_category(&mut self, book_id: i64, category_id: i64) -> Result<()> {
        self.api.detach_category(book_id, category_id).await?;
        if let Some(book) = self.books.iter_mut().find(|b| b.id == book_id) {
            book.categories.retain(|c| c.id != category_id);
        }
        Ok(())
    }

    pub async fn books_in_category(&self, category_id: i64) -> Result<Vec<Book>> {
        self.api.by_category(category_id).await
    }
}
