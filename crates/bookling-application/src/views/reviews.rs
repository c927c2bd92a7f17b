use std::sync::Arc;

use bookling_core::BooklingError;
use bookling_core::catalog::{Book, Review, ReviewContent};
use bookling_core::error::Result;
use bookling_core::gateway::{Gateway, ReviewsApi};
use bookling_core::session::SessionContext;

/// Reviews of one book.
pub struct ReviewsView {
    api: ReviewsApi,
    session: Arc<SessionContext>,
    book: Option<Book>,
    reviews: Vec<Review>,
}

impl ReviewsView {
    pub fn new(session: Arc<SessionContext>, gateway: Arc<dyn Gateway>) -> Self {
        Self {
            api: ReviewsApi::new(gateway),
            session,
            book: None,
            reviews: Vec::new(),
        }
    }

    pub fn book(&self) -> Option<&Book> {
        self.book.as_ref()
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// Selects `book` and loads its reviews.
    pub async fn open(&mut self, book: Book) -> Result<()> {
        let reviews = self.api.by_book(book.id).await?;
        self.book = Some(book);
        self.reviews = reviews;
        Ok(())
    }

    pub fn close(&mut self) {
        self.book = None;
        self.reviews.clear();
    }

    /// Posts a review on the open book as the signed-in user.
    pub async fn add(&mut self, text: &str) -> Result<()> {
        let book_id = self.open_book_id()?;
        let content = ReviewContent::new(text)?;
        let user = self
            .session
            .current_user()
            .ok_or(BooklingError::NotAuthenticated)?;

        self.api.create(user.id, book_id, &content).await?;

        match self.api.by_book(book_id).await {
            Ok(reviews) => self.reviews = reviews,
            Err(e) => tracing::warn!(book_id, error = %e, "Reviews not reloaded"),
        }
        Ok(())
    }

    pub async fn edit(&mut self, review_id: i64, text: &str) -> Result<()> {
        let content = ReviewContent::new(text)?;
        self.api.update(review_id, &content).await?;
        if let Some(review) = self.reviews.iter_mut().find(|r| r.id == review_id) {
            review.content = content.content;
        }
        Ok(())
    }

    pub async fn delete(&mut self, review_id: i64) -> Result<()> {
        self.api.delete(review_id).await?;
        self.reviews.retain(|r| r.id != review_id);
        Ok(())
    }

    pub async fn by_user(&self, user_id: i64) -> Result<Vec<Review>> {
        self.api.by_user(user_id).await
    }

    fn open_book_id(&self) -> Result<i64> {
        self.book
            .as_ref()
            .map(|b| b.id)
            .ok_or_else(|| BooklingError::invalid_input("No book is open"))
    }
}
