use std::sync::Arc;

use bookling_core::BooklingError;
use bookling_core::catalog::{Book, Category, Review};
use bookling_core::error::Result;
use bookling_core::gateway::{BooksApi, CategoriesApi, Gateway, ReviewsApi};
use bookling_core::session::SessionContext;
use bookling_core::user::User;

/// A profile section loaded independently of the others.
pub type Section<T> = std::result::Result<Vec<T>, BooklingError>;

/// The signed-in user's profile page.
pub struct ProfileView {
    session: Arc<SessionContext>,
    categories: CategoriesApi,
    reviews: ReviewsApi,
    books: BooksApi,
}

/// Everything the profile page shows.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub user: User,
    pub favorites: Section<Category>,
    pub reviews: Section<Review>,
}

impl ProfileView {
    pub fn new(session: Arc<SessionContext>, gateway: Arc<dyn Gateway>) -> Self {
        Self {
            session,
            categories: CategoriesApi::new(gateway.clone()),
            reviews: ReviewsApi::new(gateway.clone()),
            books: BooksApi::new(gateway),
        }
    }

    /// Loads the profile. Fails only when nobody is signed in; each section
    /// carries its own result.
    pub async fn load(&self) -> Result<Profile> {
        let user = self
            .session
            .current_user()
            .ok_or(BooklingError::NotAuthenticated)?;

        let (favorites, reviews) = tokio::join!(
            self.categories.of_user(user.id),
            self.reviews.by_user(user.id)
        );

        Ok(Profile {
            user,
            favorites,
            reviews,
        })
    }

    pub async fn books_in(&self, category_id: i64) -> Result<Vec<Book>> {
        self.books.by_category(category_id).await
    }
}
