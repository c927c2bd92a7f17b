use std::collections::BTreeSet;
use std::sync::Arc;

use bookling_core::BooklingError;
use bookling_core::catalog::{Book, Category, CategoryName};
use bookling_core::error::Result;
use bookling_core::gateway::{BooksApi, CategoriesApi, Gateway, UsersApi};
use bookling_core::session::SessionContext;

/// The category list screen, with the signed-in user's favorites.
pub struct CategoriesView {
    categories: CategoriesApi,
    books: BooksApi,
    users: UsersApi,
    session: Arc<SessionContext>,
    list: Vec<Category>,
    favorites: BTreeSet<i64>,
}

impl CategoriesView {
    pub fn new(session: Arc<SessionContext>, gateway: Arc<dyn Gateway>) -> Self {
        Self {
            categories: CategoriesApi::new(gateway.clone()),
            books: BooksApi::new(gateway.clone()),
            users: UsersApi::new(gateway),
            session,
            list: Vec::new(),
            favorites: BTreeSet::new(),
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.list
    }

    pub fn is_favorite(&self, category_id: i64) -> bool {
        self.favorites.contains(&category_id)
    }

    /// Reloads categories and, when signed in, the user's favorites.
    ///
    /// Favorites are best effort: a failure is logged and the previous set
    /// kept.
    pub async fn refresh(&mut self) -> Result<()> {
        self.list = self.categories.list().await?;

        match self.session.current_user() {
            Some(user) => match self.categories.of_user(user.id).await {
                Ok(favorites) => self.favorites = favorites.iter().map(|c| c.id).collect(),
                Err(e) => tracing::warn!(user_id = user.id, error = %e, "Favorites not loaded"),
            },
            None => self.favorites.clear(),
        }
        Ok(())
    }

    pub async fn create(&mut self, name: &str) -> Result<()> {
        let name = CategoryName::new(name)?;
        self.categories.create(&name).await?;
        self.reload_after_change().await;
        Ok(())
    }

    pub async fn rename(&mut self, category_id: i64, name: &str) -> Result<()> {
        let name = CategoryName::new(name)?;
        self.categories.rename(category_id, &name).await?;
        if let Some(category) = self.list.iter_mut().find(|c| c.id == category_id) {
            category.name = name.name;
        }
        Ok(())
    }

    pub async fn delete(&mut self, category_id: i64) -> Result<()> {
        self.categories.delete(category_id).await?;
        self.list.retain(|c| c.id != category_id);
        self.favorites.remove(&category_id);
        Ok(())
    }

    /// Adds or removes a favorite. Returns whether it is a favorite now.
    pub async fn toggle_favorite(&mut self, category_id: i64) -> Result<bool> {
        let user = self
            .session
            .current_user()
            .ok_or(BooklingError::NotAuthenticated)?;

        if self.is_favorite(category_id) {
            self.users.remove_favorite(user.id, category_id).await?;
            self.favorites.remove(&category_id);
            Ok(false)
        } else {
            self.users.add_favorite(user.id, category_id).await?;
            self.favorites.insert(category_id);
            Ok(true)
        }
    }

    pub async fn books_in(&self, category_id: i64) -> Result<Vec<Book>> {
        self.books.by_category(category_id).await
    }

    async fn reload_after_change(&mut self) {
        match self.categories.list().await {
            Ok(list) => self.list = list,
            Err(e) => tracing::warn!(error = %e, "Category list not reloaded"),
        }
    }
}
