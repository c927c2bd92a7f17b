use std::sync::Arc;

use bookling_application::AuthUseCase;
use bookling_application::views::{BooksView, CategoriesView, ProfileView, ReviewsView};
use bookling_core::BooklingError;
use bookling_core::config::RootConfig;
use bookling_core::gateway::Gateway;
use bookling_core::session::SessionContext;
use bookling_infrastructure::BooklingPaths;

/// The gateway together with the address it was built for.
#[derive(Clone)]
pub struct ApiHandle {
    pub base_url: String,
    pub gateway: Arc<dyn Gateway>,
}

/// Application state shared by all commands.
pub struct AppState {
    pub paths: BooklingPaths,
    pub config: RootConfig,
    pub session: Arc<SessionContext>,
    /// The gateway, or the configuration error that prevented building it.
    /// Commands that never reach the server work without it.
    api: Result<ApiHandle, BooklingError>,
}

impl AppState {
    pub fn new(
        paths: BooklingPaths,
        config: RootConfig,
        session: Arc<SessionContext>,
        api: Result<ApiHandle, BooklingError>,
    ) -> Self {
        Self {
            paths,
            config,
            session,
            api,
        }
    }

    pub fn api_base_url(&self) -> Result<&str, &BooklingError> {
        self.api.as_ref().map(|api| api.base_url.as_str())
    }

    pub fn gateway(&self) -> Result<Arc<dyn Gateway>, BooklingError> {
        self.api
            .as_ref()
            .map(|api| api.gateway.clone())
            .map_err(Clone::clone)
    }

    pub fn auth(&self) -> Result<AuthUseCase, BooklingError> {
        Ok(AuthUseCase::new(self.session.clone(), self.gateway()?))
    }

    pub fn books_view(&self) -> Result<BooksView, BooklingError> {
        Ok(BooksView::new(self.gateway()?))
    }

    pub fn categories_view(&self) -> Result<CategoriesView, BooklingError> {
        Ok(CategoriesView::new(self.session.clone(), self.gateway()?))
    }

    pub fn reviews_view(&self) -> Result<ReviewsView, BooklingError> {
        Ok(ReviewsView::new(self.session.clone(), self.gateway()?))
    }

    pub fn profile_view(&self) -> Result<ProfileView, BooklingError> {
        Ok(ProfileView::new(self.session.clone(), self.gateway()?))
    }
}
