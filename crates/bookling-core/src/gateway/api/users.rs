use std::sync::Arc;

use super::{acknowledgement, decode};
use crate::error::Result;
use crate::gateway::{ApiRequest, Gateway};
use crate::user::{Credentials, User};

/// `/users` endpoints.
#[derive(Clone)]
pub struct UsersApi {
    gateway: Arc<dyn Gateway>,
}

impl UsersApi {
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        Self { gateway }
    }

    async fn call_user(&self, request: ApiRequest) -> Result<User> {
        let body = self.gateway.send(request.clone()).await?;
        decode(&request, body)
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<User> {
        self.call_user(ApiRequest::post("/users/login", credentials)?)
            .await
    }

    pub async fn register(&self, credentials: &Credentials) -> Result<User> {
        self.call_user(ApiRequest::post("/users/register", credentials)?)
            .await
    }

    /// Sends the full user record; the backend replaces the stored one.
    pub async fn update(&self, user: &User) -> Result<String> {
        let request = ApiRequest::put(format!("/users/{}", user.id), user)?;
        Ok(acknowledgement(self.gateway.send(request).await?))
    }

    pub async fn delete(&self, user_id: i64) -> Result<String> {
        let request = ApiRequest::delete(format!("/users/{}", user_id));
        Ok(acknowledgement(self.gateway.send(request).await?))
    }

    pub async fn add_favorite(&self, user_id: i64, category_id: i64) -> Result<String> {
        let request =
            ApiRequest::post_empty(format!("/users/{}/favorites/{}", user_id, category_id));
        Ok(acknowledgement(self.gateway.send(request).await?))
    }

    pub async fn remove_favorite(&self, user_id: i64, category_id: i64) -> Result<String> {
        let request = ApiRequest::delete(format!("/users/{}/favorites/{}", user_id, category_id));
        Ok(acknowledgement(self.gateway.send(request).await?))
    }
}
