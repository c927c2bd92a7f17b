use std::sync::Arc;

use super::{acknowledgement, decode};
use crate::catalog::{Category, CategoryName};
use crate::error::Result;
use crate::gateway::{ApiRequest, Gateway};

/// `/categories` endpoints.
#[derive(Clone)]
pub struct CategoriesApi {
    gateway: Arc<dyn Gateway>,
}

impl CategoriesApi {
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        Self { gateway }
    }

    async fn call_list(&self, request: ApiRequest) -> Result<Vec<Category>> {
        let body = self.gateway.send(request.clone()).await?;
        decode(&request, body)
    }

    pub async fn list(&self) -> Result<Vec<Category>> {
        self.call_list(ApiRequest::get("/categories")).await
    }

    /// Favorite categories of a user.
    pub async fn of_user(&self, user_id: i64) -> Result<Vec<Category>> {
        self.call_list(ApiRequest::get(format!("/categories/user/{}", user_id)))
            .await
    }

    pub async fn create(&self, name: &CategoryName) -> Result<String> {
        let request = ApiRequest::post("/categories", name)?;
        Ok(acknowledgement(self.gateway.send(request).await?))
    }

    pub async fn rename(&self, category_id: i64, name: &CategoryName) -> Result<String> {
        let request = ApiRequest::put(format!("/categories/{}", category_id), name)?;
        Ok(acknowledgement(self.gateway.send(request).await?))
    }

    pub async fn delete(&self, category_id: i64) -> Result<String> {
        let request = ApiRequest::delete(format!("/categories/{}", category_id));
        Ok(acknowledgement(self.gateway.send(request).await?))
    }
}
