use std::sync::Arc;

use super::{acknowledgement, decode};
use crate::catalog::{Review, ReviewContent};
use crate::error::Result;
use crate::gateway::{ApiRequest, Gateway};

/// `/responses` endpoints. The backend calls reviews "responses".
#[derive(Clone)]
pub struct ReviewsApi {
    gateway: Arc<dyn Gateway>,
}

impl ReviewsApi {
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        Self { gateway }
    }

    async fn call_list(&self, request: ApiRequest) -> Result<Vec<Review>> {
        let body = self.gateway.send(request.clone()).await?;
        decode(&request, body)
    }

    pub async fn by_book(&self, book_id: i64) -> Result<Vec<Review>> {
        self.call_list(ApiRequest::get(format!("/responses/book/{}", book_id)))
            .await
    }

    pub async fn by_user(&self, user_id: i64) -> Result<Vec<Review>> {
        self.call_list(ApiRequest::get(format!("/responses/user/{}", user_id)))
            .await
    }

    pub async fn create(
        &self,
        user_id: i64,
        book_id: i64,
        content: &ReviewContent,
    ) -> Result<String> {
        let request = ApiRequest::post(
            format!("/responses/user/{}/book/{}", user_id, book_id),
            content,
        )?;
        Ok(acknowledgement(self.gateway.send(request).await?))
    }

    pub async fn update(&self, review_id: i64, content: &ReviewContent) -> Result<String> {
        let request = ApiRequest::put(format!("/responses/{}", review_id), content)?;
        Ok(acknowledgement(self.gateway.send(request).await?))
    }

    pub async fn delete(&self, review_id: i64) -> Result<String> {
        let request = ApiRequest::delete(format!("/responses/{}", review_id));
        Ok(acknowledgement(self.gateway.send(request).await?))
    }
}
