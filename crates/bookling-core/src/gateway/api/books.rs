use std::sync::Arc;

use super::{acknowledgement, created_id, decode};
use crate::catalog::{Book, NewBook};
use crate::error::Result;
use crate::gateway::{ApiRequest, Gateway};

/// `/books` endpoints.
#[derive(Clone)]
pub struct BooksApi {
    gateway: Arc<dyn Gateway>,
}

impl BooksApi {
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        Self { gateway }
    }

    async fn call_list(&self, request: ApiRequest) -> Result<Vec<Book>> {
        let body = self.gateway.send(request.clone()).await?;
        decode(&request, body)
    }

    pub async fn list(&self) -> Result<Vec<Book>> {
        self.call_list(ApiRequest::get("/books")).await
    }

    pub async fn get(&self, book_id: i64) -> Result<Book> {
        let request = ApiRequest::get(format!("/books/{}", book_id));
        let body = self.gateway.send(request.clone()).await?;
        decode(&request, body)
    }

    pub async fn by_category(&self, category_id: i64) -> Result<Vec<Book>> {
        self.call_list(ApiRequest::get(format!("/books/category/{}", category_id)))
            .await
    }

    /// Creates a book and returns its id when the server reports one.
    pub async fn create(&self, book: &NewBook) -> Result<Option<i64>> {
        let body = self.gateway.send(ApiRequest::post("/books", book)?).await?;
        Ok(created_id(&body))
    }

    pub async fn update(&self, book: &Book) -> Result<String> {
        let request = ApiRequest::put(format!("/books/{}", book.id), book)?;
        Ok(acknowledgement(self.gateway.send(request).await?))
    }

    pub async fn delete(&self, book_id: i64) -> Result<String> {
        let request = ApiRequest::delete(format!("/books/{}", book_id));
        Ok(acknowledgement(self.gateway.send(request).await?))
    }

    pub async fn attach_category(&self, book_id: i64, category_id: i64) -> Result<String> {
        let request =
            ApiRequest::post_empty(format!("/books/{}/category/{}", book_id, category_id));
        Ok(acknowledgement(self.gateway.send(request).await?))
    }

    pub async fn detach_category(&self, book_id: i64, category_id: i64) -> Result<String> {
        let request =
            ApiRequest::delete(format!("/books/{}/categories/{}", book_id, category_id));
        Ok(acknowledgement(self.gateway.send(request).await?))
    }
}
