//! reqwest-backed [`Gateway`].

use std::sync::Arc;

use async_trait::async_trait;
use bookling_core::config::ApiConfig;
use bookling_core::error::{BooklingError, Result};
use bookling_core::gateway::{ApiRequest, Gateway, LoggingObserver, Method, ResponseObserver};
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::Value;
use uuid::Uuid;

/// The shared HTTP client for the backend.
///
/// Built once at startup with the base address, JSON default headers and the
/// request timeout. Every failure goes through the observer before it is
/// returned.
#[derive(Clone)]
pub struct HttpGateway {
    client: Client,
    config: ApiConfig,
    observer: Arc<dyn ResponseObserver>,
}

impl HttpGateway {
    pub fn new(config: ApiConfig) -> Result<Self> {
        Self::with_observer(config, Arc::new(LoggingObserver))
    }

    pub fn with_observer(config: ApiConfig, observer: Arc<dyn ResponseObserver>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| BooklingError::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            config,
            observer,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    async fn execute(&self, request: &ApiRequest) -> Result<Value> {
        let url = self.config.url_for(&request.path);
        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
            Method::Delete => self.client.delete(&url),
        };
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|err| {
            let kind = if err.is_timeout() {
                "timed out"
            } else if err.is_connect() {
                "could not connect"
            } else {
                "failed"
            };
            BooklingError::network(format!("{} {}: {}", request.endpoint(), kind, err))
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|err| {
            BooklingError::network(format!(
                "Failed to read response of {}: {}",
                request.endpoint(),
                err
            ))
        })?;

        if !status.is_success() {
            return Err(BooklingError::http(status.as_u16(), text));
        }

        Ok(parse_body(&text))
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    async fn send(&self, request: ApiRequest) -> Result<Value> {
        let request_id = Uuid::new_v4();
        tracing::debug!(%request_id, endpoint = %request.endpoint(), "Sending API request");

        match self.execute(&request).await {
            Ok(body) => {
                tracing::debug!(%request_id, "API request succeeded");
                self.observer.on_success(&request, &body);
                Ok(body)
            }
            Err(err) => {
                self.observer.on_error(&request, &err);
                Err(err)
            }
        }
    }
}

/// JSON when it parses, otherwise the raw text; empty is `null`.
fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}
