use serde_json::Value;

use super::ApiRequest;
use crate::error::BooklingError;

/// Central observation point for gateway responses.
///
/// Called by the gateway before the result is handed back to the caller.
/// Observers cannot swallow or rewrite errors.
pub trait ResponseObserver: Send + Sync {
    fn on_error(&self, request: &ApiRequest, error: &BooklingError);

    fn on_success(&self, _request: &ApiRequest, _body: &Value) {}
}

/// Default observer: reports every failure through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingObserver;

impl ResponseObserver for LoggingObserver {
    fn on_error(&self, request: &ApiRequest, error: &BooklingError) {
        match error.status() {
            Some(status) => tracing::error!(
                endpoint = %request.endpoint(),
                status,
                "API request failed: {}",
                error
            ),
            None => tracing::error!(
                endpoint = %request.endpoint(),
                "API request failed: {}",
                error
            ),
        }
    }
}
