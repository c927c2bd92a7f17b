#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bookling_core::error::{BooklingError, Result};
use bookling_core::gateway::{ApiRequest, Gateway};
use bookling_core::session::{MemoryDurableStore, PersistentSessionStore, SessionContext};
use bookling_core::user::User;
use serde_json::Value;

/// Gateway answering by `METHOD /path` and recording what was sent.
///
/// Unscripted endpoints answer with a `404`.
#[derive(Default)]
pub struct MockGateway {
    routes: Mutex<HashMap<String, VecDeque<Result<Value>>>>,
    sent: Mutex<Vec<ApiRequest>>,
}

impl MockGateway {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn on(&self, endpoint: &str, response: Result<Value>) -> &Self {
        self.routes
            .lock()
            .unwrap()
            .entry(endpoint.to_string())
            .or_default()
            .push_back(response);
        self
    }

    pub fn sent(&self) -> Vec<ApiRequest> {
        self.sent.lock().unwrap().clone()
    }

    pub fn endpoints(&self) -> Vec<String> {
        self.sent().iter().map(ApiRequest::endpoint).collect()
    }
}

#[async_trait]
impl Gateway for MockGateway {
    async fn send(&self, request: ApiRequest) -> Result<Value> {
        let endpoint = request.endpoint();
        self.sent.lock().unwrap().push(request);
        self.routes
            .lock()
            .unwrap()
            .get_mut(&endpoint)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| Err(BooklingError::http(404, "")))
    }
}

pub struct Fixture {
    pub storage: MemoryDurableStore,
    pub session: Arc<SessionContext>,
    pub gateway: Arc<MockGateway>,
}

impl Fixture {
    pub fn anonymous() -> Self {
        let storage = MemoryDurableStore::new();
        let session = Arc::new(SessionContext::new(Arc::new(PersistentSessionStore::new(
            Arc::new(storage.clone()),
        ))));
        Self {
            storage,
            session,
            gateway: MockGateway::new(),
        }
    }

    pub fn signed_in(user: User) -> Self {
        let fixture = Self::anonymous();
        fixture.session.login(user).unwrap();
        fixture
    }

    pub fn gateway(&self) -> Arc<dyn Gateway> {
        self.gateway.clone()
    }

    /// The user a fresh process would restore from storage.
    pub fn persisted_user(&self) -> Option<User> {
        use bookling_core::session::SessionStore;
        PersistentSessionStore::new(Arc::new(self.storage.clone())).load()
    }
}
