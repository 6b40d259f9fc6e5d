//! Fakes for exercising the client without a browser or network.
//!
//! These plug into the real ports (`KeyValueStore`, `Navigator`, `Transport`)
//! so tests run the production interceptor and state-machine code paths.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;

use crate::config::ClientConfig;
use crate::net::api::AuthService;
use crate::net::error::ApiError;
use crate::net::http::HttpClient;
use crate::net::transport::{HttpRequest, HttpResponse, Transport};
use crate::util::navigation::RecordingNavigator;
use crate::util::storage::MemoryStore;
use crate::util::token_store::TokenStore;

pub const TEST_API_KEY: &str = "test-api-key";

/// Transport that replays queued responses in order and records requests.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    responses: Arc<Mutex<VecDeque<Result<HttpResponse, ApiError>>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl ScriptedTransport {
    pub fn respond(&self, status: u16, body: serde_json::Value) -> &Self {
        self.responses.lock().unwrap().push_back(Ok(HttpResponse { status, body }));
        self
    }

    pub fn fail(&self, error: ApiError) -> &Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted response".to_owned())))
    }
}

/// Everything a test needs to drive the auth stack.
pub struct Harness {
    pub memory: MemoryStore,
    pub navigator: RecordingNavigator,
    pub transport: ScriptedTransport,
    pub tokens: TokenStore,
    pub http: HttpClient,
    pub auth: AuthService,
}

impl Harness {
    pub fn at(path: &str) -> Self {
        let memory = MemoryStore::new();
        let navigator = RecordingNavigator::at(path);
        let transport = ScriptedTransport::default();
        let tokens = TokenStore::new(Arc::new(memory.clone()), Arc::new(navigator.clone()));
        let config = ClientConfig {
            base_url: "https://api.test".to_owned(),
            api_key: TEST_API_KEY.to_owned(),
            ..ClientConfig::default()
        };
        let http = HttpClient::new(Arc::new(config), Arc::new(transport.clone()), tokens.clone());
        let auth = AuthService::new(http.clone());
        Self { memory, navigator, transport, tokens, http, auth }
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::at("/")
    }
}

pub fn token_pair_body(access: &str, refresh: &str) -> serde_json::Value {
    json!({ "data": { "accessToken": access, "refreshToken": refresh } })
}

pub fn account_body(role: Option<&str>, organization_role: Option<&str>) -> serde_json::Value {
    let organizations = match organization_role {
        Some(org_role) => json!([{
            "id": "org-1",
            "name": "Acme",
            "logoUrl": "https://cdn.test/acme.png",
            "status": "ACTIVE",
            "organizationRole": org_role
        }]),
        None => json!([]),
    };
    json!({
        "data": {
            "id": "u-1",
            "email": "a@b.com",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "role": role,
            "organizationInfo": organizations
        }
    })
}
