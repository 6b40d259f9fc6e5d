//! Authenticated HTTP client for the admin API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every request passes two interceptors. The request side attaches the static
//! headers and, when one is stored, the bearer access token. The response side
//! turns non-2xx statuses into [`ApiError`]s and decides whether a 401 ends the
//! session.
//!
//! TRADE-OFFS
//! ==========
//! Not every 401 means the session is gone: expired reset links, bad
//! verification tokens and missing resources also answer 401. Those messages,
//! and any 401 raised while browsing the demo area, are logged and rejected
//! without logging the user out, as is a 401 with no stored session or from
//! the login endpoint itself. Every
//! other 401 forces a logout. The triggering call is rejected either way and
//! never retried.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::sync::Arc;

use crate::config::{ClientConfig, TUNNEL_BYPASS_HEADER};
use crate::util::token_store::TokenStore;

use super::api::LOGIN_ENDPOINT;
use super::error::ApiError;
use super::transport::{HttpRequest, HttpResponse, Method, Transport};
use super::types::error_message;

pub const UNAUTHORIZED: u16 = 401;

/// Lowercased fragments of 401 messages that do not end the session.
pub const BENIGN_UNAUTHORIZED_MESSAGES: &[&str] = &[
    "link expired",
    "link has expired",
    "invalid token",
    "token is invalid",
    "not found",
];

/// Path segment marking the public demo area.
pub const DEMO_PATH_SEGMENT: &str = "demo";

/// What to do about a 401 response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnauthorizedAction {
    /// Reject the call, keep the session.
    Ignore,
    /// Reject the call and log the user out.
    ForceLogout,
}

/// Classify a 401 by its server message and the page it happened on.
///
/// Without a stored session there is nothing to invalidate, so failed
/// credential checks on the login page never trigger a reload.
pub fn classify_unauthorized(message: Option<&str>, current_path: &str, has_session: bool) -> UnauthorizedAction {
    if !has_session || is_demo_path(current_path) {
        return UnauthorizedAction::Ignore;
    }
    let benign = message.is_some_and(|m| {
        let lowered = m.to_ascii_lowercase();
        BENIGN_UNAUTHORIZED_MESSAGES.iter().any(|fragment| lowered.contains(fragment))
    });
    if benign { UnauthorizedAction::Ignore } else { UnauthorizedAction::ForceLogout }
}

/// True when the location's pathname has a `demo` segment. The query and
/// fragment are not considered.
pub fn is_demo_path(current_path: &str) -> bool {
    let pathname = current_path.split(['?', '#']).next().unwrap_or_default();
    pathname.split('/').any(|segment| segment == DEMO_PATH_SEGMENT)
}

/// HTTP client bound to one API base URL and one token store.
#[derive(Clone)]
pub struct HttpClient {
    config: Arc<ClientConfig>,
    transport: Arc<dyn Transport>,
    tokens: TokenStore,
}

impl HttpClient {
    pub fn new(config: Arc<ClientConfig>, transport: Arc<dyn Transport>, tokens: TokenStore) -> Self {
        Self { config, transport, tokens }
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    /// # Errors
    ///
    /// See [`HttpClient::send`].
    pub async fn get(&self, path: &str) -> Result<serde_json::Value, ApiError> {
        self.send(Method::Get, path, None).await
    }

    /// # Errors
    ///
    /// See [`HttpClient::send`].
    pub async fn post(&self, path: &str, body: serde_json::Value) -> Result<serde_json::Value, ApiError> {
        self.send(Method::Post, path, Some(body)).await
    }

    /// Send a request through both interceptors and return the JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] if the server was not reached,
    /// [`ApiError::AuthExpired`] on 401, and [`ApiError::RequestFailed`] for
    /// any other non-2xx status.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, ApiError> {
        let request = self.build_request(method, path, body);
        let response = self.transport.send(request).await?;
        self.handle_response(path, response)
    }

    /// Request interceptor: static headers plus bearer token when present.
    pub fn build_request(&self, method: Method, path: &str, body: Option<serde_json::Value>) -> HttpRequest {
        let mut headers = vec![
            ("Content-Type".to_owned(), "application/json".to_owned()),
            ("api-key".to_owned(), self.config.api_key.clone()),
            (TUNNEL_BYPASS_HEADER.0.to_owned(), TUNNEL_BYPASS_HEADER.1.to_owned()),
        ];
        if let Some(token) = self.tokens.access_token() {
            headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
        }
        HttpRequest {
            method,
            url: self.config.url(path),
            headers,
            body,
            timeout: self.config.request_timeout,
        }
    }

    /// Response interceptor for a call to `path`.
    ///
    /// A 401 from the login endpoint is a credential check, not the end of a
    /// session, even when stale tokens are still stored.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::send`].
    pub fn handle_response(&self, path: &str, response: HttpResponse) -> Result<serde_json::Value, ApiError> {
        if response.is_success() {
            return Ok(response.body);
        }
        let message = error_message(&response.body);
        if response.status == UNAUTHORIZED {
            let location = self.tokens.navigator().current_path();
            let has_session = self.tokens.is_authenticated() && path != LOGIN_ENDPOINT;
            match classify_unauthorized(message.as_deref(), &location, has_session) {
                UnauthorizedAction::Ignore => {
                    log::debug!("401 from {path} on {location} kept session: {}", message.as_deref().unwrap_or("-"));
                }
                UnauthorizedAction::ForceLogout => {
                    log::warn!("401 from {path} on {location}, logging out: {}", message.as_deref().unwrap_or("-"));
                    self.tokens.logout();
                }
            }
            return Err(ApiError::AuthExpired { message });
        }
        Err(ApiError::RequestFailed { message })
    }
}
