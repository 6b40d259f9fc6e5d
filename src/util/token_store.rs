//! Access/refresh token persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only place tokens are read or written. The HTTP client reads the access
//! token for each request, the auth service writes the pair after login or
//! refresh, and both logout paths clear it here. No policy lives in this
//! module: tokens are opaque strings and well-formedness is the server's call.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::sync::Arc;

use super::navigation::{LOGIN_PATH, Navigator};
use super::storage::{KeyValueStore, StorageError};

pub const ACCESS_TOKEN_KEY: &str = "accessToken";
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

/// Token persistence over a [`KeyValueStore`].
#[derive(Clone)]
pub struct TokenStore {
    store: Arc<dyn KeyValueStore>,
    navigator: Arc<dyn Navigator>,
}

impl TokenStore {
    pub fn new(store: Arc<dyn KeyValueStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self { store, navigator }
    }

    /// Write whichever of the two tokens is present and non-empty.
    ///
    /// An omitted token leaves the stored value untouched.
    ///
    /// # Errors
    ///
    /// Returns the first [`StorageError`] raised by the medium.
    pub fn set_tokens(&self, access: Option<&str>, refresh: Option<&str>) -> Result<(), StorageError> {
        if let Some(access) = access.filter(|t| !t.is_empty()) {
            self.store.set(ACCESS_TOKEN_KEY, access)?;
        }
        if let Some(refresh) = refresh.filter(|t| !t.is_empty()) {
            self.store.set(REFRESH_TOKEN_KEY, refresh)?;
        }
        Ok(())
    }

    pub fn access_token(&self) -> Option<String> {
        self.store.get(ACCESS_TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.store.get(REFRESH_TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// Synchronous authentication predicate: a non-empty access token exists.
    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }

    /// Clear both tokens. Storage failures are logged, never raised.
    pub fn remove_tokens(&self) {
        for key in [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY] {
            if let Err(e) = self.store.remove(key) {
                log::warn!("failed to remove {key}: {e}");
            }
        }
    }

    /// Clear tokens and reload the page at the login entry point.
    pub fn logout(&self) {
        self.remove_tokens();
        self.navigator.hard_redirect(LOGIN_PATH);
    }

    pub(crate) fn navigator(&self) -> &Arc<dyn Navigator> {
        &self.navigator
    }
}
