//! Session orchestration: startup restore, login, logout, refresh.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the order of side effects around [`SessionState`]. Tokens are always
//! persisted before the account fetch starts, and `Authenticated` is only
//! dispatched together with a fetched account record.
//!
//! TRADE-OFFS
//! ==========
//! A second `login` while one is pending is rejected instead of racing the
//! first for the shared state. The pending check and the `LoginStarted`
//! dispatch run before the first await, so on the single-threaded event loop
//! no other call can slip in between them. A logout issued while a login is in
//! flight wins: the late result is dropped along with the tokens it stored.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::sync::{Arc, Mutex};

use leptos::prelude::*;

use crate::net::api::AuthService;
use crate::net::error::ApiError;
use crate::net::types::{AccountRecord, TokenPair};
use crate::util::token_store::TokenStore;

use super::session::{SessionAction, SessionState};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("a login is already in progress")]
    LoginInProgress,
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl SessionError {
    pub fn user_message(&self) -> String {
        match self {
            Self::LoginInProgress => self.to_string(),
            Self::Api(e) => e.user_message(),
        }
    }
}

/// Holder of the single [`SessionState`] instance.
pub trait SessionCell: Clone + Send + Sync + 'static {
    fn snapshot(&self) -> SessionState;
    fn dispatch(&self, action: SessionAction);
}

impl SessionCell for RwSignal<SessionState> {
    fn snapshot(&self) -> SessionState {
        self.get_untracked()
    }

    fn dispatch(&self, action: SessionAction) {
        self.update(|state| state.apply(action));
    }
}

/// Non-reactive cell for hosts without a Leptos runtime.
#[derive(Clone, Debug, Default)]
pub struct SharedSession(Arc<Mutex<SessionState>>);

impl SessionCell for SharedSession {
    fn snapshot(&self) -> SessionState {
        self.0.lock().map(|s| s.clone()).unwrap_or_default()
    }

    fn dispatch(&self, action: SessionAction) {
        if let Ok(mut state) = self.0.lock() {
            state.apply(action);
        }
    }
}

#[derive(Clone)]
pub struct SessionController<C: SessionCell> {
    cell: C,
    auth: AuthService,
}

/// Controller wired to the app's reactive session signal.
pub type AppSession = SessionController<RwSignal<SessionState>>;

impl<C: SessionCell> SessionController<C> {
    pub fn new(cell: C, auth: AuthService) -> Self {
        Self { cell, auth }
    }

    pub fn state(&self) -> SessionState {
        self.cell.snapshot()
    }

    pub fn cell(&self) -> &C {
        &self.cell
    }

    pub fn auth(&self) -> &AuthService {
        &self.auth
    }

    pub fn tokens(&self) -> &TokenStore {
        self.auth.http().tokens()
    }

    /// Resolve the startup `Loading` state.
    ///
    /// With a stored access token the account is fetched; any failure clears
    /// the tokens and lands in `Unauthenticated`.
    pub async fn initialize(&self) {
        if !self.tokens().is_authenticated() {
            self.cell.dispatch(SessionAction::RestoreFailed);
            return;
        }
        match self.auth.fetch_account().await {
            Ok(record) => self.cell.dispatch(SessionAction::Restored(record)),
            Err(e) => {
                log::info!("stored session could not be restored: {e}");
                self.tokens().remove_tokens();
                self.cell.dispatch(SessionAction::RestoreFailed);
            }
        }
    }

    /// Log in and load the account.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::LoginInProgress`] without side effects when a
    /// login is already pending. Otherwise returns the failing step's error
    /// after recording its message in the session state. Tokens stored by a
    /// successful login step are kept even if the account fetch then fails.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), SessionError> {
        if self.cell.snapshot().login_pending() {
            return Err(SessionError::LoginInProgress);
        }
        self.cell.dispatch(SessionAction::LoginStarted);

        match self.login_and_fetch(email, password).await {
            Ok(record) => {
                if !self.cell.snapshot().login_pending() {
                    log::info!("logged out while login was in flight, discarding tokens");
                    self.tokens().remove_tokens();
                    return Ok(());
                }
                self.cell.dispatch(SessionAction::LoginSucceeded(record));
                Ok(())
            }
            Err(e) => {
                log::warn!("login failed: {e}");
                self.cell.dispatch(SessionAction::LoginFailed(e.user_message()));
                Err(e.into())
            }
        }
    }

    async fn login_and_fetch(&self, email: &str, password: &str) -> Result<AccountRecord, ApiError> {
        self.auth.login(email, password).await?;
        self.auth.fetch_account().await
    }

    /// Clear tokens and sign out. Never touches the network, never fails.
    pub fn logout(&self) {
        self.tokens().remove_tokens();
        self.cell.dispatch(SessionAction::LoggedOut);
    }

    pub fn clear_error(&self) {
        self.cell.dispatch(SessionAction::ClearError);
    }

    /// Exchange the stored refresh token for a new pair.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidInput`] when no refresh token is stored,
    /// otherwise the refresh call's error.
    pub async fn refresh_session(&self) -> Result<TokenPair, SessionError> {
        let refresh_token = self
            .tokens()
            .refresh_token()
            .ok_or_else(|| ApiError::InvalidInput("no refresh token stored".to_owned()))?;
        Ok(self.auth.refresh(&refresh_token).await?)
    }

    /// Refetch the account while signed in.
    ///
    /// # Errors
    ///
    /// Returns the fetch error; the current profile is left untouched.
    pub async fn reload_profile(&self) -> Result<(), SessionError> {
        if !self.cell.snapshot().is_authenticated() {
            return Ok(());
        }
        let record = self.auth.fetch_account().await?;
        self.cell.dispatch(SessionAction::ProfileRefreshed(record));
        Ok(())
    }
}
