//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and identity-dependent rendering.
//!
//! DESIGN
//! ======
//! Fields are never written directly. Every change is a [`SessionAction`]
//! applied by [`SessionState::apply`], so the legal transitions are all in
//! one `match`:
//!
//! ```text
//! Loading         --Restored-------> Authenticated
//! Loading         --RestoreFailed--> Unauthenticated
//! Unauthenticated --LoginSucceeded-> Authenticated
//! Unauthenticated --LoginFailed----> Unauthenticated (error set)
//! Authenticated   --ProfileRefreshed-> Authenticated
//! Authenticated   --LoggedOut------> Unauthenticated
//! ```

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::AccountRecord;

use super::profile::{UserProfile, transform_user_data};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// Startup token check still running.
    #[default]
    Loading,
    Authenticated,
    Unauthenticated,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    status: SessionStatus,
    user: Option<AccountRecord>,
    user_details: Option<UserProfile>,
    error: Option<String>,
    login_pending: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionAction {
    /// Startup check found a token and fetched the account.
    Restored(AccountRecord),
    /// Startup check found no token, or the account fetch failed.
    RestoreFailed,
    LoginStarted,
    LoginSucceeded(AccountRecord),
    LoginFailed(String),
    /// Account refetched while already signed in.
    ProfileRefreshed(AccountRecord),
    LoggedOut,
    ClearError,
}

impl SessionState {
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Raw account record as last fetched.
    pub fn user(&self) -> Option<&AccountRecord> {
        self.user.as_ref()
    }

    /// Derived profile; present whenever the status is `Authenticated`.
    pub fn user_details(&self) -> Option<&UserProfile> {
        self.user_details.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// A login call is in flight.
    pub fn login_pending(&self) -> bool {
        self.login_pending
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Authenticated
    }

    pub fn is_loading(&self) -> bool {
        self.status == SessionStatus::Loading
    }

    /// Apply one transition.
    pub fn apply(&mut self, action: SessionAction) {
        match action {
            SessionAction::Restored(record) => {
                self.sign_in(record);
                self.error = None;
                self.login_pending = false;
            }
            // A logout while the login was in flight wins.
            SessionAction::LoginSucceeded(record) => {
                if self.login_pending {
                    self.sign_in(record);
                    self.error = None;
                    self.login_pending = false;
                }
            }
            SessionAction::ProfileRefreshed(record) => {
                if self.is_authenticated() {
                    self.sign_in(record);
                }
            }
            SessionAction::RestoreFailed | SessionAction::LoggedOut => {
                self.sign_out();
                self.login_pending = false;
            }
            SessionAction::LoginStarted => {
                self.login_pending = true;
                self.error = None;
            }
            SessionAction::LoginFailed(message) => {
                self.sign_out();
                self.login_pending = false;
                self.error = Some(message);
            }
            SessionAction::ClearError => self.error = None,
        }
    }

    /// Consuming form of [`SessionState::apply`].
    #[must_use]
    pub fn reduce(mut self, action: SessionAction) -> Self {
        self.apply(action);
        self
    }

    fn sign_in(&mut self, record: AccountRecord) {
        self.user_details = Some(transform_user_data(&record));
        self.user = Some(record);
        self.status = SessionStatus::Authenticated;
    }

    fn sign_out(&mut self) {
        self.user = None;
        self.user_details = None;
        self.status = SessionStatus::Unauthenticated;
    }
}
