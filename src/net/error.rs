//! Error taxonomy for admin API calls.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::util::storage::StorageError;

pub const FALLBACK_ERROR_MESSAGE: &str = "Login failed. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered but without a `data` envelope or with a failure status.
    #[error("request failed{}", suffix(.message))]
    RequestFailed { message: Option<String> },
    /// A client-side precondition failed before any network call.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// 401 response.
    #[error("authentication expired{}", suffix(.message))]
    AuthExpired { message: Option<String> },
    /// The server was never reached (network failure, timeout).
    #[error("transport error: {0}")]
    Transport(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ApiError {
    /// Message reported by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::RequestFailed { message } | Self::AuthExpired { message } => message.as_deref(),
            _ => None,
        }
    }

    /// Human-readable text for display: server message, then the error's own
    /// description, then [`FALLBACK_ERROR_MESSAGE`].
    pub fn user_message(&self) -> String {
        if let Some(message) = self.server_message().filter(|m| !m.trim().is_empty()) {
            return message.to_owned();
        }
        match self {
            Self::InvalidInput(reason) if !reason.is_empty() => reason.clone(),
            Self::Transport(reason) if !reason.is_empty() => reason.clone(),
            Self::Storage(e) => e.to_string(),
            _ => FALLBACK_ERROR_MESSAGE.to_owned(),
        }
    }
}

fn suffix(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
}
