//! Wire DTOs for the admin API.
//!
//! DESIGN
//! ======
//! The server wraps every successful payload as `{ "data": ... }`. Instead of
//! probing optional fields at each call site, [`Envelope::into_result`] turns
//! the wrapper into a `Result` once: a missing `data` is a failure regardless
//! of the HTTP status.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::error::ApiError;

/// Response wrapper used by every admin endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// # Errors
    ///
    /// Returns [`ApiError::RequestFailed`] carrying the envelope's message when
    /// `data` is absent.
    pub fn into_result(self) -> Result<T, ApiError> {
        self.data.ok_or(ApiError::RequestFailed { message: self.message })
    }
}

impl<T: DeserializeOwned> Envelope<T> {
    /// Decode an envelope from a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::RequestFailed`] when the body is not an envelope of
    /// `T`, carrying whatever message the body exposes.
    pub fn from_value(body: serde_json::Value) -> Result<Self, ApiError> {
        let message = error_message(&body);
        serde_json::from_value(body).map_err(|e| {
            log::debug!("unexpected envelope shape: {e}");
            ApiError::RequestFailed { message }
        })
    }
}

/// Extract a server-provided message from an error body.
///
/// Recognises `{ "message": "..." }` and `{ "error": { "message": "..." } }`
/// as well as a bare `{ "error": "..." }`.
pub fn error_message(body: &serde_json::Value) -> Option<String> {
    let direct = body.get("message").and_then(serde_json::Value::as_str);
    let nested = body.get("error").and_then(|e| {
        e.as_str()
            .or_else(|| e.get("message").and_then(serde_json::Value::as_str))
    });
    direct.or(nested).map(str::to_owned)
}

/// Access/refresh token pair returned by login and refresh.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// Organization membership attached to an account.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationInfo {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub organization_role: Option<String>,
}

/// Raw account record as returned by `GET /admin/my-account`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub organization_info: Vec<OrganizationInfo>,
}

/// Result of `POST /admin/auth/reset-password/token-validate`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetTokenValidation {
    #[serde(default)]
    pub valid: Option<bool>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Custom-auth token for the secondary identity provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirebaseToken {
    pub token: String,
}
