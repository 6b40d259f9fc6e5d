//! Admin auth API calls.
//!
//! Each call builds one request through [`HttpClient`], unwraps the `data`
//! envelope, and surfaces failures as [`ApiError`]. The service holds no state
//! of its own; login and refresh persist the returned token pair through the
//! client's token store before returning.
//!
//! ERROR HANDLING
//! ==============
//! Errors are propagated, never swallowed: the session controller decides
//! what becomes user-visible.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;
use serde_json::json;

use super::error::ApiError;
use super::http::HttpClient;
use super::types::{AccountRecord, Envelope, FirebaseToken, ResetTokenValidation, TokenPair};

pub const LOGIN_ENDPOINT: &str = "/admin/auth/login";
pub const FIREBASE_TOKEN_ENDPOINT: &str = "/admin/auth/firebase-token";
pub const RESET_TOKEN_ENDPOINT: &str = "/admin/auth/reset-password/token";
pub const RESET_TOKEN_VALIDATE_ENDPOINT: &str = "/admin/auth/reset-password/token-validate";
pub const RESET_PASSWORD_ENDPOINT: &str = "/admin/auth/reset-password";
pub const VERIFY_USER_ENDPOINT: &str = "/admin/auth/verify-user";
pub const REFRESH_ENDPOINT: &str = "/admin/auth/refresh";
pub const MY_ACCOUNT_ENDPOINT: &str = "/admin/my-account";

#[derive(Clone)]
pub struct AuthService {
    http: HttpClient,
}

impl AuthService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Exchange credentials for a token pair and persist it.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the envelope has no `data`,
    /// or the tokens cannot be stored.
    pub async fn login(&self, email: &str, password: &str) -> Result<Envelope<TokenPair>, ApiError> {
        let body = self.http.post(LOGIN_ENDPOINT, json!({ "email": email, "password": password })).await?;
        let envelope = Envelope::<TokenPair>::from_value(body)?;
        let Some(pair) = envelope.data.as_ref() else {
            return Err(ApiError::RequestFailed { message: envelope.message });
        };
        self.store_pair(pair)?;
        Ok(envelope)
    }

    /// Exchange a refresh token for a new pair and persist it.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidInput`] for an empty token, otherwise as
    /// [`AuthService::login`].
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, ApiError> {
        require_non_empty(refresh_token, "refresh token")?;
        let pair: TokenPair = self.post_data(REFRESH_ENDPOINT, json!({ "refreshToken": refresh_token })).await?;
        self.store_pair(&pair)?;
        Ok(pair)
    }

    /// Ask the server to email a password-reset token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the envelope has no `data`.
    pub async fn request_password_reset_token(&self, email: &str) -> Result<serde_json::Value, ApiError> {
        self.post_data(RESET_TOKEN_ENDPOINT, json!({ "email": email })).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the envelope has no `data`.
    pub async fn validate_reset_token(&self, token: &str) -> Result<ResetTokenValidation, ApiError> {
        self.post_data(RESET_TOKEN_VALIDATE_ENDPOINT, json!({ "token": token })).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the envelope has no `data`.
    pub async fn reset_password(&self, password: &str, token: &str) -> Result<serde_json::Value, ApiError> {
        self.post_data(RESET_PASSWORD_ENDPOINT, json!({ "password": password, "token": token })).await
    }

    /// Verify an arbitrary token string with the server.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidInput`] without touching the network when
    /// `token` is blank; otherwise request/envelope failures.
    pub async fn verify_user(&self, token: &str) -> Result<serde_json::Value, ApiError> {
        require_non_empty(token, "token")?;
        self.post_data(VERIFY_USER_ENDPOINT, json!({ "token": token })).await
    }

    /// Fetch a custom-auth token for the secondary identity provider.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the envelope has no `data`.
    pub async fn fetch_firebase_custom_token(&self) -> Result<FirebaseToken, ApiError> {
        self.get_data(FIREBASE_TOKEN_ENDPOINT).await
    }

    /// Fetch the signed-in account record.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the envelope has no `data`.
    pub async fn fetch_account(&self) -> Result<AccountRecord, ApiError> {
        self.get_data(MY_ACCOUNT_ENDPOINT).await
    }

    fn store_pair(&self, pair: &TokenPair) -> Result<(), ApiError> {
        self.http
            .tokens()
            .set_tokens(pair.access_token.as_deref(), pair.refresh_token.as_deref())?;
        Ok(())
    }

    async fn get_data<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let body = self.http.get(path).await?;
        Envelope::<T>::from_value(body)?.into_result()
    }

    async fn post_data<T: DeserializeOwned>(&self, path: &str, payload: serde_json::Value) -> Result<T, ApiError> {
        let body = self.http.post(path, payload).await?;
        Envelope::<T>::from_value(body)?.into_result()
    }
}

fn require_non_empty(value: &str, what: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::InvalidInput(format!("{what} must be a non-empty string")));
    }
    Ok(())
}
