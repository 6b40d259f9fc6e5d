//! Admin API client configuration.
//!
//! A WASM bundle has no process environment, so the shipped values come from
//! compile-time environment (`option_env!`). Parsing goes through a key lookup
//! so tests can feed arbitrary maps.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 600;
pub const TUNNEL_BYPASS_HEADER: (&str, &str) = ("ngrok-skip-browser-warning", "true");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root without a trailing slash.
    pub base_url: String,
    /// Static value of the `api-key` header.
    pub api_key: String,
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_owned(),
            api_key: String::new(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Build config from the environment captured at compile time.
    ///
    /// Optional:
    /// - `ADMIN_API_BASE_URL`: default [`DEFAULT_API_BASE_URL`]
    /// - `ADMIN_API_KEY`: default empty
    /// - `ADMIN_API_TIMEOUT_SECS`: default 600
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| {
            match key {
                "ADMIN_API_BASE_URL" => option_env!("ADMIN_API_BASE_URL"),
                "ADMIN_API_KEY" => option_env!("ADMIN_API_KEY"),
                "ADMIN_API_TIMEOUT_SECS" => option_env!("ADMIN_API_TIMEOUT_SECS"),
                _ => None,
            }
            .map(str::to_owned)
        })
    }

    /// Build config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("ADMIN_API_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned())
            .trim()
            .trim_end_matches('/')
            .to_owned();
        let api_key = lookup("ADMIN_API_KEY").unwrap_or_default();
        let timeout_secs = lookup("ADMIN_API_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);

        Self { base_url, api_key, request_timeout: Duration::from_secs(timeout_secs) }
    }

    /// Join `path` onto the base URL.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
