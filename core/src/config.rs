//! Client configuration read from the environment.

use std::time::Duration;

use crate::error::ApiError;

pub const BASE_URL_VAR: &str = "ALBUMS_API_URL";
pub const TIMEOUT_VAR: &str = "ALBUMS_API_TIMEOUT_SECS";
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/";

/// Where the albums service lives and how the transport should reach it.
///
/// `timeout` is applied by the transport's HTTP client; `AlbumsClient`
/// itself never times out a call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_string(), timeout: None }
    }
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.to_string(), timeout: None }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Unset keys fall back to
    /// the defaults; a timeout that is not a positive integer is rejected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ApiError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(BASE_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout = match lookup(TIMEOUT_VAR) {
            None => None,
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
                _ => {
                    return Err(ApiError::Config(format!(
                        "{TIMEOUT_VAR} must be a positive integer, got {raw:?}"
                    )))
                }
            },
        };

        Ok(Self { base_url, timeout })
    }
}
