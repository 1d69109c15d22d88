//! Upstream settings loaded from environment variables.
//!
//! # Environment variables
//! - `MESSAGES_API_BASE`     = upstream base URL (default: the public member API)
//! - `MESSAGES_TIMEOUT_SECS` = request timeout in seconds (default: 10)

use crate::error_handler::{ConfigError, env_opt_u64, env_or, validate_http_endpoint};

/// Immutable configuration for [`crate::MessagesClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessagesClientConfig {
    /// Base URL of the upstream service, without the `/messages` suffix.
    pub base_url: String,
    /// Timeout for the whole request, in seconds.
    pub timeout_secs: u64,
}

impl MessagesClientConfig {
    pub const DEFAULT_BASE_URL: &'static str =
        "https://november7-730026606190.europe-west1.run.app";
    pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

    /// Config for `base_url` with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: Self::DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Loads the config from the environment and validates it.
    ///
    /// # Errors
    /// - [`ConfigError::InvalidFormat`] if `MESSAGES_API_BASE` is not an http(s) URL
    /// - [`ConfigError::InvalidNumber`] if `MESSAGES_TIMEOUT_SECS` is not a positive integer
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = env_or("MESSAGES_API_BASE", Self::DEFAULT_BASE_URL);
        let timeout_secs =
            env_opt_u64("MESSAGES_TIMEOUT_SECS")?.unwrap_or(Self::DEFAULT_TIMEOUT_SECS);

        let cfg = Self {
            base_url,
            timeout_secs,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Validates config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_http_endpoint("MESSAGES_API_BASE", &self.base_url)?;
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidNumber {
                var: "MESSAGES_TIMEOUT_SECS",
                reason: "expected u64 > 0",
            });
        }
        Ok(())
    }

    /// Full URL of the messages endpoint. No trailing slash.
    pub fn messages_url(&self) -> String {
        format!("{}/messages", self.base_url.trim().trim_end_matches('/'))
    }
}

impl Default for MessagesClientConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE_URL)
    }
}
