//! Unified error handling for `messages-client`.
//!
//! [`MessagesError`] is the single error returned by the client. Configuration
//! problems are grouped in [`ConfigError`] and wrapped by it. Small helpers for
//! reading and validating environment variables return the crate [`Result<T>`].
//!
//! Upstream error messages are user facing and are returned verbatim by the
//! HTTP layer, so they carry no crate prefix. Config errors are prefixed with
//! `[Messages Client]` to simplify attribution in startup logs.

use reqwest::StatusCode;
use thiserror::Error;

/* ------------------------------------------------------------------------- */
/* Public result alias                                                       */
/* ------------------------------------------------------------------------- */

/// Unified result alias for the entire crate.
pub type Result<T> = std::result::Result<T, MessagesError>;

/* ------------------------------------------------------------------------- */
/* Top-level error                                                           */
/* ------------------------------------------------------------------------- */

/// Everything that can go wrong while building the client or fetching messages.
#[derive(Debug, Error)]
pub enum MessagesError {
    /// Invalid client configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Upstream answered `402 Payment Required`.
    #[error(
        "Upstream /messages API returned 402 Payment Required. \
         Cannot fetch member messages at this time."
    )]
    PaymentRequired,

    /// Connection failure, timeout, or body read failure.
    #[error("Error calling /messages API: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream returned a non-successful status other than 402.
    #[error("Error calling /messages API: HTTP {status} from {url}")]
    HttpStatus {
        /// HTTP status returned by upstream.
        status: StatusCode,
        /// Request URL.
        url: String,
        /// Short snippet of the response body (trimmed), kept for logs.
        snippet: String,
    },

    /// Body was not JSON, or neither `{ "items": [...] }` nor a bare array.
    #[error("Unexpected /messages API format")]
    Format {
        /// What exactly did not match, kept for logs.
        reason: String,
    },
}

impl MessagesError {
    pub(crate) fn format(reason: impl Into<String>) -> Self {
        MessagesError::Format {
            reason: reason.into(),
        }
    }
}

/* ------------------------------------------------------------------------- */
/* Config errors                                                             */
/* ------------------------------------------------------------------------- */

/// Errors raised while loading or validating [`crate::MessagesClientConfig`].
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A number failed to parse or was out of range.
    #[error("[Messages Client] invalid number in {var}: {reason}")]
    InvalidNumber {
        /// Variable name (e.g., `MESSAGES_TIMEOUT_SECS`).
        var: &'static str,
        /// Human-readable reason (e.g., `expected u64 > 0`).
        reason: &'static str,
    },

    /// Value had the wrong format (e.g., invalid URL).
    #[error("[Messages Client] invalid format in {var}: {reason}")]
    InvalidFormat {
        /// Variable name (e.g., `MESSAGES_API_BASE`).
        var: &'static str,
        /// Explanation (e.g., `must start with http:// or https://`).
        reason: &'static str,
    },
}

/* ------------------------------------------------------------------------- */
/* Env helpers                                                               */
/* ------------------------------------------------------------------------- */

/// Reads an environment variable, falling back to `default` when unset or blank.
pub fn env_or(name: &'static str, default: &str) -> String {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => default.to_string(),
    }
}

/// Parses an optional `u64` from env (`Ok(None)` if unset/empty).
///
/// # Errors
/// Returns [`ConfigError::InvalidNumber`] if the variable is set but not a
/// valid `u64`.
pub fn env_opt_u64(name: &'static str) -> std::result::Result<Option<u64>, ConfigError> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => {
            v.trim()
                .parse::<u64>()
                .map(Some)
                .map_err(|_| ConfigError::InvalidNumber {
                    var: name,
                    reason: "expected u64",
                })
        }
        _ => Ok(None),
    }
}

/* ------------------------------------------------------------------------- */
/* Validation helpers                                                        */
/* ------------------------------------------------------------------------- */

/// Validates that an HTTP endpoint starts with `http://` or `https://`.
///
/// # Errors
/// Returns [`ConfigError::InvalidFormat`] when the string does not start with
/// a valid HTTP scheme.
pub fn validate_http_endpoint(
    var: &'static str,
    value: &str,
) -> std::result::Result<(), ConfigError> {
    let value = value.trim();
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidFormat {
            var,
            reason: "must start with http:// or https://",
        })
    }
}
