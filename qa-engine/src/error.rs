//! Typed error for the qa-engine crate.

use messages_client::MessagesError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QaError {
    /// Question was empty after trimming.
    #[error("Question must not be empty")]
    EmptyQuestion,

    /// Question contained only stopwords, digits or punctuation.
    #[error("Could not parse meaningful tokens from question")]
    NoTokens,

    /// Upstream fetch failed; the message is passed through unchanged.
    #[error(transparent)]
    Upstream(#[from] MessagesError),

    /// Upstream answered with an empty collection.
    #[error("No messages available from upstream API")]
    NoMessages,
}

impl QaError {
    /// HTTP status the boundary layer should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            QaError::EmptyQuestion | QaError::NoTokens => 400,
            QaError::Upstream(e) => match e {
                MessagesError::PaymentRequired => 503,
                MessagesError::Transport(_) | MessagesError::HttpStatus { .. } => 502,
                MessagesError::Format { .. } | MessagesError::Config(_) => 500,
            },
            QaError::NoMessages => 500,
        }
    }

    /// Stable, machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            QaError::EmptyQuestion => "EMPTY_QUESTION",
            QaError::NoTokens => "NO_TOKENS",
            QaError::Upstream(e) => match e {
                MessagesError::PaymentRequired => "UPSTREAM_UNAVAILABLE",
                MessagesError::Transport(_) | MessagesError::HttpStatus { .. } => "BAD_GATEWAY",
                MessagesError::Format { .. } => "UPSTREAM_FORMAT",
                MessagesError::Config(_) => "CONFIG_ERROR",
            },
            QaError::NoMessages => "NO_MESSAGES",
        }
    }

    /// True for problems with the question itself rather than the service.
    pub fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }
}
