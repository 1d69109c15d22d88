//! Thin client for `GET {base}/messages`.
//!
//! One call performs exactly one network round trip: no retries, no caching.
//! The body is normalized to a list of [`MemberMessage`]s; both
//! `{ "items": [...] }` and a bare array are accepted.
//!
//! # Examples
//!
//! ```no_run
//! use messages_client::{MessagesClient, MessagesClientConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = MessagesClient::new(MessagesClientConfig::default())?;
//! let messages = client.fetch_messages().await?;
//! println!("fetched {} messages", messages.len());
//! # Ok(()) }
//! ```

use std::time::Duration;

use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::config::MessagesClientConfig;
use crate::error_handler::{MessagesError, Result};
use crate::message::{MemberMessage, is_truthy};

/// Reusable HTTP client bound to one upstream.
#[derive(Debug, Clone)]
pub struct MessagesClient {
    client: reqwest::Client,
    url_messages: String,
}

impl MessagesClient {
    /// Creates a new [`MessagesClient`] from the given config.
    ///
    /// # Errors
    /// - [`MessagesError::Config`] if the config does not validate
    /// - [`MessagesError::Transport`] if the HTTP client cannot be built
    pub fn new(cfg: MessagesClientConfig) -> Result<Self> {
        cfg.validate()?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            url_messages: cfg.messages_url(),
        })
    }

    /// URL this client fetches from.
    pub fn messages_url(&self) -> &str {
        &self.url_messages
    }

    /// Fetches all member messages in upstream order.
    ///
    /// # Errors
    /// - [`MessagesError::PaymentRequired`] for HTTP 402
    /// - [`MessagesError::HttpStatus`] for any other non-2xx response
    /// - [`MessagesError::Transport`] for connect/timeout/body-read failures
    /// - [`MessagesError::Format`] if the body has an unexpected shape
    #[instrument(skip_all, fields(url = %self.url_messages))]
    pub async fn fetch_messages(&self) -> Result<Vec<MemberMessage>> {
        debug!("GET {}", self.url_messages);
        let resp = self.client.get(&self.url_messages).send().await?;

        let status = resp.status();
        if status == StatusCode::PAYMENT_REQUIRED {
            warn!("upstream returned 402 Payment Required");
            return Err(MessagesError::PaymentRequired);
        }
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            let snippet = text.chars().take(240).collect::<String>();
            warn!(%status, %snippet, "upstream returned non-success status");
            return Err(MessagesError::HttpStatus {
                status,
                url: self.url_messages.clone(),
                snippet,
            });
        }

        let body = resp.bytes().await?;
        let messages = decode_messages(&body).inspect_err(|e| {
            if let MessagesError::Format { reason } = e {
                warn!(%reason, "unexpected /messages body");
            }
        })?;

        debug!(count = messages.len(), "fetched member messages");
        Ok(messages)
    }
}

/// Decodes a `/messages` response body.
///
/// Accepted shapes:
/// - `{ "items": [ {...}, ... ] }` (a falsy `items` such as `null`, `{}`,
///   `""`, `0` or `false` counts as empty)
/// - `[ {...}, ... ]`
///
/// # Errors
/// [`MessagesError::Format`] for non-JSON bodies, any other top-level shape,
/// or array entries that are not objects.
pub fn decode_messages(body: &[u8]) -> Result<Vec<MemberMessage>> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| MessagesError::format(format!("body is not JSON: {e}")))?;

    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("items") {
            Some(Value::Array(items)) => items,
            Some(other) if !is_truthy(&other) => Vec::new(),
            Some(other) => {
                return Err(MessagesError::format(format!(
                    "`items` is {}, expected an array",
                    kind(&other)
                )));
            }
            None => return Err(MessagesError::format("object without `items` key")),
        },
        other => {
            return Err(MessagesError::format(format!(
                "top-level {}, expected an object or array",
                kind(&other)
            )));
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::Object(fields) => Ok(MemberMessage::from(fields)),
            other => Err(MessagesError::format(format!(
                "items[{i}] is {}, expected an object",
                kind(&other)
            ))),
        })
        .collect()
}

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
