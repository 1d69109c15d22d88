use std::sync::Arc;

use messages_client::{MessagesClient, MessagesClientConfig};
use qa_engine::MessageSource;

use crate::error_handler::AppError;

/// Shared state for all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// Where member messages come from; the reqwest-backed client in production.
    pub messages: Arc<dyn MessageSource>,
}

impl AppState {
    pub fn new(messages: Arc<dyn MessageSource>) -> Self {
        Self { messages }
    }

    /// Build the production state from environment variables.
    ///
    /// See [`MessagesClientConfig::from_env`] for the variables read.
    pub fn from_env() -> Result<Self, AppError> {
        let cfg = MessagesClientConfig::from_env()?;
        let client = MessagesClient::new(cfg).map_err(AppError::Client)?;
        tracing::info!(url = %client.messages_url(), "messages client ready");
        Ok(Self::new(Arc::new(client)))
    }
}
