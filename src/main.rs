use std::error::Error;

use tracing::{Level, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load environment variables from .env file when present.
    // Variables already set in the environment take precedence.
    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            return Err(err.into());
        }
    }

    let level = std::env::var("QA_LOG_LEVEL")
        .ok()
        .and_then(|v| v.parse::<Level>().ok())
        .unwrap_or(Level::DEBUG);

    tracing_subscriber::registry()
        .with(api::telemetry::env_filter_with_level("info", level))
        .with(api::telemetry::layer())
        .init();

    if let Err(err) = api::start().await {
        error!(error = %err, "member QA service failed");
        return Err(err.into());
    }

    Ok(())
}
