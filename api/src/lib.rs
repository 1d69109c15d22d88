use std::sync::Arc;

mod core;
mod error_handler;
mod routes;

pub mod telemetry;

pub use crate::core::app_state::AppState;
pub use error_handler::{AppError, AppResult};

use axum::{Router, routing::get};
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info};

use crate::routes::{
    ask::ask_route::{ask_get, ask_post},
    health_route::health,
};

/// Listen address used when `API_ADDRESS` is not set.
pub const DEFAULT_API_ADDRESS: &str = "0.0.0.0:8000";

/// Build the API router for the given state.
///
/// CORS is open to every origin, method and header.
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/ask", get(ask_get).post(ask_post))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Load config from env, bind `API_ADDRESS` and serve until Ctrl+C.
pub async fn start() -> Result<(), AppError> {
    let host_url = std::env::var("API_ADDRESS")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_ADDRESS.to_string());

    let state = Arc::new(AppState::from_env()?);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&host_url)
        .await
        .map_err(|source| AppError::Bind {
            address: host_url.clone(),
            source,
        })?;
    info!(address = %host_url, "member QA service listening");

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    info!("member QA service stopped");
    Ok(())
}

/// Returns a future that resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(err) => {
            // Without a signal handler, keep serving until the process is killed.
            error!(error = %err, "failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
