use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use messages_client::{ConfigError, MessagesError};
use qa_engine::QaError;
use serde::Serialize;
use thiserror::Error;

/// Public application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // --- Boot / config ---
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to build messages client: {0}")]
    Client(#[source] MessagesError),

    // --- IO / network / server ---
    #[error("failed to bind listener on {address}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error")]
    Server(#[source] std::io::Error),

    // --- Request / routing ---
    /// Request could not be extracted (missing `question`, malformed JSON, ...).
    #[error("{0}")]
    Unprocessable(String),

    /// Failure answering a question, with its own status mapping.
    #[error(transparent)]
    Qa(#[from] QaError),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 4xx
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,

            // mapped from the QA taxonomy
            AppError::Qa(e) => StatusCode::from_u16(e.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),

            // 5xx, startup-only
            AppError::Config(_)
            | AppError::Client(_)
            | AppError::Bind { .. }
            | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Client(_) => "CLIENT_ERROR",
            AppError::Bind { .. } => "BIND_ERROR",
            AppError::Server(_) => "SERVER_ERROR",
            AppError::Unprocessable(_) => "UNPROCESSABLE_ENTITY",
            AppError::Qa(e) => e.code(),
        }
    }
}

/// Error payload. `detail` repeats `message` for clients that read the
/// `{"detail": ...}` shape.
#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
    detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();
        let body = ErrorBody {
            error: self.error_code(),
            detail: message.clone(),
            message,
        };
        (status, Json(body)).into_response()
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;

impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(err: axum::extract::rejection::JsonRejection) -> Self {
        AppError::Unprocessable(err.body_text())
    }
}

impl From<axum::extract::rejection::QueryRejection> for AppError {
    fn from(err: axum::extract::rejection::QueryRejection) -> Self {
        AppError::Unprocessable(err.body_text())
    }
}
