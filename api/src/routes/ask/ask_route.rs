//! GET/POST /ask: answers a question from member messages.

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use tracing::{debug, instrument, warn};

use crate::{
    core::app_state::AppState,
    error_handler::AppResult,
    routes::ask::ask_request::{AskQuery, AskRequest, AskResponse},
};

/// Handler: GET /ask?question=...
///
/// # Example
/// ```bash
/// curl 'http://127.0.0.1:8000/ask?question=What%20does%20Alice%20like%3F'
/// ```
#[instrument(name = "ask_get", skip_all)]
pub async fn ask_get(
    State(state): State<Arc<AppState>>,
    query: Result<Query<AskQuery>, QueryRejection>,
) -> AppResult<Json<AskResponse>> {
    let Query(q) = query?;
    answer(&state, &q.question).await
}

/// Handler: POST /ask
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8000/ask \
///   -H 'content-type: application/json' \
///   -d '{"question":"What does Alice like?"}'
/// ```
#[instrument(name = "ask_post", skip_all)]
pub async fn ask_post(
    State(state): State<Arc<AppState>>,
    body: Result<Json<AskRequest>, JsonRejection>,
) -> AppResult<Json<AskResponse>> {
    let Json(r) = body?;
    answer(&state, &r.question).await
}

async fn answer(state: &AppState, question: &str) -> AppResult<Json<AskResponse>> {
    match qa_engine::handle_question(state.messages.as_ref(), question).await {
        Ok(answer) => Ok(Json(AskResponse { answer })),
        Err(err) => {
            if err.is_client_error() {
                debug!(code = err.code(), "rejected question");
            } else {
                warn!(code = err.code(), error = %err, "failed to answer question");
            }
            Err(err.into())
        }
    }
}
