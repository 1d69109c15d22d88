use serde::{Deserialize, Serialize};

/// Request payload for `POST /ask`.
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    /// Natural-language question about members.
    pub question: String,
}

/// Query string for `GET /ask?question=...`.
#[derive(Debug, Deserialize)]
pub struct AskQuery {
    pub question: String,
}

/// Response payload for both `/ask` variants.
#[derive(Debug, Serialize)]
pub struct AskResponse {
    /// Best-matching member message, or the fallback sentence.
    pub answer: String,
}
