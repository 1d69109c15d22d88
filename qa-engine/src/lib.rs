//! Keyword-overlap question answering over member messages.
//!
//! Public API: [`handle_question`]. It validates and tokenizes the question,
//! fetches messages through a [`MessageSource`], scores every message by
//! distinct token overlap, and returns the answer text of the first
//! best-scoring message (or [`NO_ANSWER`]).

mod error;
mod source;

pub mod scorer;
pub mod text;
pub mod tokenizer;

pub use error::QaError;
pub use scorer::{Match, NO_ANSWER, answer_for, best_match, score};
pub use source::{FetchFuture, MessageSource};
pub use text::{build_searchable_text, extract_answer_from_message};
pub use tokenizer::{STOPWORDS, token_set, tokenize};

use tracing::{debug, info, instrument};

/// Answers one question.
///
/// # Errors
/// - [`QaError::EmptyQuestion`] if the trimmed question is empty
/// - [`QaError::NoTokens`] if nothing survives tokenization
/// - [`QaError::Upstream`] if the fetch fails
/// - [`QaError::NoMessages`] if upstream returned no messages
///
/// # Example
/// ```no_run
/// # use messages_client::{MessagesClient, MessagesClientConfig};
/// # #[tokio::main] async fn main() {
/// let client = MessagesClient::new(MessagesClientConfig::default()).unwrap();
/// let answer = qa_engine::handle_question(&client, "What does Alice like?")
///     .await
///     .unwrap();
/// println!("{answer}");
/// # }
/// ```
#[instrument(skip_all)]
pub async fn handle_question(
    source: &dyn MessageSource,
    raw_question: &str,
) -> Result<String, QaError> {
    let question = raw_question.trim();
    if question.is_empty() {
        return Err(QaError::EmptyQuestion);
    }

    let question_tokens = tokenize(question);
    if question_tokens.is_empty() {
        return Err(QaError::NoTokens);
    }
    debug!(tokens = ?question_tokens, "question tokenized");

    let messages = source.fetch_messages().await?;
    if messages.is_empty() {
        return Err(QaError::NoMessages);
    }

    let answer = match best_match(&question_tokens, &messages) {
        Some(m) => {
            info!(
                score = m.score,
                index = m.index,
                candidates = messages.len(),
                "matched member message"
            );
            m.answer()
        }
        None => {
            info!(candidates = messages.len(), "no member message overlaps");
            NO_ANSWER.to_string()
        }
    };

    Ok(answer)
}
