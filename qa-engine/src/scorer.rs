//! Keyword-overlap scoring and best-match selection.

use std::collections::HashSet;

use messages_client::MemberMessage;

use crate::text::{build_searchable_text, extract_answer_from_message};
use crate::tokenizer::token_set;

/// Answer returned when no message shares a single token with the question.
pub const NO_ANSWER: &str =
    "Sorry, I couldn't find an answer to that question in the member messages.";

/// Number of distinct tokens shared by the question and `message_text`.
pub fn score(question_tokens: &[String], message_text: &str) -> usize {
    overlap(&question_set(question_tokens), message_text)
}

fn question_set(question_tokens: &[String]) -> HashSet<&str> {
    question_tokens.iter().map(String::as_str).collect()
}

fn overlap(question: &HashSet<&str>, message_text: &str) -> usize {
    token_set(message_text)
        .iter()
        .filter(|t| question.contains(t.as_str()))
        .count()
}

/// Winner of a matching pass.
#[derive(Debug, Clone, Copy)]
pub struct Match<'a> {
    pub score: usize,
    /// Position in the upstream order.
    pub index: usize,
    pub message: &'a MemberMessage,
}

impl Match<'_> {
    pub fn answer(&self) -> String {
        extract_answer_from_message(self.message)
    }
}

/// Single pass over `messages` in order, keeping the first message with the
/// highest score. Only a strictly greater score replaces the current best.
///
/// Returns `None` when every message scores zero (or there are none).
pub fn best_match<'a>(
    question_tokens: &[String],
    messages: &'a [MemberMessage],
) -> Option<Match<'a>> {
    let question = question_set(question_tokens);
    let mut best: Option<Match<'a>> = None;

    for (index, message) in messages.iter().enumerate() {
        let s = overlap(&question, &build_searchable_text(message));
        if best.is_none_or(|b| s > b.score) {
            best = Some(Match {
                score: s,
                index,
                message,
            });
        }
    }

    best.filter(|m| m.score > 0)
}

/// Answer text for `question_tokens` over `messages`, or [`NO_ANSWER`].
pub fn answer_for(question_tokens: &[String], messages: &[MemberMessage]) -> String {
    best_match(question_tokens, messages)
        .map(|m| m.answer())
        .unwrap_or_else(|| NO_ANSWER.to_string())
}
