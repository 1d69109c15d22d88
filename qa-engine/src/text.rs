//! Searchable and human-readable text derived from a [`MemberMessage`].

use messages_client::MemberMessage;

/// Author and body joined by a space; used only as scoring input.
///
/// Falls back to [`MemberMessage::render`] when neither field is present,
/// so the result is never empty.
pub fn build_searchable_text(msg: &MemberMessage) -> String {
    let parts: Vec<_> = [msg.user_name(), msg.message()]
        .into_iter()
        .flatten()
        .collect();

    if parts.is_empty() {
        msg.render()
    } else {
        parts.join(" ")
    }
}

/// Answer payload for a chosen message: `"{user_name}: {message}"`, the bare
/// message, or the rendered record.
pub fn extract_answer_from_message(msg: &MemberMessage) -> String {
    match (msg.user_name(), msg.message()) {
        (Some(user), Some(text)) => format!("{user}: {text}"),
        (None, Some(text)) => text.into_owned(),
        _ => msg.render(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn msg(v: serde_json::Value) -> MemberMessage {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn searchable_joins_author_and_body() {
        let m = msg(json!({"user_name": "Alice", "message": "I like hiking", "id": 1}));
        assert_eq!(build_searchable_text(&m), "Alice I like hiking");
    }

    #[test]
    fn searchable_uses_whichever_field_exists() {
        assert_eq!(build_searchable_text(&msg(json!({"user_name": "Bob"}))), "Bob");
        assert_eq!(build_searchable_text(&msg(json!({"message": "hey"}))), "hey");
    }

    #[test]
    fn searchable_is_never_empty() {
        assert_eq!(build_searchable_text(&msg(json!({}))), "{}");
        let m = msg(json!({"user_name": "", "note": "Lisbon"}));
        assert_eq!(build_searchable_text(&m), r#"{"note":"Lisbon","user_name":""}"#);
    }

    #[test]
    fn answer_formats() {
        let both = msg(json!({"user_name": "Alice", "message": "I like hiking"}));
        assert_eq!(extract_answer_from_message(&both), "Alice: I like hiking");

        let body_only = msg(json!({"message": "Going to Rome"}));
        assert_eq!(extract_answer_from_message(&body_only), "Going to Rome");
    }

    #[test]
    fn zero_author_is_skipped() {
        let m = msg(json!({"user_name": 0, "message": "hi"}));
        assert_eq!(extract_answer_from_message(&m), "hi");
        assert_eq!(build_searchable_text(&m), "hi");
    }

    #[test]
    fn false_body_falls_back_to_record() {
        let m = msg(json!({"user_name": "Al", "message": false}));
        assert_eq!(
            extract_answer_from_message(&m),
            r#"{"message":false,"user_name":"Al"}"#
        );
        assert_eq!(build_searchable_text(&m), "Al");
    }

    #[test]
    fn answer_without_body_renders_record() {
        let m = msg(json!({"user_name": "Alice", "id": "x"}));
        assert_eq!(extract_answer_from_message(&m), r#"{"id":"x","user_name":"Alice"}"#);
    }
}
