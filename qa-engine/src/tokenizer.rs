//! Lowercase ASCII word tokenization with stopword filtering.

use std::collections::HashSet;

/// Words that carry no signal for matching questions against messages.
pub const STOPWORDS: &[&str] = &[
    "the", "a", "an", "is", "are", "was", "were", "to", "of", "and", "or", "for", "in", "on", "at",
    "with", "from", "by", "when", "what", "how", "does", "do", "have", "has", "had", "about",
    "planning", "plan", "who", "where", "which", "this", "that", "it", "their", "his", "her",
    "many", "favorite", "favorites",
];

/// Splits `text` into lowercase tokens made of ASCII letters only.
///
/// Anything that is not `[a-zA-Z]` (digits, punctuation, non-Latin letters)
/// separates tokens and is dropped. Stopwords are removed. Never fails; empty
/// input gives an empty vector.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_ascii_alphabetic())
        .filter(|w| !w.is_empty())
        .map(str::to_ascii_lowercase)
        .filter(|w| !is_stopword(w))
        .collect()
}

/// Distinct tokens of `text`.
pub fn token_set(text: &str) -> HashSet<String> {
    tokenize(text).into_iter().collect()
}

fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(&word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_stopwords_case_insensitively() {
        assert_eq!(tokenize("What IS their Favorite color?"), ["color"]);
    }

    #[test]
    fn empty_and_letterless_inputs() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("123 !!!").is_empty());
    }

    #[test]
    fn digits_and_punctuation_split_words() {
        assert_eq!(tokenize("trip2paris, re-booked"), ["trip", "paris", "re", "booked"]);
    }

    #[test]
    fn non_latin_letters_are_separators() {
        assert_eq!(tokenize("café Zürich"), ["caf", "z", "rich"]);
    }

    #[test]
    fn keeps_order_and_duplicates() {
        assert_eq!(tokenize("Paris paris London"), ["paris", "paris", "london"]);
        assert_eq!(token_set("Paris paris London").len(), 2);
    }
}
