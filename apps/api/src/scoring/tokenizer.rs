//! Splits free text into deduplicated, significant lower-case words.

use std::collections::HashSet;

/// Tokens of this many characters or fewer are never significant.
const MIN_TOKEN_CHARS: usize = 3;

/// Normalizes `text` into the ordered set of significant words it contains.
///
/// Punctuation becomes a word break, tokens shorter than three characters and
/// stopwords are dropped, and only the first occurrence of each token is kept.
pub fn tokenize(text: &str, stopwords: &HashSet<String>) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    let mut seen = HashSet::new();
    cleaned
        .split_whitespace()
        .filter(|w| w.chars().count() >= MIN_TOKEN_CHARS && !stopwords.contains(*w))
        .filter(|w| seen.insert(*w))
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::vocabulary::Vocabulary;
    use proptest::prelude::*;

    fn stopwords() -> HashSet<String> {
        Vocabulary::default().stopwords.into_iter().collect()
    }

    #[test]
    fn test_empty_input_yields_no_tokens() {
        assert!(tokenize("", &stopwords()).is_empty());
        assert!(tokenize("   \n\t ", &stopwords()).is_empty());
    }

    #[test]
    fn test_filters_short_words_and_stopwords() {
        let tokens = tokenize("I led a team and achieved results", &stopwords());
        assert_eq!(tokens, vec!["led", "team", "achieved", "results"]);
    }

    #[test]
    fn test_relative_pronouns_are_not_keywords() {
        let tokens = tokenize("Looking for a leader who achieved results", &stopwords());
        assert_eq!(tokens, vec!["looking", "leader", "achieved", "results"]);
    }

    #[test]
    fn test_lowercases_and_dedups_in_first_seen_order() {
        let tokens = tokenize("Rust rust RUST python Rust", &stopwords());
        assert_eq!(tokens, vec!["rust", "python"]);
    }

    #[test]
    fn test_punctuation_splits_words() {
        let tokens = tokenize("node.js, CI/CD; (kubernetes)", &stopwords());
        assert_eq!(tokens, vec!["node", "kubernetes"]);
    }

    #[test]
    fn test_underscore_and_digits_are_word_chars() {
        let tokens = tokenize("snake_case python3 42x", &stopwords());
        assert_eq!(tokens, vec!["snake_case", "python3", "42x"]);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // "ün" is two characters even though it is three bytes
        assert!(tokenize("ün", &stopwords()).is_empty());
        assert_eq!(tokenize("über", &stopwords()), vec!["über"]);
    }

    #[test]
    fn test_custom_stopwords_respected() {
        let custom: HashSet<String> = ["team".to_string()].into_iter().collect();
        assert_eq!(tokenize("the team", &custom), vec!["the"]);
    }

    proptest! {
        #[test]
        fn prop_tokens_are_unique_long_and_not_stopwords(text in "[A-Za-z ,.!-]{0,200}") {
            let stop = stopwords();
            let tokens = tokenize(&text, &stop);
            let unique: HashSet<_> = tokens.iter().collect();
            prop_assert_eq!(unique.len(), tokens.len());
            for t in &tokens {
                prop_assert!(t.chars().count() > 2);
                prop_assert!(!stop.contains(t));
            }
        }

        #[test]
        fn prop_retokenizing_is_idempotent(text in "\\PC{0,200}") {
            let stop = stopwords();
            let once = tokenize(&text, &stop);
            let twice = tokenize(&once.join(" "), &stop);
            prop_assert_eq!(once, twice);
        }
    }
}
