//! Guess extraction from model replies.
//!
//! Pure text pattern matching, no I/O. The reply is lowercased and tried
//! against the patterns below in priority order; the first pattern that
//! matches decides the result.
//!
//! | Priority | Form | Example |
//! |----------|------|---------|
//! | 1 | explicit marker | `GUESS: elephant` |
//! | 2 | hypothesis question | `Is it an apple?` |
//! | 3 | statement phrases | `I think it's gold`, `The word is ocean` |
//!
//! The captured token runs up to the next whitespace or sentence
//! punctuation (`.`, `?`, `!`).

use regex::Regex;
use std::sync::LazyLock;

/// Captured word: everything up to whitespace or sentence punctuation.
const TOKEN: &str = r"([^\s.?!]+)";

/// Candidates that are never accepted as a guess.
const REJECTED_WORDS: [&str; 3] = ["a", "an", "the"];

static GUESS_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"guess\s*:\s*",
        // An article is only skipped together with its trailing whitespace,
        // so "alive" or "another" are captured whole.
        r"is\s+it\s+(?:(?:a|an|the)\s+)?",
        r"i\s+think\s+it'?s\s+",
        r"i\s+believe\s+it'?s\s+",
        r"it\s+must\s+be\s+",
        r"the\s+word\s+is\s+",
        r"my\s+guess\s+is\s+",
    ]
    .iter()
    .map(|prefix| {
        Regex::new(&format!("{prefix}{TOKEN}")).expect("guess pattern must compile")
    })
    .collect()
});

/// Extract the guessed word from a model reply, if the reply is a guess.
///
/// Matching is case-insensitive and the returned word is lowercase, with
/// surrounding quote characters removed. A candidate of one character, or an
/// article (`a`, `an`, `the`), is rejected. A rejected candidate ends the
/// scan: later, lower-priority patterns are only consulted when the earlier
/// ones do not match at all.
///
/// # Examples
///
/// ```
/// use twentyq_domain::guess::extract_guess;
///
/// assert_eq!(extract_guess("GUESS: elephant."), Some("elephant".to_string()));
/// assert_eq!(extract_guess("Is it an apple?"), Some("apple".to_string()));
/// assert_eq!(extract_guess("I think it's gold"), Some("gold".to_string()));
/// assert_eq!(extract_guess("That is interesting."), None);
/// ```
pub fn extract_guess(text: &str) -> Option<String> {
    let lowered = text.to_lowercase();

    for pattern in GUESS_PATTERNS.iter() {
        if let Some(captures) = pattern.captures(&lowered) {
            return captures.get(1).and_then(|m| accept_candidate(m.as_str()));
        }
    }

    None
}

/// Clean a captured token and apply the acceptance filter.
fn accept_candidate(raw: &str) -> Option<String> {
    let cleaned: String = raw.trim().chars().filter(|c| !matches!(c, '"' | '\'')).collect();
    let cleaned = cleaned.trim();

    if cleaned.chars().count() <= 1 || REJECTED_WORDS.contains(&cleaned) {
        return None;
    }

    Some(cleaned.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guess(text: &str) -> Option<String> {
        extract_guess(text)
    }

    // ==================== Explicit marker ====================

    #[test]
    fn test_explicit_guess_marker() {
        assert_eq!(guess("GUESS: elephant."), Some("elephant".to_string()));
    }

    #[test]
    fn test_explicit_guess_marker_spacing_and_case() {
        assert_eq!(guess("My final answer... Guess : Piano!"), Some("piano".to_string()));
        assert_eq!(guess("guess:tree"), Some("tree".to_string()));
    }

    #[test]
    fn test_explicit_guess_strips_quotes() {
        assert_eq!(guess(r#"GUESS: "banana""#), Some("banana".to_string()));
        assert_eq!(guess("GUESS: 'kettle'"), Some("kettle".to_string()));
    }

    #[test]
    fn test_explicit_guess_takes_priority_over_is_it() {
        assert_eq!(
            guess("Is it a dog? No wait. GUESS: wolf"),
            Some("wolf".to_string())
        );
    }

    // ==================== Hypothesis question ====================

    #[test]
    fn test_is_it_with_article_a() {
        assert_eq!(guess("Is it a cat?"), Some("cat".to_string()));
    }

    #[test]
    fn test_is_it_with_article_an() {
        assert_eq!(guess("Is it an apple?"), Some("apple".to_string()));
    }

    #[test]
    fn test_is_it_with_article_the() {
        assert_eq!(guess("Is it the ocean?"), Some("ocean".to_string()));
    }

    #[test]
    fn test_is_it_mid_sentence() {
        assert_eq!(
            guess("Let's continue, is it alive?"),
            Some("alive".to_string())
        );
    }

    #[test]
    fn test_is_it_words_starting_with_article_letters() {
        assert_eq!(guess("Is it another animal?"), Some("another".to_string()));
        assert_eq!(guess("Is it theatrical?"), Some("theatrical".to_string()));
    }

    #[test]
    fn test_is_it_bare_article_rejected() {
        assert_eq!(guess("Is it a?"), None);
        assert_eq!(guess("Is it the"), None);
    }

    // ==================== Statement phrases ====================

    #[test]
    fn test_i_think_its() {
        assert_eq!(guess("I think it's gold"), Some("gold".to_string()));
        assert_eq!(guess("I think its gold"), Some("gold".to_string()));
    }

    #[test]
    fn test_i_believe_its() {
        assert_eq!(guess("I believe it's a... no. I believe it's silver."), None);
        assert_eq!(guess("I believe it's silver."), Some("silver".to_string()));
    }

    #[test]
    fn test_it_must_be() {
        assert_eq!(guess("Then it must be paper!"), Some("paper".to_string()));
    }

    #[test]
    fn test_the_word_is() {
        assert_eq!(guess("The word is rainbow."), Some("rainbow".to_string()));
    }

    #[test]
    fn test_my_guess_is() {
        assert_eq!(guess("My guess is lighthouse"), Some("lighthouse".to_string()));
    }

    #[test]
    fn test_statement_patterns_in_priority_order() {
        // "i think it's" outranks "the word is"
        assert_eq!(
            guess("The word is tricky, but I think it's candle."),
            Some("candle".to_string())
        );
    }

    // ==================== Rejection ====================

    #[test]
    fn test_rejected_candidate_does_not_fall_through() {
        // "guess:" matches with a one-letter token; the later
        // "i think it's" phrase is not consulted.
        assert_eq!(guess("Guess: I think it's gold"), None);
    }

    #[test]
    fn test_single_character_rejected() {
        assert_eq!(guess("GUESS: x"), None);
    }

    #[test]
    fn test_quote_only_token_rejected() {
        assert_eq!(guess(r#"GUESS: """#), None);
    }

    // ==================== No guess ====================

    #[test]
    fn test_plain_question_is_not_a_guess() {
        assert_eq!(guess("Does it have fur?"), None);
        assert_eq!(guess("Can you hold it in your hand?"), None);
    }

    #[test]
    fn test_no_pattern_matches() {
        assert_eq!(guess("That is interesting."), None);
        assert_eq!(guess(""), None);
    }

    #[test]
    fn test_deterministic() {
        let text = "Hmm, is it a lantern?";
        assert_eq!(guess(text), guess(text));
    }
}
