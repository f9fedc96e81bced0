//! Answer normalization and the single correctness rule.
//!
//! Comparison is deliberately forgiving of case, punctuation, and
//! whitespace, and deliberately unforgiving of everything else: no
//! synonyms, no partial credit, no fuzzy matching. "colour" does not
//! match "color"; that is a known limitation, not a bug.

/// Canonical form used on both the learner's input and the expected
/// meaning: trim, lowercase, then keep only ASCII letters.
#[must_use]
pub fn normalize(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .filter(char::is_ascii_lowercase)
        .collect()
}

/// Two answers match iff their normalized forms are identical strings
/// (both empty included).
#[must_use]
pub fn answers_match(guess: &str, expected: &str) -> bool {
    normalize(guess) == normalize(expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_lowercases_and_strips() {
        assert_eq!(normalize("Hello!"), "hello");
        assert_eq!(normalize("  hello"), "hello");
        assert_eq!(normalize("  He said, 'Hi 2 you'!  "), "hesaidhiyou");
    }

    #[test]
    fn normalize_drops_accents_and_digits() {
        assert_eq!(normalize("dhanyavādaḥ"), "dhanyavda");
        assert_eq!(normalize("42"), "");
    }

    #[test]
    fn normalize_is_idempotent() {
        for s in ["Hello!", "  mixed CASE 99 ", "नमस्ते", "", "a-b_c"] {
            assert_eq!(normalize(&normalize(s)), normalize(s));
        }
    }

    #[test]
    fn matching_ignores_case_and_punctuation() {
        assert!(answers_match("HELLO", "hello"));
        assert!(answers_match("Hello.", "hello"));
        assert!(!answers_match("hi", "hello"));
    }

    #[test]
    fn both_empty_match() {
        assert!(answers_match("  ", "!!!"));
    }
}
