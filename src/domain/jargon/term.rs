//! Jargon term extraction and normalization

/// Maximum number of whitespace-separated words in a jargon term
pub const MAX_TERM_WORDS: usize = 3;

/// Normalizes a term for case-insensitive lookups.
///
/// Surrounding whitespace is trimmed, inner whitespace runs collapse to a
/// single space and the result is lowercased.
pub fn normalize_term(term: &str) -> String {
    term.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Returns true when the trimmed term is non-empty and short enough
pub fn is_valid_term(term: &str) -> bool {
    let words = term.split_whitespace().count();
    words > 0 && words <= MAX_TERM_WORDS
}

/// Extracts candidate jargon terms from a comma-separated model answer.
///
/// Case is preserved; blank pieces and phrases longer than
/// [`MAX_TERM_WORDS`] words are dropped.
pub fn extract_terms(raw: &str) -> Vec<String> {
    raw.trim()
        .split(',')
        .map(str::trim)
        .filter(|term| is_valid_term(term))
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_term() {
        assert_eq!(normalize_term("  Climate   Change "), "climate change");
        assert_eq!(normalize_term("AI"), "ai");
    }

    #[test]
    fn test_is_valid_term() {
        assert!(is_valid_term("overfishing"));
        assert!(is_valid_term("  marine  biodiversity "));
        assert!(is_valid_term("a b c"));
        assert!(!is_valid_term("a b c d"));
        assert!(!is_valid_term("   "));
    }

    #[test]
    fn test_extract_terms() {
        let terms = extract_terms(
            " Overfishing, Marine biodiversity ,, a rather long descriptive phrase, AI ",
        );
        assert_eq!(terms, vec!["Overfishing", "Marine biodiversity", "AI"]);
    }

    #[test]
    fn test_extract_terms_empty() {
        assert!(extract_terms("").is_empty());
        assert!(extract_terms(" , , ").is_empty());
    }
}
