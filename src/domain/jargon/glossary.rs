//! Local glossary of well-known domain terms

use std::collections::HashMap;

use super::term::normalize_term;

const BUILTIN_ENTRIES: &[(&str, &str)] = &[
    (
        "Hypothetical induction",
        "A reasoning process where scientists propose hypotheses to explain observations.",
    ),
    (
        "Open-domain",
        "Refers to data or questions that are not confined to a specific subject area.",
    ),
    (
        "AI",
        "Artificial Intelligence; the simulation of human intelligence processes by machines.",
    ),
    (
        "Personalized medicine",
        "A medical model that separates people into different groups, with medical decisions, \
         practices, and/or products being tailored to the individual patient.",
    ),
    (
        "Patient outcomes",
        "The results of medical treatment, including quality of life, side effects, and mortality rates.",
    ),
    (
        "Marine biodiversity",
        "The variety of life in marine ecosystems, including the diversity of plants, animals, \
         and microorganisms.",
    ),
    (
        "Overfishing",
        "The removal of a species of fish from a body of water at a rate that the species cannot \
         replenish, resulting in diminished fish populations.",
    ),
    (
        "Climate change",
        "Long-term shifts in temperatures and weather patterns, primarily caused by human activities.",
    ),
    (
        "Global warming",
        "The long-term heating of Earth's surface observed since the pre-industrial period due to \
         human activities.",
    ),
];

/// Static term to definition table with case-insensitive exact matching
#[derive(Debug, Clone)]
pub struct Glossary {
    entries: HashMap<String, String>,
}

impl Glossary {
    /// Creates an empty glossary
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Creates the glossary with the built-in domain terms
    pub fn builtin() -> Self {
        Self::empty().extend(BUILTIN_ENTRIES.iter().copied())
    }

    /// Adds or replaces a single entry
    pub fn with_entry(mut self, term: impl AsRef<str>, definition: impl Into<String>) -> Self {
        self.entries
            .insert(normalize_term(term.as_ref()), definition.into());
        self
    }

    /// Adds or replaces several entries
    pub fn extend<I, K, V>(self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        entries
            .into_iter()
            .fold(self, |glossary, (term, definition)| {
                glossary.with_entry(term, definition)
            })
    }

    pub fn lookup(&self, term: &str) -> Option<&str> {
        self.entries.get(&normalize_term(term)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Glossary {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup_is_case_insensitive() {
        let glossary = Glossary::builtin();

        let expected = glossary.lookup("Overfishing").unwrap();
        assert!(expected.starts_with("The removal of a species of fish"));
        assert_eq!(glossary.lookup("overfishing"), Some(expected));
        assert_eq!(glossary.lookup("OVERFISHING"), Some(expected));
        assert_eq!(glossary.lookup("  climate   change "), glossary.lookup("Climate change"));
    }

    #[test]
    fn test_builtin_contains_all_entries() {
        assert_eq!(Glossary::builtin().len(), BUILTIN_ENTRIES.len());
    }

    #[test]
    fn test_exact_match_only() {
        let glossary = Glossary::builtin();
        assert!(glossary.lookup("overfish").is_none());
        assert!(glossary.lookup("climate").is_none());
    }

    #[test]
    fn test_extend_overrides_builtin() {
        let glossary = Glossary::builtin()
            .extend([("AI", "Custom"), ("Photosynthesis", "Light to sugar")]);

        assert_eq!(glossary.lookup("ai"), Some("Custom"));
        assert_eq!(glossary.lookup("photosynthesis"), Some("Light to sugar"));
    }

    #[test]
    fn test_empty() {
        let glossary = Glossary::empty();
        assert!(glossary.is_empty());
        assert!(glossary.lookup("AI").is_none());
    }
}
