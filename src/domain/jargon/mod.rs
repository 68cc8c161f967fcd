//! Jargon domain - terms, definition records and resolution seams

mod cache;
mod definition;
mod glossary;
mod source;
mod term;

pub use cache::DefinitionCache;
pub use definition::{DefinitionRecord, DefinitionSource, JargonDefinitions};
pub use glossary::Glossary;
pub use source::{DefinitionGenerator, KnowledgeSource};
pub use term::{extract_terms, is_valid_term, normalize_term, MAX_TERM_WORDS};

#[cfg(test)]
pub use source::{MockDefinitionGenerator, MockKnowledgeSource};
