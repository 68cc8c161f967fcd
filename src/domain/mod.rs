//! Domain layer - Core types and traits

pub mod error;
pub mod jargon;
pub mod llm;
pub mod retrieval;

pub use error::DomainError;
pub use jargon::{
    extract_terms, normalize_term, DefinitionCache, DefinitionGenerator, DefinitionRecord,
    DefinitionSource, Glossary, JargonDefinitions, KnowledgeSource,
};
pub use llm::{
    FinishReason, LlmProvider, LlmRequest, LlmRequestBuilder, LlmResponse, LlmResponseFormat,
    Message, MessageRole, Usage,
};
pub use retrieval::{fallback_passages, PassageRetriever, GENERIC_PASSAGE};
