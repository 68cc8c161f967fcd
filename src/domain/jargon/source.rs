//! Definition source traits
//!
//! Both seams degrade to `None` instead of failing: retries, backoff and
//! diagnostics are the implementation's concern.

use async_trait::async_trait;

/// Networked knowledge source that returns a summary for a term
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KnowledgeSource: Send + Sync {
    /// Fetches a summary for the term, or `None` if none was found
    async fn fetch(&self, term: &str) -> Option<String>;
}

/// Generative capability used when no structured definition was found
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DefinitionGenerator: Send + Sync {
    /// Generates a short definition for the term, or `None` on failure
    async fn generate_definition(&self, term: &str) -> Option<String>;
}
