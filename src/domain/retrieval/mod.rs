//! Passage retrieval domain

use std::fmt::Debug;

use async_trait::async_trait;

use crate::domain::DomainError;

/// Passage used when retrieval produced nothing at all
pub const GENERIC_PASSAGE: &str =
    "This is a generic passage to provide some context for hypothesis generation.";

/// Number of leading observation words used to label fallback passages
const FALLBACK_KEYWORDS: usize = 5;

/// Retrieves background passages relevant to a query
#[async_trait]
pub trait PassageRetriever: Send + Sync + Debug {
    /// Returns up to `k` passages for the query
    async fn retrieve(&self, query: &str, k: usize) -> Result<Vec<String>, DomainError>;
}

/// Placeholder passages used when the retriever fails or is not configured
pub fn fallback_passages(observation: &str) -> Vec<String> {
    let keywords = observation
        .split_whitespace()
        .take(FALLBACK_KEYWORDS)
        .collect::<Vec<_>>()
        .join(" ");

    vec![
        format!("Passage related to {}...", keywords),
        "General scientific knowledge passage...".to_string(),
        "Placeholder for relevant scientific context...".to_string(),
    ]
}
