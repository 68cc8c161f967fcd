//! Concurrent jargon resolution
//!
//! Every term walks cache → glossary → knowledge source → generator; the
//! first stage that produces a definition wins and the record is cached.
//! All terms are joined on the caller's task, and a panic while resolving
//! one term yields an empty record for that term only.

use std::fmt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::future::join_all;
use futures::FutureExt;
use tracing::{debug, error, info};

use crate::domain::jargon::{
    normalize_term, DefinitionCache, DefinitionGenerator, DefinitionRecord, DefinitionSource,
    Glossary, JargonDefinitions, KnowledgeSource,
};

/// Resolves jargon terms to definition records
pub struct JargonResolver {
    cache: Arc<dyn DefinitionCache>,
    glossary: Glossary,
    knowledge_source: Arc<dyn KnowledgeSource>,
    generator: Arc<dyn DefinitionGenerator>,
}

impl JargonResolver {
    pub fn new(
        cache: Arc<dyn DefinitionCache>,
        glossary: Glossary,
        knowledge_source: Arc<dyn KnowledgeSource>,
        generator: Arc<dyn DefinitionGenerator>,
    ) -> Self {
        Self {
            cache,
            glossary,
            knowledge_source,
            generator,
        }
    }

    pub fn cache(&self) -> &Arc<dyn DefinitionCache> {
        &self.cache
    }

    /// Resolves every term concurrently.
    ///
    /// Every input term is a key of the result; duplicates are resolved
    /// independently and collapse into one key.
    pub async fn resolve(&self, terms: &[String]) -> JargonDefinitions {
        let resolutions = terms.iter().map(|term| {
            AssertUnwindSafe(self.resolve_term(term))
                .catch_unwind()
                .map(move |outcome| {
                    let record = outcome.unwrap_or_else(|_| {
                        error!(term = %term, "Jargon resolution panicked, returning no definitions");
                        DefinitionRecord::new()
                    });

                    (term.clone(), record)
                })
        });

        join_all(resolutions).await.into_iter().collect()
    }

    async fn resolve_term(&self, term: &str) -> DefinitionRecord {
        let key = normalize_term(term);

        if let Some(record) = self.cache.get(&key).await {
            debug!(term, "Definition cache hit");
            return record;
        }

        info!(term, "Querying for term");

        let record = self.resolve_uncached(term.trim()).await;
        self.cache.put(&key, record.clone()).await;

        record
    }

    async fn resolve_uncached(&self, term: &str) -> DefinitionRecord {
        if let Some(definition) = self.glossary.lookup(term) {
            return DefinitionRecord::from_source(DefinitionSource::Local, definition);
        }

        if let Some(extract) = self.knowledge_source.fetch(term).await {
            let record = DefinitionRecord::from_source(DefinitionSource::ScientificSources, extract);

            if !record.is_empty() {
                return record;
            }
        }

        match self.generator.generate_definition(term).await {
            Some(definition) => DefinitionRecord::from_source(DefinitionSource::Gpt, definition),
            None => DefinitionRecord::new(),
        }
    }
}

impl fmt::Debug for JargonResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JargonResolver")
            .field("cache", &self.cache)
            .field("glossary_entries", &self.glossary.len())
            .finish_non_exhaustive()
    }
}
