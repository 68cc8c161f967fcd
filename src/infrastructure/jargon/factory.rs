use std::sync::Arc;

use super::{
    DisabledDefinitionGenerator, JargonResolver, LlmDefinitionGenerator, RetryPolicy,
    SummaryKnowledgeSource, SummarySourceConfig,
};
use crate::config::JargonConfig;
use crate::domain::{DefinitionGenerator, DomainError, Glossary, LlmProvider};
use crate::infrastructure::cache::{InMemoryCacheConfig, InMemoryDefinitionCache};
use crate::infrastructure::http_client::HttpClient;

/// Factory for wiring a jargon resolver from configuration
#[derive(Debug)]
pub struct JargonResolverFactory;

impl JargonResolverFactory {
    /// Builds a resolver with a fresh cache, the built-in glossary merged with
    /// configured entries, and one shared HTTP client for summary lookups.
    ///
    /// Without a provider the generative stage is disabled.
    pub fn create(
        config: &JargonConfig,
        provider: Option<Arc<dyn LlmProvider>>,
        model: impl Into<String>,
    ) -> Result<JargonResolver, DomainError> {
        let cache = InMemoryDefinitionCache::with_config(
            InMemoryCacheConfig::default()
                .with_max_capacity(config.cache_capacity)
                .with_ttl(config.cache_ttl()),
        );

        let glossary = Glossary::builtin().extend(config.glossary.iter());

        let http_client = HttpClient::with_timeout(config.request_timeout())?;
        let source_config = SummarySourceConfig {
            base_url: config.summary_base_url.clone(),
            user_agent: config.user_agent.clone(),
            pacing_interval: config.pacing_interval(),
            retry: RetryPolicy::new(config.lookup_max_attempts, config.backoff_base()),
        };
        let knowledge_source = SummaryKnowledgeSource::new(http_client, source_config)?;

        let generator: Arc<dyn DefinitionGenerator> = match provider {
            Some(provider) => Arc::new(LlmDefinitionGenerator::new(provider, model).with_retry(
                RetryPolicy::new(config.generation_max_attempts, config.backoff_base()),
            )),
            None => Arc::new(DisabledDefinitionGenerator),
        };

        Ok(JargonResolver::new(
            Arc::new(cache),
            glossary,
            Arc::new(knowledge_source),
            generator,
        ))
    }
}
