//! Moose discovery
//!
//! Scientific jargon resolution and hypothesis generation:
//! - Local glossary, summary lookups and generative fallback per term
//! - Time-bounded, capacity-bounded definition cache
//! - Observation to hypothesis pipeline with passage retrieval

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use domain::LlmProvider;
use infrastructure::{
    http_client::HttpClient,
    jargon::{JargonResolver, JargonResolverFactory},
    llm::LlmProviderFactory,
    retrieval::HttpPassageRetriever,
    services::{DiscoveryConfig, DiscoveryService},
};
use tracing::{info, warn};

/// Create the configured LLM provider
pub fn create_llm_provider(config: &AppConfig) -> anyhow::Result<Arc<dyn LlmProvider>> {
    let provider = LlmProviderFactory::create(&config.llm)?;
    info!(
        provider = provider.provider_name(),
        model = %config.llm.model,
        "LLM provider configured"
    );
    Ok(provider)
}

/// Create a jargon resolver wired from configuration.
///
/// Without an API key the resolver still answers from the glossary and
/// summary lookups; only definition generation is disabled.
pub fn create_jargon_resolver(config: &AppConfig) -> anyhow::Result<JargonResolver> {
    let provider = if config.llm.resolve_api_key().is_some() {
        Some(create_llm_provider(config)?)
    } else {
        warn!("No LLM API key configured, definition generation disabled");
        None
    };

    let resolver = JargonResolverFactory::create(&config.jargon, provider, &config.llm.model)?;
    Ok(resolver)
}

/// Create the discovery service, with passage retrieval when an endpoint is configured
pub fn create_discovery_service(config: &AppConfig) -> anyhow::Result<DiscoveryService> {
    let provider = create_llm_provider(config)?;
    let resolver =
        JargonResolverFactory::create(&config.jargon, Some(provider.clone()), &config.llm.model)?;

    let discovery_config = DiscoveryConfig::default()
        .with_model(&config.llm.model)
        .with_k(config.retrieval.k);
    let service = DiscoveryService::new(provider, resolver, discovery_config);

    match &config.retrieval.url {
        Some(url) => {
            info!(url = %url, k = config.retrieval.k, "Passage retrieval enabled");
            let retriever = HttpPassageRetriever::new(HttpClient::new(), url)?;
            Ok(service.with_retriever(Arc::new(retriever)))
        }
        None => Ok(service),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DefinitionSource;

    fn config_with_key() -> AppConfig {
        let mut config = AppConfig::default();
        config.llm.api_key = Some("sk-test".to_string());
        config
    }

    #[tokio::test]
    async fn test_create_jargon_resolver_resolves_builtin_terms() {
        let resolver = create_jargon_resolver(&config_with_key()).unwrap();

        let result = resolver.resolve(&["Global warming".to_string()]).await;

        assert!(result["Global warming"]
            .get(DefinitionSource::Local)
            .is_some());
    }

    #[tokio::test]
    async fn test_create_jargon_resolver_without_api_key() {
        let mut config = AppConfig::default();
        config.llm.api_key = None;

        let resolver = create_jargon_resolver(&config).unwrap();
        let result = resolver.resolve(&["overfishing".to_string()]).await;

        assert!(result["overfishing"].get(DefinitionSource::Local).is_some());
    }

    #[test]
    fn test_create_discovery_service_rejects_bad_retrieval_url() {
        let mut config = config_with_key();
        config.retrieval.url = Some("not a url".to_string());

        assert!(create_discovery_service(&config).is_err());
    }

    #[test]
    fn test_create_discovery_service() {
        let mut config = config_with_key();
        config.retrieval.url = Some("http://localhost:8893/api/search".to_string());

        assert!(create_discovery_service(&config).is_ok());
    }
}
