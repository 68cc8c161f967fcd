use std::sync::Arc;

use super::OpenAiProvider;
use crate::config::LlmConfig;
use crate::domain::{DomainError, LlmProvider};
use crate::infrastructure::http_client::HttpClient;

/// Factory for creating LLM providers
#[derive(Debug)]
pub struct LlmProviderFactory;

impl LlmProviderFactory {
    /// Create the configured OpenAI-compatible provider
    pub fn create(config: &LlmConfig) -> Result<Arc<dyn LlmProvider>, DomainError> {
        let api_key = config.resolve_api_key().ok_or_else(|| {
            DomainError::configuration("No LLM API key configured (set llm.api_key or OPENAI_API_KEY)")
        })?;

        let http_client = HttpClient::with_timeout(config.timeout())?;

        Ok(Arc::new(OpenAiProvider::with_base_url(
            http_client,
            api_key,
            &config.base_url,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_with_configured_key() {
        let config = LlmConfig {
            api_key: Some("sk-test".to_string()),
            ..LlmConfig::default()
        };

        let provider = LlmProviderFactory::create(&config).unwrap();
        assert_eq!(provider.provider_name(), "openai");
    }
}
