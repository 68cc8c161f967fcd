//! Generative definition fallback backed by an LLM provider

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, warn};

use super::retry::RetryPolicy;
use crate::domain::jargon::DefinitionGenerator;
use crate::domain::{DomainError, LlmProvider, LlmRequest};

const DEFINITION_PROMPT: &str =
    "Provide a brief definition for the term '{term}' in the context of scientific research:";

fn render_prompt(term: &str) -> String {
    DEFINITION_PROMPT.replace("{term}", term)
}

/// Asks an LLM for a short definition, retrying with exponential backoff
pub struct LlmDefinitionGenerator {
    provider: Arc<dyn LlmProvider>,
    model: String,
    retry: RetryPolicy,
}

impl LlmDefinitionGenerator {
    pub fn new(provider: Arc<dyn LlmProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    async fn generate_once(&self, term: &str) -> Result<Option<String>, DomainError> {
        let request = LlmRequest::builder().user(render_prompt(term)).build();
        let response = self.provider.chat(&self.model, request).await?;
        let definition = response.content().trim();

        Ok((!definition.is_empty()).then(|| definition.to_string()))
    }
}

impl fmt::Debug for LlmDefinitionGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmDefinitionGenerator")
            .field("provider", &self.provider.provider_name())
            .field("model", &self.model)
            .field("retry", &self.retry)
            .finish()
    }
}

#[async_trait]
impl DefinitionGenerator for LlmDefinitionGenerator {
    async fn generate_definition(&self, term: &str) -> Option<String> {
        match self
            .retry
            .run("definition generation", |_| self.generate_once(term))
            .await
        {
            Ok(definition) => definition,
            Err(e) => {
                error!(
                    term,
                    attempts = self.retry.max_attempts,
                    error = %e,
                    "Failed to generate definition"
                );
                None
            }
        }
    }
}

/// Generator used when no LLM provider is configured; every term is absent
#[derive(Debug, Default)]
pub struct DisabledDefinitionGenerator;

#[async_trait]
impl DefinitionGenerator for DisabledDefinitionGenerator {
    async fn generate_definition(&self, term: &str) -> Option<String> {
        warn!(term, "Definition generation is disabled, no LLM provider configured");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::llm::MockLlmProvider;
    use std::time::Duration;
    use tokio::time::Instant;

    fn generator(provider: Arc<MockLlmProvider>) -> LlmDefinitionGenerator {
        LlmDefinitionGenerator::new(provider, "gpt-4o-mini")
    }

    #[test]
    fn test_render_prompt() {
        assert_eq!(
            render_prompt("trophic cascade"),
            "Provide a brief definition for the term 'trophic cascade' in the context of scientific research:"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_generates_trimmed_definition() {
        let provider = Arc::new(MockLlmProvider::new("mock").with_response("  A definition.\n"));

        let definition = generator(provider.clone())
            .generate_definition("trophic cascade")
            .await;

        assert_eq!(definition.as_deref(), Some("A definition."));
        assert_eq!(provider.call_count(), 1);

        let request = &provider.requests()[0];
        assert!(request.messages[0].content_text().contains("'trophic cascade'"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_retries_with_exponential_backoff() {
        let provider = Arc::new(
            MockLlmProvider::new("mock")
                .then_fail("rate limited")
                .then_fail("rate limited")
                .with_response("Third time lucky."),
        );
        let start = Instant::now();

        let definition = generator(provider.clone())
            .generate_definition("trophic cascade")
            .await;

        assert_eq!(definition.as_deref(), Some("Third time lucky."));
        assert_eq!(provider.call_count(), 3);
        assert_eq!(start.elapsed(), Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_gives_up_after_three_attempts() {
        let provider = Arc::new(MockLlmProvider::new("mock").with_error("unavailable"));

        let definition = generator(provider.clone())
            .generate_definition("trophic cascade")
            .await;

        assert!(definition.is_none());
        assert_eq!(provider.call_count(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_answer_is_absent_without_retry() {
        let provider = Arc::new(MockLlmProvider::new("mock").with_response("   "));

        let definition = generator(provider.clone())
            .generate_definition("trophic cascade")
            .await;

        assert!(definition.is_none());
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_disabled_generator_returns_nothing() {
        let definition = DisabledDefinitionGenerator
            .generate_definition("trophic cascade")
            .await;

        assert!(definition.is_none());
    }
}
