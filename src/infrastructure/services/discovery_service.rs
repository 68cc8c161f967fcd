//! Hypothesis discovery service
//!
//! Runs an observation through jargon identification, jargon resolution,
//! context identification, passage retrieval and hypothesis generation.
//! Every step degrades to a fallback value instead of failing.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::domain::{
    extract_terms, fallback_passages, DomainError, JargonDefinitions, LlmProvider, LlmRequest,
    LlmResponseFormat, PassageRetriever, GENERIC_PASSAGE,
};
use crate::infrastructure::jargon::JargonResolver;

pub const REASONING_FALLBACK: &str = "Unable to generate reasoning due to an error.";
pub const HYPOTHESIS_FALLBACK: &str = "Unable to generate a hypothesis at this time.";

const JARGON_SYSTEM_PROMPT: &str = "You identify scientific jargon in observations.";
const CONTEXT_SYSTEM_PROMPT: &str = "You identify the scientific context of observations.";
const HYPOTHESIS_SYSTEM_PROMPT: &str = "You are a scientist proposing novel, testable hypotheses. \
     Respond with a JSON object with the keys \"reasoning\" and \"hypothesis\".";

/// Configuration for the discovery service
#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    /// Model used for every generation step
    pub model: String,
    /// Number of passages to retrieve
    pub k: usize,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            k: 5,
        }
    }
}

impl DiscoveryConfig {
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }
}

/// Result of a discovery run
#[derive(Debug, Clone, Serialize)]
pub struct Discovery {
    pub observation: String,
    pub jargon_definitions: JargonDefinitions,
    pub context: String,
    pub reasoning: String,
    pub hypothesis: String,
    pub passages: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct HypothesisAnswer {
    reasoning: String,
    #[serde(alias = "novel_hypothesis")]
    hypothesis: String,
}

/// Service turning observations into hypotheses
pub struct DiscoveryService {
    provider: Arc<dyn LlmProvider>,
    resolver: JargonResolver,
    retriever: Option<Arc<dyn PassageRetriever>>,
    config: DiscoveryConfig,
}

impl std::fmt::Debug for DiscoveryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscoveryService")
            .field("provider", &self.provider.provider_name())
            .field("resolver", &self.resolver)
            .field("retriever", &self.retriever)
            .field("config", &self.config)
            .finish()
    }
}

impl DiscoveryService {
    pub fn new(
        provider: Arc<dyn LlmProvider>,
        resolver: JargonResolver,
        config: DiscoveryConfig,
    ) -> Self {
        Self {
            provider,
            resolver,
            retriever: None,
            config,
        }
    }

    /// Uses the retriever for background passages instead of the fallback set
    pub fn with_retriever(mut self, retriever: Arc<dyn PassageRetriever>) -> Self {
        self.retriever = Some(retriever);
        self
    }

    pub async fn discover(&self, observation: &str) -> Discovery {
        let terms = match self.identify_jargon(observation).await {
            Ok(terms) => {
                info!(terms = ?terms, "Identified jargon terms");
                terms
            }
            Err(e) => {
                error!(error = %e, "Failed to identify jargon");
                Vec::new()
            }
        };

        let jargon_definitions = self.resolver.resolve(&terms).await;

        let context = match self.identify_context(observation).await {
            Ok(context) => {
                info!(context = %context, "Identified context");
                context
            }
            Err(e) => {
                error!(error = %e, "Failed to identify context");
                String::new()
            }
        };

        let passages = self.retrieve_passages(observation).await;

        let (reasoning, hypothesis) = match self
            .generate_hypothesis(observation, &jargon_definitions, &context, &passages)
            .await
        {
            Ok(answer) => {
                info!(hypothesis = %answer.hypothesis, "Generated hypothesis");
                debug!(reasoning = %answer.reasoning, "Hypothesis reasoning");
                (answer.reasoning, answer.hypothesis)
            }
            Err(e) => {
                error!(error = %e, "Failed to generate hypothesis");
                (REASONING_FALLBACK.to_string(), HYPOTHESIS_FALLBACK.to_string())
            }
        };

        Discovery {
            observation: observation.to_string(),
            jargon_definitions,
            context,
            reasoning,
            hypothesis,
            passages,
            generated_at: Utc::now(),
        }
    }

    async fn identify_jargon(&self, observation: &str) -> Result<Vec<String>, DomainError> {
        let request = LlmRequest::builder()
            .system(JARGON_SYSTEM_PROMPT)
            .user(format!(
                "List the scientific jargon terms in the following observation as a \
                 comma-separated list. Output only the terms.\n\nObservation: {}",
                observation
            ))
            .build();

        let response = self.provider.chat(&self.config.model, request).await?;
        Ok(extract_terms(response.content()))
    }

    async fn identify_context(&self, observation: &str) -> Result<String, DomainError> {
        let request = LlmRequest::builder()
            .system(CONTEXT_SYSTEM_PROMPT)
            .user(format!(
                "Describe the scientific field and context of the following observation in \
                 one or two sentences.\n\nObservation: {}",
                observation
            ))
            .build();

        let response = self.provider.chat(&self.config.model, request).await?;
        Ok(response.content().trim().to_string())
    }

    async fn retrieve_passages(&self, observation: &str) -> Vec<String> {
        let passages = match &self.retriever {
            Some(retriever) => match retriever.retrieve(observation, self.config.k).await {
                Ok(passages) => {
                    info!(count = passages.len(), "Retrieved passages");
                    passages
                }
                Err(e) => {
                    error!(error = %e, "Passage retrieval failed, using fallback passages");
                    fallback_passages(observation)
                }
            },
            None => {
                warn!("No passage retriever configured, using fallback passages");
                fallback_passages(observation)
            }
        };

        if passages.is_empty() {
            warn!("No relevant passages retrieved, using a generic passage");
            return vec![GENERIC_PASSAGE.to_string()];
        }

        passages
    }

    async fn generate_hypothesis(
        &self,
        observation: &str,
        jargon_definitions: &JargonDefinitions,
        context: &str,
        passages: &[String],
    ) -> Result<HypothesisAnswer, DomainError> {
        let definitions = serde_json::to_string(jargon_definitions)
            .map_err(|e| DomainError::internal(format!("Failed to encode definitions: {}", e)))?;
        let passages = serde_json::to_string(passages)
            .map_err(|e| DomainError::internal(format!("Failed to encode passages: {}", e)))?;

        let request = LlmRequest::builder()
            .system(HYPOTHESIS_SYSTEM_PROMPT)
            .user(format!(
                "Observation: {}\n\nJargon definitions: {}\n\nContext: {}\n\n\
                 Retrieved passages: {}\n\nThink step by step, then propose a novel hypothesis.",
                observation, definitions, context, passages
            ))
            .response_format(LlmResponseFormat::JsonObject)
            .build();

        let response = self.provider.chat(&self.config.model, request).await?;

        let answer: HypothesisAnswer = serde_json::from_str(response.content()).map_err(|e| {
            DomainError::provider(
                self.provider.provider_name(),
                format!("Invalid hypothesis answer: {}", e),
            )
        })?;

        if answer.hypothesis.trim().is_empty() {
            return Err(DomainError::provider(
                self.provider.provider_name(),
                "Empty hypothesis",
            ));
        }

        Ok(answer)
    }
}
