//! Jargon resolution pipeline - summary lookups, generative fallback and orchestration

mod factory;
mod llm_generator;
mod resolver;
mod retry;
mod summary_source;

pub use factory::JargonResolverFactory;
pub use llm_generator::{DisabledDefinitionGenerator, LlmDefinitionGenerator};
pub use resolver::JargonResolver;
pub use retry::RetryPolicy;
pub use summary_source::{
    SummaryKnowledgeSource, SummarySourceConfig, DEFAULT_SUMMARY_BASE_URL, DEFAULT_USER_AGENT,
};
