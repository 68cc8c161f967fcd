use std::collections::HashMap;
use std::time::Duration;

use serde::Deserialize;

use crate::infrastructure::jargon::{DEFAULT_SUMMARY_BASE_URL, DEFAULT_USER_AGENT};
use crate::infrastructure::llm::DEFAULT_OPENAI_BASE_URL;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub jargon: JargonConfig,
    pub llm: LlmConfig,
    pub retrieval: RetrievalConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Jargon resolution pipeline settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct JargonConfig {
    pub cache_ttl_secs: u64,
    pub cache_capacity: usize,
    /// Wait before every summary request
    pub pacing_interval_ms: u64,
    pub lookup_max_attempts: u32,
    pub generation_max_attempts: u32,
    /// First backoff delay; doubles on every further attempt
    pub backoff_base_ms: u64,
    pub summary_base_url: String,
    pub user_agent: String,
    pub request_timeout_secs: u64,
    /// Extra glossary entries, merged over the built-in table
    pub glossary: HashMap<String, String>,
}

/// OpenAI-compatible provider settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub base_url: String,
    pub model: String,
    /// Falls back to `OPENAI_API_KEY` when unset
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

/// Passage retrieval settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// ColBERT-style search endpoint; fallback passages are used when unset
    pub url: Option<String>,
    pub k: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for JargonConfig {
    fn default() -> Self {
        Self {
            cache_ttl_secs: 3600,
            cache_capacity: 1000,
            pacing_interval_ms: 1000,
            lookup_max_attempts: 3,
            generation_max_attempts: 3,
            backoff_base_ms: 1000,
            summary_base_url: DEFAULT_SUMMARY_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout_secs: 30,
            glossary: HashMap::new(),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key: None,
            timeout_secs: 60,
        }
    }
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self { url: None, k: 5 }
    }
}

impl JargonConfig {
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn pacing_interval(&self) -> Duration {
        Duration::from_millis(self.pacing_interval_ms)
    }

    pub fn backoff_base(&self) -> Duration {
        Duration::from_millis(self.backoff_base_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl LlmConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Configured key, or the `OPENAI_API_KEY` environment variable
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| std::env::var("OPENAI_API_KEY").ok())
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
