//! Paced, retried summary lookups against a REST summary endpoint

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use tracing::{error, info, warn};

use super::retry::RetryPolicy;
use crate::domain::jargon::KnowledgeSource;
use crate::domain::DomainError;
use crate::infrastructure::http_client::HttpClientTrait;

pub const DEFAULT_SUMMARY_BASE_URL: &str = "https://en.wikipedia.org/api/rest_v1/page/summary";
pub const DEFAULT_USER_AGENT: &str = "ScienceHypothesisBot/1.0";

/// Configuration for summary lookups
#[derive(Debug, Clone)]
pub struct SummarySourceConfig {
    /// Endpoint the term is appended to as a path segment
    pub base_url: String,
    pub user_agent: String,
    /// Wait before every request attempt
    pub pacing_interval: Duration,
    pub retry: RetryPolicy,
}

impl Default for SummarySourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SUMMARY_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            pacing_interval: Duration::from_secs(1),
            retry: RetryPolicy::default(),
        }
    }
}

impl SummarySourceConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_pacing_interval(mut self, interval: Duration) -> Self {
        self.pacing_interval = interval;
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}

/// Knowledge source backed by a page-summary endpoint (Wikipedia REST by default).
///
/// Each attempt waits one pacing interval before its request, independently
/// of other in-flight lookups. Transport and decoding faults are retried;
/// a non-success status is a definitive miss.
#[derive(Debug)]
pub struct SummaryKnowledgeSource<C: HttpClientTrait> {
    client: C,
    base_url: Url,
    config: SummarySourceConfig,
}

impl<C: HttpClientTrait> SummaryKnowledgeSource<C> {
    pub fn new(client: C, config: SummarySourceConfig) -> Result<Self, DomainError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            DomainError::configuration(format!(
                "Invalid summary endpoint '{}': {}",
                config.base_url, e
            ))
        })?;

        if base_url.cannot_be_a_base() {
            return Err(DomainError::configuration(format!(
                "Summary endpoint '{}' cannot take a path",
                config.base_url
            )));
        }

        Ok(Self {
            client,
            base_url,
            config,
        })
    }

    fn summary_url(&self, term: &str) -> String {
        let mut url = self.base_url.clone();

        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(term);
        }

        url.into()
    }

    async fn fetch_once(&self, term: &str) -> Result<Option<String>, DomainError> {
        tokio::time::sleep(self.config.pacing_interval).await;

        let url = self.summary_url(term);
        let response = self
            .client
            .get_json(
                &url,
                vec![
                    ("User-Agent", self.config.user_agent.as_str()),
                    ("Accept", "application/json"),
                ],
            )
            .await
            .inspect_err(|e| error!(term, error = %e, "Scientific source request failed"))?;

        if !response.is_success() {
            warn!(
                term,
                status = response.status,
                "Scientific source returned non-success status"
            );
            return Ok(None);
        }

        Ok(response
            .body
            .get("extract")
            .and_then(serde_json::Value::as_str)
            .map(str::trim)
            .filter(|extract| !extract.is_empty())
            .map(String::from))
    }
}

/// Empty terms and dot segments would resolve to the endpoint itself
fn is_page_title(term: &str) -> bool {
    !matches!(term, "" | "." | "..")
}

#[async_trait]
impl<C: HttpClientTrait> KnowledgeSource for SummaryKnowledgeSource<C> {
    async fn fetch(&self, term: &str) -> Option<String> {
        let term = term.trim();

        if !is_page_title(term) {
            warn!(term, "Term cannot name a summary page, skipping lookup");
            return None;
        }

        info!(term, "Querying scientific sources");

        match self
            .config
            .retry
            .run("summary lookup", |_| self.fetch_once(term))
            .await
        {
            Ok(extract) => extract,
            Err(e) => {
                error!(term, error = %e, "Error querying scientific sources");
                None
            }
        }
    }
}
