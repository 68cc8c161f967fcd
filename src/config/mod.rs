//! Application configuration

mod app_config;

pub use app_config::{AppConfig, JargonConfig, LlmConfig, LogFormat, LoggingConfig, RetrievalConfig};
