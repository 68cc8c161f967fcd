//! Infrastructure layer - External service implementations

pub mod cache;
pub mod http_client;
pub mod jargon;
pub mod llm;
pub mod logging;
pub mod retrieval;
pub mod services;
