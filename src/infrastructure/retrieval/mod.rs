//! Passage retrieval implementations

mod http;

pub use http::HttpPassageRetriever;
