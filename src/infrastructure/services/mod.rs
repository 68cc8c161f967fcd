//! Infrastructure services

mod discovery_service;

pub use discovery_service::{
    Discovery, DiscoveryConfig, DiscoveryService, HYPOTHESIS_FALLBACK, REASONING_FALLBACK,
};
