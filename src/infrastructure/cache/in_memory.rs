//! In-memory definition cache with absolute expiry and insertion-order eviction

use std::num::NonZeroUsize;
use std::time::Duration;

use async_trait::async_trait;
use lru::LruCache;
use parking_lot::Mutex;
use tokio::time::Instant;
use tracing::debug;

use crate::domain::jargon::{DefinitionCache, DefinitionRecord};

/// Configuration for the in-memory definition cache
#[derive(Debug, Clone)]
pub struct InMemoryCacheConfig {
    /// Maximum number of entries
    pub max_capacity: usize,
    /// Entries older than this are treated as absent
    pub ttl: Duration,
}

impl Default for InMemoryCacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: 1000,
            ttl: Duration::from_secs(3600), // 1 hour
        }
    }
}

impl InMemoryCacheConfig {
    /// Sets the maximum number of entries
    pub fn with_max_capacity(mut self, capacity: usize) -> Self {
        self.max_capacity = capacity;
        self
    }

    /// Sets the entry time-to-live
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    record: DefinitionRecord,
    inserted_at: Instant,
}

/// Thread-safe in-memory definition cache.
///
/// Reads only `peek`, so the LRU order is insertion order and the entry at
/// the LRU end is always the oldest insert. Expiry is checked on read against
/// the tokio clock.
#[derive(Debug)]
pub struct InMemoryDefinitionCache {
    entries: Mutex<LruCache<String, CacheEntry>>,
    config: InMemoryCacheConfig,
}

impl InMemoryDefinitionCache {
    /// Creates a new cache with default configuration
    pub fn new() -> Self {
        Self::with_config(InMemoryCacheConfig::default())
    }

    /// Creates a new cache with the given configuration
    pub fn with_config(config: InMemoryCacheConfig) -> Self {
        let capacity = NonZeroUsize::new(config.max_capacity).unwrap_or(NonZeroUsize::MIN);

        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            config,
        }
    }

    pub fn config(&self) -> &InMemoryCacheConfig {
        &self.config
    }

    fn is_expired(&self, entry: &CacheEntry) -> bool {
        entry.inserted_at.elapsed() >= self.config.ttl
    }
}

impl Default for InMemoryDefinitionCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DefinitionCache for InMemoryDefinitionCache {
    async fn get(&self, term: &str) -> Option<DefinitionRecord> {
        let mut entries = self.entries.lock();

        let expired = match entries.peek(term) {
            Some(entry) if !self.is_expired(entry) => return Some(entry.record.clone()),
            Some(_) => true,
            None => false,
        };

        if expired {
            entries.pop(term);
        }

        None
    }

    async fn put(&self, term: &str, record: DefinitionRecord) {
        let mut entries = self.entries.lock();

        // All entries share one ttl, so expired ones sit at the LRU end
        while entries
            .peek_lru()
            .is_some_and(|(_, entry)| self.is_expired(entry))
        {
            entries.pop_lru();
        }

        let entry = CacheEntry {
            record,
            inserted_at: Instant::now(),
        };

        if let Some((evicted, _)) = entries.push(term.to_string(), entry) {
            if evicted != term {
                debug!(evicted = %evicted, "Definition cache full, evicted oldest entry");
            }
        }
    }

    async fn len(&self) -> usize {
        let entries = self.entries.lock();
        entries
            .iter()
            .filter(|(_, entry)| !self.is_expired(entry))
            .count()
    }
}
