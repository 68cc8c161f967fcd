//! Definition cache trait

use std::fmt::Debug;

use async_trait::async_trait;

use super::DefinitionRecord;

/// Time-bounded term to definition record cache.
///
/// Keys are opaque to the cache; callers pass normalized terms.
#[async_trait]
pub trait DefinitionCache: Send + Sync + Debug {
    /// Returns the record if a live (non-expired) entry exists
    async fn get(&self, term: &str) -> Option<DefinitionRecord>;

    /// Stores a record, evicting the oldest entry when over capacity
    async fn put(&self, term: &str, record: DefinitionRecord);

    /// Number of live entries
    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
