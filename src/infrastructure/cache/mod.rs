//! Cache infrastructure - Definition cache implementations

mod in_memory;

pub use in_memory::{InMemoryCacheConfig, InMemoryDefinitionCache};
