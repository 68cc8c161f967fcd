//! Definition records produced by the resolution pipeline

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Source that produced a definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefinitionSource {
    /// Static local glossary
    Local,
    /// Networked knowledge endpoint
    ScientificSources,
    /// Generative fallback
    Gpt,
}

impl DefinitionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::ScientificSources => "scientific_sources",
            Self::Gpt => "gpt",
        }
    }
}

impl fmt::Display for DefinitionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-term mapping from source to the definition text it produced.
///
/// Only sources with a non-blank definition are ever present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DefinitionRecord {
    definitions: BTreeMap<DefinitionSource, String>,
}

impl DefinitionRecord {
    /// Creates an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a record holding a single source
    pub fn from_source(source: DefinitionSource, definition: impl Into<String>) -> Self {
        let mut record = Self::new();
        record.insert(source, definition);
        record
    }

    /// Inserts a definition, ignoring blank text. Returns whether it was stored.
    pub fn insert(&mut self, source: DefinitionSource, definition: impl Into<String>) -> bool {
        let definition = definition.into();

        if definition.trim().is_empty() {
            return false;
        }

        self.definitions.insert(source, definition);
        true
    }

    pub fn get(&self, source: DefinitionSource) -> Option<&str> {
        self.definitions.get(&source).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DefinitionSource, &str)> {
        self.definitions
            .iter()
            .map(|(source, definition)| (*source, definition.as_str()))
    }
}

/// Result of resolving a batch of terms, keyed by the term as requested
pub type JargonDefinitions = HashMap<String, DefinitionRecord>;
