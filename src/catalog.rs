//! Badge catalog: load-once configuration mapping keys to definitions
//!
//! The catalog is read from a JSON file at startup and treated as immutable
//! afterwards. Lookups are case-insensitive via an index of lowercased keys;
//! there is no ambient mutable catalog state.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

/// Errors that can occur while loading the catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One configured badge
#[derive(Debug, Clone, Deserialize)]
pub struct BadgeDefinition {
    /// Unique lookup key, matched case-insensitively
    pub key: String,
    /// Text rendered on the badge
    pub label: String,
    /// 6-hex-digit background color, leading `#` optional
    #[serde(alias = "backgroundColor")]
    pub color: String,
}

#[derive(Deserialize)]
struct CatalogFile {
    badges: Vec<BadgeDefinition>,
}

/// Immutable badge configuration indexed by lowercased key
#[derive(Debug, Clone, Default)]
pub struct BadgeCatalog {
    definitions: Vec<BadgeDefinition>,
    index: HashMap<String, usize>,
}

impl BadgeCatalog {
    /// Build a catalog from definitions, preserving their order.
    ///
    /// When two definitions share a key the later one wins lookups.
    pub fn new(definitions: Vec<BadgeDefinition>) -> Self {
        let index = definitions
            .iter()
            .enumerate()
            .map(|(i, definition)| (definition.key.to_lowercase(), i))
            .collect();
        Self { definitions, index }
    }

    /// Load a catalog from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load a catalog from a JSON string
    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        let parsed: CatalogFile = serde_json::from_str(content)?;
        Ok(Self::new(parsed.badges))
    }

    /// Load a catalog, substituting an empty one when the source is missing
    /// or unparsable. The failure is logged as an operational warning, not
    /// surfaced: an empty catalog still serves listings and error documents.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::from_file(path) {
            Ok(catalog) => catalog,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "catalog unavailable, starting empty");
                Self::default()
            }
        }
    }

    /// Resolve a key, case-insensitively
    pub fn lookup(&self, key: &str) -> Option<&BadgeDefinition> {
        self.index
            .get(&key.to_lowercase())
            .map(|&i| &self.definitions[i])
    }

    /// All definitions in configuration order
    pub fn all(&self) -> &[BadgeDefinition] {
        &self.definitions
    }

    /// All keys, sorted
    pub fn keys_sorted(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .definitions
            .iter()
            .map(|definition| definition.key.clone())
            .collect();
        keys.sort();
        keys
    }

    /// Case-insensitive substring search over keys and labels
    pub fn search(&self, query: &str) -> Vec<&BadgeDefinition> {
        let needle = query.to_lowercase();
        self.definitions
            .iter()
            .filter(|definition| {
                definition.key.to_lowercase().contains(&needle)
                    || definition.label.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
