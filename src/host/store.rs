//! # Object Store
//!
//! Synchronous read access to the host's graphics, characters and
//! attributes, plus an in-memory store loaded from a world snapshot.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.9.0

use anyhow::Result;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use super::protocol::{AttributeRecord, CharacterRecord, Graphic};

/// Read-only queries against the host's object store
///
/// Every query is synchronous and side-effect free. Errors are host
/// failures; a missing object is `Ok(None)` or an empty list.
pub trait ObjectStore: Send + Sync {
    /// Fetch a graphic by id
    fn graphic(&self, id: &str) -> Result<Option<Graphic>>;

    /// Fetch a character by id
    fn character(&self, id: &str) -> Result<Option<CharacterRecord>>;

    /// All attributes named `name` on character `character_id`
    fn find_attributes(&self, character_id: &str, name: &str) -> Result<Vec<AttributeRecord>>;

    /// Current value of the first attribute matching `name`, if any
    fn attribute_value(&self, character_id: &str, name: &str) -> Result<Option<String>> {
        Ok(self
            .find_attributes(character_id, name)?
            .into_iter()
            .next()
            .map(|attribute| attribute.current))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read world file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid JSON world file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid YAML world file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },
}

/// A snapshot of the tabletop held entirely in memory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InMemoryStore {
    #[serde(default)]
    pub graphics: Vec<Graphic>,
    #[serde(default)]
    pub characters: Vec<CharacterRecord>,
    #[serde(default)]
    pub attributes: Vec<AttributeRecord>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a world snapshot, JSON for `.json` files and YAML otherwise
    pub fn load(path: impl AsRef<Path>) -> std::result::Result<Self, StoreError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let store = if is_json {
            Self::from_json(&contents)?
        } else {
            Self::from_yaml(&contents)?
        };

        debug!(
            "Loaded world from {}: {} graphics, {} characters, {} attributes",
            path.display(),
            store.graphics.len(),
            store.characters.len(),
            store.attributes.len()
        );
        Ok(store)
    }

    pub fn from_json(contents: &str) -> std::result::Result<Self, StoreError> {
        let store: Self = serde_json::from_str(contents)?;
        store.validate()?;
        Ok(store)
    }

    pub fn from_yaml(contents: &str) -> std::result::Result<Self, StoreError> {
        let store: Self = serde_yaml::from_str(contents)?;
        store.validate()?;
        Ok(store)
    }

    /// Graphic and character ids must be unique
    pub fn validate(&self) -> std::result::Result<(), StoreError> {
        let mut seen = HashSet::new();
        for graphic in &self.graphics {
            if !seen.insert(graphic.id.as_str()) {
                return Err(StoreError::DuplicateId {
                    kind: "graphic",
                    id: graphic.id.clone(),
                });
            }
        }

        let mut seen = HashSet::new();
        for character in &self.characters {
            if !seen.insert(character.id.as_str()) {
                return Err(StoreError::DuplicateId {
                    kind: "character",
                    id: character.id.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn with_graphic(mut self, graphic: Graphic) -> Self {
        self.graphics.push(graphic);
        self
    }

    pub fn with_character(mut self, id: &str, name: &str) -> Self {
        self.characters.push(CharacterRecord {
            id: id.to_string(),
            name: name.to_string(),
        });
        self
    }

    pub fn with_attribute(mut self, character_id: &str, name: &str, current: &str) -> Self {
        self.attributes
            .push(AttributeRecord::new(character_id, name, current));
        self
    }
}

impl ObjectStore for InMemoryStore {
    fn graphic(&self, id: &str) -> Result<Option<Graphic>> {
        Ok(self.graphics.iter().find(|g| g.id == id).cloned())
    }

    fn character(&self, id: &str) -> Result<Option<CharacterRecord>> {
        Ok(self.characters.iter().find(|c| c.id == id).cloned())
    }

    fn find_attributes(&self, character_id: &str, name: &str) -> Result<Vec<AttributeRecord>> {
        Ok(self
            .attributes
            .iter()
            .filter(|a| a.character_id == character_id && a.name == name)
            .cloned()
            .collect())
    }
}
