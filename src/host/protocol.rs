//! # Host Protocol
//!
//! Records exchanged with the tabletop host: incoming chat events and the
//! graphic, character and attribute objects the host stores.
//!
//! Field names follow the host's JSON shape (`_id`, `_type`, `represents`)
//! so events and world snapshots can be deserialized directly.

use serde::{Deserialize, Serialize};

// ============================================================================
// Chat events
// ============================================================================

/// Kind of chat message delivered by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    /// A `!command` addressed to scripts, never shown in chat
    Api,
    General,
    Whisper,
    Emote,
    #[serde(other)]
    Other,
}

/// A chat message as delivered to the script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatEvent {
    #[serde(rename = "type")]
    pub kind: MessageType,
    pub content: String,
    /// Display label of the sender, suffixed with ` (GM)` for the GM
    pub who: String,
    /// Objects selected by the sender when the message was sent
    #[serde(default)]
    pub selected: Option<Vec<SelectedObject>>,
}

impl ChatEvent {
    /// Build an `api` event, the only kind scripts respond to
    pub fn api(content: impl Into<String>, who: impl Into<String>) -> Self {
        Self {
            kind: MessageType::Api,
            content: content.into(),
            who: who.into(),
            selected: None,
        }
    }

    pub fn with_selected(mut self, ids: &[&str]) -> Self {
        self.selected = Some(
            ids.iter()
                .map(|id| SelectedObject {
                    id: id.to_string(),
                    kind: "graphic".to_string(),
                })
                .collect(),
        );
        self
    }
}

/// Reference to one selected object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedObject {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_type", default)]
    pub kind: String,
}

// ============================================================================
// Stored objects
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GraphicSubtype {
    #[default]
    Token,
    Card,
    #[serde(other)]
    Other,
}

/// A graphic placed on the tabletop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graphic {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_subtype", default)]
    pub subtype: GraphicSubtype,
    /// Free-hand drawings are graphics too, but never tokens
    #[serde(rename = "isdrawing", default)]
    pub is_drawing: bool,
    /// Id of the character this token stands for, empty when unlinked
    #[serde(default)]
    pub represents: String,
}

impl Graphic {
    pub fn token(id: impl Into<String>, represents: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            subtype: GraphicSubtype::Token,
            is_drawing: false,
            represents: represents.into(),
        }
    }
}

/// A character journal entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

/// A named attribute on a character sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeRecord {
    #[serde(rename = "_characterid")]
    pub character_id: String,
    pub name: String,
    #[serde(default)]
    pub current: String,
}

impl AttributeRecord {
    pub fn new(
        character_id: impl Into<String>,
        name: impl Into<String>,
        current: impl Into<String>,
    ) -> Self {
        Self {
            character_id: character_id.into(),
            name: name.into(),
            current: current.into(),
        }
    }
}
