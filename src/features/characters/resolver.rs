//! Selected token to character resolution
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.9.0
//!
//! ## Changelog
//! - 1.0.0: Single-token selection with name override and NPC detection

use log::debug;

use crate::core::{CommandError, SelectionError};
use crate::host::{GraphicSubtype, ObjectStore, SelectedObject};

/// Sheet attribute overriding the character's journal name
pub const NAME_ATTRIBUTE: &str = "name";
/// Sheet attribute marking an NPC sheet when its value is exactly `"1"`
pub const NPC_ATTRIBUTE: &str = "npc";

/// The character behind the selected token, built fresh per command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterIdentity {
    pub id: String,
    /// Whisper target for responses
    pub display_name: String,
    pub is_npc: bool,
}

pub struct CharacterResolver<'a> {
    store: &'a dyn ObjectStore,
}

impl<'a> CharacterResolver<'a> {
    pub fn new(store: &'a dyn ObjectStore) -> Self {
        Self { store }
    }

    /// Resolve the one selected token to the character it represents
    ///
    /// Fails with [`SelectionError`] unless exactly one placed token that
    /// represents an existing character is selected. Store failures are
    /// returned as [`CommandError::Host`].
    pub fn resolve(
        &self,
        selection: Option<&[SelectedObject]>,
    ) -> Result<CharacterIdentity, CommandError> {
        let selected = match selection {
            None | Some([]) => return Err(SelectionError::NothingSelected.into()),
            Some([one]) => one,
            Some(many) => return Err(SelectionError::MultipleSelected(many.len()).into()),
        };

        let graphic = self
            .store
            .graphic(&selected.id)?
            .ok_or_else(|| SelectionError::GraphicNotFound(selected.id.clone()))?;
        if graphic.is_drawing {
            return Err(SelectionError::Drawing.into());
        }
        if graphic.subtype != GraphicSubtype::Token {
            return Err(SelectionError::NotAToken.into());
        }
        if graphic.represents.is_empty() {
            return Err(SelectionError::NoCharacter.into());
        }

        let character = self
            .store
            .character(&graphic.represents)?
            .ok_or(SelectionError::NoCharacter)?;

        let display_name = self
            .store
            .attribute_value(&character.id, NAME_ATTRIBUTE)?
            .filter(|name| !name.is_empty())
            .unwrap_or(character.name);
        let is_npc = self
            .store
            .attribute_value(&character.id, NPC_ATTRIBUTE)?
            .is_some_and(|value| value == "1");

        debug!(
            "Token {} resolved to character {} ({display_name}, npc: {is_npc})",
            graphic.id, character.id
        );

        Ok(CharacterIdentity {
            id: character.id,
            display_name,
            is_npc,
        })
    }
}
