//! Command name resolution for check buttons
//!
//! Every button invokes a sheet attribute by name. Player characters use the
//! plain names (`strength`, `strength_save`, `sleight_of_hand`). NPC sheets
//! carry `npc_` variants, but only when the sheet sets the matching
//! `<name>_flag` attribute to a positive integer; otherwise an NPC uses the
//! player-character name as well.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.9.0

use anyhow::Result;
use log::debug;
use regex::Regex;
use std::sync::OnceLock;

use super::catalog::AbilityCategory;
use crate::features::characters::CharacterIdentity;
use crate::host::ObjectStore;

/// Suffix of the attribute that enables an NPC-specific name
const FLAG_SUFFIX: &str = "_flag";

/// Which button a name is being resolved for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind<'a> {
    General,
    Save,
    Skill(&'a str),
}

impl CheckKind<'_> {
    /// Name used by player characters, and by NPCs without an override
    pub fn base_name(&self, category: &AbilityCategory) -> String {
        match self {
            CheckKind::General => category.proper_name.to_lowercase(),
            CheckKind::Save => to_snake_case(&format!("{} save", category.proper_name)),
            CheckKind::Skill(skill) => to_snake_case(skill),
        }
    }

    /// NPC-specific name, used only when its flag is set
    pub fn npc_name(&self, category: &AbilityCategory) -> String {
        match self {
            CheckKind::General => to_snake_case(&format!("npc {}", category.short_name)),
            CheckKind::Save => to_snake_case(&format!("npc {} save", category.short_name)),
            CheckKind::Skill(skill) => format!("npc_{}", to_snake_case(skill)),
        }
    }
}

/// Lowercase and collapse each whitespace run into one underscore
pub fn to_snake_case(text: &str) -> String {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    let whitespace = WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("valid regex"));
    whitespace.replace_all(&text.to_lowercase(), "_").into_owned()
}

/// Leading integer of `text`, ignoring anything after the digits
///
/// `" 2"` is 2, `"1st"` is 1, `"-3"` is -3. Text without leading digits,
/// including the empty string, has no integer value. Values beyond `i64`
/// saturate.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Resolves button command names against a character sheet
pub struct NameResolver<'a> {
    store: &'a dyn ObjectStore,
}

impl<'a> NameResolver<'a> {
    pub fn new(store: &'a dyn ObjectStore) -> Self {
        Self { store }
    }

    /// Resolve the command name for `kind` under `category`
    pub fn resolve(
        &self,
        category: &AbilityCategory,
        kind: CheckKind<'_>,
        identity: &CharacterIdentity,
    ) -> Result<String> {
        let base = kind.base_name(category);
        if !identity.is_npc {
            return Ok(base);
        }

        let npc = kind.npc_name(category);
        let name = if self.npc_override_enabled(&identity.id, &npc)? {
            npc
        } else {
            base
        };
        debug!("Resolved {kind:?} for NPC {} to {name}", identity.id);
        Ok(name)
    }

    pub fn general_name(
        &self,
        category: &AbilityCategory,
        identity: &CharacterIdentity,
    ) -> Result<String> {
        self.resolve(category, CheckKind::General, identity)
    }

    pub fn save_name(
        &self,
        category: &AbilityCategory,
        identity: &CharacterIdentity,
    ) -> Result<String> {
        self.resolve(category, CheckKind::Save, identity)
    }

    pub fn skill_name(
        &self,
        category: &AbilityCategory,
        skill: &str,
        identity: &CharacterIdentity,
    ) -> Result<String> {
        self.resolve(category, CheckKind::Skill(skill), identity)
    }

    /// Whether `<npc_name>_flag` on the character is an integer above zero
    ///
    /// A missing flag or a non-numeric value counts as not set.
    pub fn npc_override_enabled(&self, character_id: &str, npc_name: &str) -> Result<bool> {
        let flag = format!("{npc_name}{FLAG_SUFFIX}");
        let value = self.store.attribute_value(character_id, &flag)?;
        Ok(value
            .as_deref()
            .and_then(parse_leading_int)
            .is_some_and(|n| n > 0))
    }
}
