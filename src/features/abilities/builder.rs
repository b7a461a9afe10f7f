//! Response construction for the main menu and per-category checks
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.9.0
//!
//! ## Changelog
//! - 1.0.0: Main menu and category responses with NPC-aware button names

use log::debug;

use super::catalog::{self, AbilityCategory, ABILITY_CATEGORIES};
use super::names::NameResolver;
use super::templates::{self, ButtonGroup};
use crate::core::CommandError;
use crate::features::characters::CharacterIdentity;
use crate::host::ObjectStore;

pub const MAIN_MENU_TITLE: &str = "Ability Checks";
pub const BASICS_TITLE: &str = "Basics";
pub const SKILLS_TITLE: &str = "Skills";
pub const GENERAL_LABEL: &str = "General";
pub const SAVE_LABEL: &str = "Save";

/// The main menu breaks its buttons into two rows after this category
const ROW_BREAK_AFTER: &str = "con";
const LINE_BREAK: &str = "<br>";

/// Content of one response before it is wrapped in a roll template
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseContent {
    pub title: String,
    pub basic: ButtonGroup,
    pub skills: ButtonGroup,
}

impl ResponseContent {
    /// Render as a per-category checks template
    pub fn render_checks(&self) -> String {
        templates::render_checks(&self.title, &self.skills, &self.basic)
    }

    /// Render as the main menu template
    pub fn render_main(&self) -> String {
        templates::render_main(&self.title, &self.basic.content)
    }
}

/// Builds response content for one command invocation
pub struct ResponseBuilder<'a> {
    names: NameResolver<'a>,
    /// Command the main menu buttons invoke, without `!`
    command: &'a str,
}

impl<'a> ResponseBuilder<'a> {
    pub fn new(store: &'a dyn ObjectStore, command: &'a str) -> Self {
        Self {
            names: NameResolver::new(store),
            command,
        }
    }

    /// One shortcut button per category, split into two rows of three
    pub fn build_main_menu(&self) -> ResponseContent {
        let mut content = String::new();
        for category in ABILITY_CATEGORIES {
            content.push_str(&templates::command_button(
                category.short_name,
                self.command,
                &category.short_name.to_lowercase(),
            ));
            if category.key == ROW_BREAK_AFTER {
                content.push_str(LINE_BREAK);
            }
        }

        ResponseContent {
            title: MAIN_MENU_TITLE.to_string(),
            basic: ButtonGroup {
                title: String::new(),
                content: content.trim().to_string(),
            },
            skills: ButtonGroup::default(),
        }
    }

    /// General, save and skill buttons for the category named by `key`
    pub fn build_for_category(
        &self,
        key: &str,
        identity: &CharacterIdentity,
    ) -> Result<ResponseContent, CommandError> {
        let category = catalog::lookup(key).ok_or_else(|| CommandError::InvalidCategory {
            key: key.to_string(),
        })?;

        let basic = format!(
            "{} {}",
            self.general_button(category, identity)?,
            self.save_button(category, identity)?
        );

        let mut skills = String::new();
        for skill in category.skills {
            skills.push_str(&self.skill_button(category, skill, identity)?);
            skills.push(' ');
        }

        debug!(
            "Built {} checks for {} with {} skill buttons",
            category.proper_name,
            identity.id,
            category.skills.len()
        );

        Ok(ResponseContent {
            title: format!("{} Checks", category.proper_name),
            basic: ButtonGroup {
                title: BASICS_TITLE.to_string(),
                content: basic.trim().to_string(),
            },
            skills: ButtonGroup {
                title: SKILLS_TITLE.to_string(),
                content: skills.trim().to_string(),
            },
        })
    }

    fn general_button(
        &self,
        category: &AbilityCategory,
        identity: &CharacterIdentity,
    ) -> anyhow::Result<String> {
        let name = self.names.general_name(category, identity)?;
        Ok(templates::macro_button(GENERAL_LABEL, &identity.id, &name))
    }

    fn save_button(
        &self,
        category: &AbilityCategory,
        identity: &CharacterIdentity,
    ) -> anyhow::Result<String> {
        let name = self.names.save_name(category, identity)?;
        Ok(templates::macro_button(SAVE_LABEL, &identity.id, &name))
    }

    fn skill_button(
        &self,
        category: &AbilityCategory,
        skill: &str,
        identity: &CharacterIdentity,
    ) -> anyhow::Result<String> {
        let name = self.names.skill_name(category, skill, identity)?;
        Ok(templates::macro_button(skill, &identity.id, &name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::InMemoryStore;

    fn identity(is_npc: bool) -> CharacterIdentity {
        CharacterIdentity {
            id: "c1".to_string(),
            display_name: "Aria".to_string(),
            is_npc,
        }
    }

    #[test]
    fn test_every_category_builds() {
        let store = InMemoryStore::new();
        let builder = ResponseBuilder::new(&store, "acg");
        for category in ABILITY_CATEGORIES {
            let content = builder
                .build_for_category(category.key, &identity(false))
                .unwrap();
            assert_eq!(content.title, format!("{} Checks", category.proper_name));
            assert!(!content.basic.content.is_empty());
            assert_eq!(
                content.skills.content.is_empty(),
                category.skills.is_empty(),
                "skills content for {}",
                category.key
            );
        }
    }

    #[test]
    fn test_strength_buttons() {
        let store = InMemoryStore::new();
        let builder = ResponseBuilder::new(&store, "acg");
        let content = builder.build_for_category("str", &identity(false)).unwrap();

        assert_eq!(
            content.basic.content,
            "[General](~c1|strength) [Save](~c1|strength_save)"
        );
        assert_eq!(content.skills.content, "[Athletics](~c1|athletics)");
    }

    #[test]
    fn test_skill_buttons_are_space_separated() {
        let store = InMemoryStore::new();
        let builder = ResponseBuilder::new(&store, "acg");
        let content = builder.build_for_category("dex", &identity(false)).unwrap();
        assert_eq!(
            content.skills.content,
            "[Acrobatics](~c1|acrobatics) [Sleight of Hand](~c1|sleight_of_hand) [Stealth](~c1|stealth)"
        );
    }

    #[test]
    fn test_npc_buttons_follow_flags() {
        let store = InMemoryStore::new().with_attribute("c1", "npc_stealth_flag", "1");
        let builder = ResponseBuilder::new(&store, "acg");
        let content = builder.build_for_category("dex", &identity(true)).unwrap();
        assert!(content.skills.content.contains("[Stealth](~c1|npc_stealth)"));
        assert!(content.skills.content.contains("[Acrobatics](~c1|acrobatics)"));
        assert!(content.basic.content.contains("[Save](~c1|dexterity_save)"));
    }

    #[test]
    fn test_unknown_category() {
        let store = InMemoryStore::new();
        let builder = ResponseBuilder::new(&store, "acg");
        match builder.build_for_category("xyz", &identity(false)) {
            Err(CommandError::InvalidCategory { key }) => assert_eq!(key, "xyz"),
            other => panic!("expected invalid category, got {other:?}"),
        }
    }

    #[test]
    fn test_main_menu_order_and_break() {
        let store = InMemoryStore::new();
        let builder = ResponseBuilder::new(&store, "acg");
        let menu = builder.build_main_menu();

        assert_eq!(menu.title, MAIN_MENU_TITLE);
        assert_eq!(
            menu.basic.content,
            "[Str](!acg -str)[Dex](!acg -dex)[Con](!acg -con)<br>\
             [Int](!acg -int)[Wis](!acg -wis)[Cha](!acg -cha)"
        );
        assert_eq!(menu.basic.content.matches("<br>").count(), 1);
    }

    #[test]
    fn test_main_menu_uses_configured_command() {
        let store = InMemoryStore::new();
        let builder = ResponseBuilder::new(&store, "checks");
        let menu = builder.build_main_menu();
        assert!(menu.basic.content.starts_with("[Str](!checks -str)"));
    }

    #[test]
    fn test_rendered_constitution_has_no_skills_section() {
        let store = InMemoryStore::new();
        let builder = ResponseBuilder::new(&store, "acg");
        let rendered = builder
            .build_for_category("con", &identity(false))
            .unwrap()
            .render_checks();
        assert_eq!(
            rendered,
            "&{template:desc} {{desc=**Constitution Checks**<br>Basics<br>\
             [General](~c1|constitution) [Save](~c1|constitution_save)}}"
        );
    }
}
