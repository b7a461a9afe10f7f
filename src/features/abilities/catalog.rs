//! The six ability categories and the skills each one governs
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.9.0

/// One ability category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbilityCategory {
    /// Lookup key, e.g. `str`
    pub key: &'static str,
    /// Three-letter display name, e.g. `Str`
    pub short_name: &'static str,
    /// Full display name, e.g. `Strength`
    pub proper_name: &'static str,
    /// Governed skills in display order, possibly empty
    pub skills: &'static [&'static str],
}

/// All categories in their fixed display order
pub const ABILITY_CATEGORIES: &[AbilityCategory] = &[
    AbilityCategory {
        key: "str",
        short_name: "Str",
        proper_name: "Strength",
        skills: &["Athletics"],
    },
    AbilityCategory {
        key: "dex",
        short_name: "Dex",
        proper_name: "Dexterity",
        skills: &["Acrobatics", "Sleight of Hand", "Stealth"],
    },
    AbilityCategory {
        key: "con",
        short_name: "Con",
        proper_name: "Constitution",
        skills: &[],
    },
    AbilityCategory {
        key: "int",
        short_name: "Int",
        proper_name: "Intelligence",
        skills: &["Arcana", "History", "Investigation", "Nature", "Religion"],
    },
    AbilityCategory {
        key: "wis",
        short_name: "Wis",
        proper_name: "Wisdom",
        skills: &["Animal Handling", "Insight", "Medicine", "Perception", "Survival"],
    },
    AbilityCategory {
        key: "cha",
        short_name: "Cha",
        proper_name: "Charisma",
        skills: &["Deception", "Intimidation", "Performance", "Persuasion"],
    },
];

/// Find a category by its key
///
/// Keys are matched exactly; `Str` or `strength` are not categories.
pub fn lookup(key: &str) -> Option<&'static AbilityCategory> {
    ABILITY_CATEGORIES.iter().find(|category| category.key == key)
}
