//! # Features
//!
//! - **abilities**: ability check menus and button name resolution
//! - **characters**: token selection to character resolution

pub mod abilities;
pub mod characters;

pub use abilities::{AbilityCategory, ResponseBuilder, ResponseContent, ABILITY_CATEGORIES};
pub use characters::{CharacterIdentity, CharacterResolver};

/// Crate version as published
pub fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
