//! # Ability Checks Feature
//!
//! Builds the chat menus listing general, save and skill check buttons for
//! the six ability categories.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.9.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Catalog, name resolution, templates and response builder

pub mod builder;
pub mod catalog;
pub mod names;
pub mod templates;

pub use builder::{ResponseBuilder, ResponseContent};
pub use catalog::{lookup, AbilityCategory, ABILITY_CATEGORIES};
pub use names::{CheckKind, NameResolver};
pub use templates::ButtonGroup;
