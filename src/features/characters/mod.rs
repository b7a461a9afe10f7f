//! # Characters Feature
//!
//! Turns the sender's token selection into the character a command acts on.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.9.0
//! - **Toggleable**: false

pub mod resolver;

pub use resolver::{CharacterIdentity, CharacterResolver, NAME_ATTRIBUTE, NPC_ATTRIBUTE};
