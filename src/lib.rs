// Core layer - configuration, errors and response formatting
pub mod core;

// Host layer - chat events, object store and feedback sink
pub mod host;

// Features layer - ability menus and character resolution
pub mod features;

// Application layer
pub mod commands;

pub use crate::core::{CommandError, Config, SelectionError};

pub use features::{
    // Abilities
    AbilityCategory, ResponseBuilder, ResponseContent, ABILITY_CATEGORIES,
    // Characters
    CharacterIdentity, CharacterResolver,
};

pub use commands::{CommandContext, CommandDispatcher, DispatchOutcome};
pub use host::{ChatEvent, FeedbackSink, InMemoryStore, ObjectStore};
