//! # Command System
//!
//! `!command` handling for chat events delivered by the tabletop host.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.9.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Handler trait, context, registry and dispatcher

pub mod context;
pub mod dispatcher;
pub mod handler;
pub mod handlers;
pub mod registry;

// Re-export handler infrastructure
pub use context::CommandContext;
pub use dispatcher::{CommandDispatcher, DispatchOutcome};
pub use handler::{ChatCommandHandler, Invocation, Reply};
pub use handlers::{create_all_handlers, AbilityCheckHandler};
pub use registry::CommandRegistry;
