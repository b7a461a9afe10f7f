//! Per-command handler implementations
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.9.0
//!
//! ## Changelog
//! - 1.0.0: Add AbilityCheckHandler (main menu, per-category checks)

pub mod ability_check;

use std::sync::Arc;

use super::handler::ChatCommandHandler;
use crate::core::Config;

pub use ability_check::AbilityCheckHandler;

/// Create all registered command handlers
///
/// Returns a vector of handlers ready to be registered with CommandRegistry.
pub fn create_all_handlers(config: &Config) -> Vec<Arc<dyn ChatCommandHandler>> {
    vec![Arc::new(AbilityCheckHandler::new(config.command.clone()))]
}
