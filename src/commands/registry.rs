//! Command handler registry
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.9.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation for handler dispatch

use std::collections::HashMap;
use std::sync::Arc;

use super::handler::ChatCommandHandler;

/// Registry mapping command names to handlers
///
/// Multiple command names can map to the same handler if they share logic.
///
/// # Example
///
/// ```ignore
/// let mut registry = CommandRegistry::new();
/// registry.register(Arc::new(AbilityCheckHandler::new("acg")));
///
/// if let Some(handler) = registry.get("acg") {
///     handler.handle(&ctx, &invocation)?;
/// }
/// ```
#[derive(Clone)]
pub struct CommandRegistry {
    handlers: HashMap<String, Arc<dyn ChatCommandHandler>>,
}

impl CommandRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a handler for its declared command names
    pub fn register(&mut self, handler: Arc<dyn ChatCommandHandler>) {
        for name in handler.command_names() {
            self.handlers.insert(name, Arc::clone(&handler));
        }
    }

    /// Get handler for a command name
    pub fn get(&self, name: &str) -> Option<Arc<dyn ChatCommandHandler>> {
        self.handlers.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Number of registered command names
    ///
    /// Note: This counts command names, not unique handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Get all registered command names
    pub fn command_names(&self) -> impl Iterator<Item = &String> {
        self.handlers.keys()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::context::CommandContext;
    use crate::commands::handler::{Invocation, Reply};
    use crate::core::CommandError;

    // Mock handler for testing
    struct MockHandler {
        names: &'static [&'static str],
    }

    impl ChatCommandHandler for MockHandler {
        fn command_names(&self) -> Vec<String> {
            self.names.iter().map(|name| name.to_string()).collect()
        }

        fn handle(
            &self,
            _ctx: &CommandContext,
            _invocation: &Invocation<'_>,
        ) -> Result<Option<Reply>, CommandError> {
            Ok(None)
        }
    }

    #[test]
    fn test_registry_new_is_empty() {
        let registry = CommandRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_registry_register_single() {
        let mut registry = CommandRegistry::new();
        registry.register(Arc::new(MockHandler { names: &["acg"] }));

        assert!(!registry.is_empty());
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("acg"));
        assert!(!registry.contains("roll"));
    }

    #[test]
    fn test_registry_register_multiple_names() {
        let mut registry = CommandRegistry::new();
        registry.register(Arc::new(MockHandler {
            names: &["acg", "checks"],
        }));

        assert_eq!(registry.len(), 2);
        assert!(registry.contains("acg"));
        assert!(registry.contains("checks"));
        let mut names: Vec<&String> = registry.command_names().collect();
        names.sort();
        assert_eq!(names, vec!["acg", "checks"]);
    }

    #[test]
    fn test_registry_get_returns_handler() {
        let mut registry = CommandRegistry::new();
        registry.register(Arc::new(MockHandler { names: &["acg"] }));

        assert!(registry.get("acg").is_some());
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_registry_default() {
        let registry = CommandRegistry::default();
        assert!(registry.is_empty());
    }
}
