//! Shared context for command handlers
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.9.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation with store, sink and configuration

use std::sync::Arc;

use crate::core::Config;
use crate::host::{FeedbackSink, ObjectStore};

/// Shared context for all command handlers
///
/// Contains the host collaborators every handler needs:
/// - ObjectStore for token, character and attribute lookups
/// - FeedbackSink for chat output
/// - Config for the command name and speaker label
#[derive(Clone)]
pub struct CommandContext {
    pub store: Arc<dyn ObjectStore>,
    pub sink: Arc<dyn FeedbackSink>,
    pub config: Config,
}

impl CommandContext {
    pub fn new(store: Arc<dyn ObjectStore>, sink: Arc<dyn FeedbackSink>, config: Config) -> Self {
        Self {
            store,
            sink,
            config,
        }
    }

    pub fn store(&self) -> &dyn ObjectStore {
        self.store.as_ref()
    }

    /// Speaker label for every message sent by this script
    pub fn feedback_name(&self) -> &str {
        &self.config.feedback_name
    }
}
