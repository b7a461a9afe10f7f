//! Chat command handler trait and infrastructure
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.9.0
//!
//! ## Changelog
//! - 1.0.0: Synchronous handlers returning a reply for the dispatcher to send

use uuid::Uuid;

use super::context::CommandContext;
use crate::core::{CommandError, Recipient};
use crate::host::{ChatEvent, SelectedObject};

/// One parsed `!command` invocation
#[derive(Debug, Clone)]
pub struct Invocation<'a> {
    /// Unique id used to correlate log lines
    pub request_id: Uuid,
    /// Command name without the leading `!`
    pub command: &'a str,
    /// Everything after the command name, trimmed
    pub args: &'a str,
    /// Sender label with the GM marker removed
    pub sender: String,
    pub event: &'a ChatEvent,
}

impl Invocation<'_> {
    /// The sender's selection at the time of the command
    pub fn selected(&self) -> Option<&[SelectedObject]> {
        self.event.selected.as_deref()
    }
}

/// A message a handler wants sent back to the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub recipient: Recipient,
    pub content: String,
}

impl Reply {
    pub fn whisper(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            recipient: Recipient::Player(name.into()),
            content: content.into(),
        }
    }
}

/// Trait for chat command handlers
///
/// Each handler processes one or more `!command` names. Handlers are
/// registered with a CommandRegistry and dispatched based on command name.
/// A handler never talks to the feedback sink itself: it returns the reply,
/// or an error, and the dispatcher decides who sees it.
///
/// # Example
///
/// ```ignore
/// pub struct PingHandler;
///
/// impl ChatCommandHandler for PingHandler {
///     fn command_names(&self) -> Vec<String> {
///         vec!["ping".to_string()]
///     }
///
///     fn handle(
///         &self,
///         _ctx: &CommandContext,
///         invocation: &Invocation<'_>,
///     ) -> Result<Option<Reply>, CommandError> {
///         Ok(Some(Reply::whisper(invocation.sender.clone(), "Pong!")))
///     }
/// }
/// ```
pub trait ChatCommandHandler: Send + Sync {
    /// Command name(s) this handler processes, without `!`
    fn command_names(&self) -> Vec<String>;

    /// Handle one invocation
    ///
    /// `Ok(None)` means the command deliberately produces no output.
    fn handle(
        &self,
        ctx: &CommandContext,
        invocation: &Invocation<'_>,
    ) -> Result<Option<Reply>, CommandError>;
}
