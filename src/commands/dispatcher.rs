//! Chat event dispatch
//!
//! Takes raw chat events from the host, finds the handler for `!command`,
//! runs it, and turns its reply or error into chat output. This is the only
//! place errors become user-visible messages.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.9.0
//!
//! ## Changelog
//! - 1.0.0: Registry-based dispatch with per-invocation error reporting

use log::{debug, error, info, warn};
use uuid::Uuid;

use super::context::CommandContext;
use super::handler::{Invocation, Reply};
use super::handlers::create_all_handlers;
use super::registry::CommandRegistry;
use crate::core::{error_span, strip_gm_marker, CommandError, Recipient};
use crate::host::{ChatEvent, MessageType};

/// What happened to one chat event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Not an api message, or not a registered command
    Ignored,
    /// Handled, with no output by design
    Silent,
    /// Handled, reply sent
    Replied,
    /// Handled, error reported
    Failed,
}

pub struct CommandDispatcher {
    registry: CommandRegistry,
    context: CommandContext,
}

impl CommandDispatcher {
    pub fn new(registry: CommandRegistry, context: CommandContext) -> Self {
        Self { registry, context }
    }

    /// Dispatcher with every built-in handler registered
    pub fn with_default_handlers(context: CommandContext) -> Self {
        let mut registry = CommandRegistry::new();
        for handler in create_all_handlers(&context.config) {
            registry.register(handler);
        }
        Self::new(registry, context)
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Process one chat event to completion
    pub fn dispatch(&self, event: &ChatEvent) -> DispatchOutcome {
        if event.kind != MessageType::Api {
            return DispatchOutcome::Ignored;
        }
        let Some((command, args)) = split_command(&event.content) else {
            return DispatchOutcome::Ignored;
        };
        let Some(handler) = self.registry.get(command) else {
            return DispatchOutcome::Ignored;
        };

        let invocation = Invocation {
            request_id: Uuid::new_v4(),
            command,
            args,
            sender: strip_gm_marker(&event.who),
            event,
        };
        let request_id = invocation.request_id;
        info!(
            "[{request_id}] !{command} from {} with args {args:?}",
            invocation.sender
        );

        match handler.handle(&self.context, &invocation) {
            Ok(None) => DispatchOutcome::Silent,
            Ok(Some(reply)) => {
                self.send(request_id, &reply);
                DispatchOutcome::Replied
            }
            Err(err) => {
                self.report(request_id, &invocation.sender, &err);
                DispatchOutcome::Failed
            }
        }
    }

    /// Translate an error into a styled message for whoever should see it
    fn report(&self, request_id: Uuid, sender: &str, err: &CommandError) {
        match err {
            CommandError::Host(source) => error!("[{request_id}] Host failure: {source:#}"),
            _ => warn!("[{request_id}] {err}"),
        }
        let reply = Reply {
            recipient: error_recipient(err, sender),
            content: error_span(&err.to_string()),
        };
        self.send(request_id, &reply);
    }

    fn send(&self, request_id: Uuid, reply: &Reply) {
        debug!("[{request_id}] Sending to {:?}", reply.recipient);
        let content = reply.recipient.address(&reply.content);
        if let Err(e) = self
            .context
            .sink
            .send_chat(self.context.feedback_name(), &content)
        {
            error!("[{request_id}] Failed to send chat message: {e}");
        }
    }
}

/// Selection problems go back to the sender; everything else to the GM
pub fn error_recipient(err: &CommandError, sender: &str) -> Recipient {
    match err {
        CommandError::Selection(_) => Recipient::Player(sender.to_string()),
        _ => Recipient::Gm,
    }
}

/// Split `!name rest` into `("name", "rest")`, with `rest` trimmed
///
/// The name ends at the first whitespace, so `!acgx` is the command `acgx`.
pub fn split_command(content: &str) -> Option<(&str, &str)> {
    let body = content.strip_prefix('!')?;
    let end = body.find(char::is_whitespace).unwrap_or(body.len());
    let (name, rest) = body.split_at(end);
    if name.is_empty() {
        return None;
    }
    Some((name, rest.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use crate::host::{
        ChatMessage, FeedbackSink, Graphic, InMemoryStore, ObjectStore, RecordingSink,
    };
    use crate::host::{AttributeRecord, CharacterRecord};
    use std::sync::Arc;

    fn dispatcher(store: InMemoryStore) -> (CommandDispatcher, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::new());
        let ctx = CommandContext::new(Arc::new(store), sink.clone(), Config::default());
        (CommandDispatcher::with_default_handlers(ctx), sink)
    }

    fn table() -> InMemoryStore {
        InMemoryStore::new()
            .with_graphic(Graphic::token("aria_tok", "aria"))
            .with_graphic(Graphic::token("gob_tok", "gob"))
            .with_graphic(Graphic {
                is_drawing: true,
                ..Graphic::token("doodle", "")
            })
            .with_character("aria", "Aria")
            .with_character("gob", "Goblin")
            .with_attribute("gob", "npc", "1")
            .with_attribute("gob", "npc_str_save_flag", "1")
    }

    fn only_message(sink: &RecordingSink) -> ChatMessage {
        let messages = sink.messages();
        assert_eq!(messages.len(), 1, "expected one message, got {messages:?}");
        messages.into_iter().next().unwrap()
    }

    #[test]
    fn test_split_command() {
        assert_eq!(split_command("!acg -str"), Some(("acg", "-str")));
        assert_eq!(split_command("!acg"), Some(("acg", "")));
        assert_eq!(split_command("!acg    -main  "), Some(("acg", "-main")));
        assert_eq!(split_command("!acgx -str"), Some(("acgx", "-str")));
        assert_eq!(split_command("acg -str"), None);
        assert_eq!(split_command("! acg"), None);
    }

    #[test]
    fn test_strength_for_pc() {
        let (dispatcher, sink) = dispatcher(table());
        let event = ChatEvent::api("!acg -str", "Sam").with_selected(&["aria_tok"]);

        assert_eq!(dispatcher.dispatch(&event), DispatchOutcome::Replied);
        let message = only_message(&sink);
        assert_eq!(message.speaker, "Ability Check Group");
        assert_eq!(
            message.content,
            "/w \"Aria\" &{template:desc} {{desc=**Strength Checks**<br>Skills<br>\
             [Athletics](~aria|athletics)<br>Basics<br>\
             [General](~aria|strength) [Save](~aria|strength_save)}}"
        );
    }

    #[test]
    fn test_npc_save_override() {
        let (dispatcher, sink) = dispatcher(table());
        let event = ChatEvent::api("!acg -str", "Sam (GM)").with_selected(&["gob_tok"]);

        dispatcher.dispatch(&event);
        let message = only_message(&sink);
        assert!(message.content.starts_with("/w \"Goblin\" "));
        assert!(message.content.contains("[Save](~gob|npc_str_save)"));
        assert!(message.content.contains("[General](~gob|strength)"));
        assert!(message.content.contains("[Athletics](~gob|athletics)"));
    }

    #[test]
    fn test_main_menu() {
        let (dispatcher, sink) = dispatcher(table());
        let event = ChatEvent::api("!acg -main", "Sam").with_selected(&["aria_tok"]);

        dispatcher.dispatch(&event);
        assert_eq!(
            only_message(&sink).content,
            "/w \"Aria\" &{template:desc} {{desc=**Ability Checks**<br>\
             [Str](!acg -str)[Dex](!acg -dex)[Con](!acg -con)<br>\
             [Int](!acg -int)[Wis](!acg -wis)[Cha](!acg -cha)}}"
        );
    }

    #[test]
    fn test_bare_command_produces_nothing() {
        let (dispatcher, sink) = dispatcher(table());
        let event = ChatEvent::api("!acg", "Sam").with_selected(&["aria_tok"]);
        assert_eq!(dispatcher.dispatch(&event), DispatchOutcome::Silent);

        let event = ChatEvent::api("!acg   ", "Sam");
        assert_eq!(dispatcher.dispatch(&event), DispatchOutcome::Silent);
        assert!(sink.messages().is_empty());
    }

    #[test]
    fn test_non_api_messages_ignored() {
        let (dispatcher, sink) = dispatcher(table());
        let mut event = ChatEvent::api("!acg -str", "Sam").with_selected(&["aria_tok"]);
        event.kind = MessageType::General;
        assert_eq!(dispatcher.dispatch(&event), DispatchOutcome::Ignored);
        assert!(sink.messages().is_empty());
    }

    #[test]
    fn test_other_commands_ignored() {
        let (dispatcher, sink) = dispatcher(table());
        for content in ["!roll 1d20", "!acgx -str", "hello", ""] {
            let event = ChatEvent::api(content, "Sam").with_selected(&["aria_tok"]);
            assert_eq!(dispatcher.dispatch(&event), DispatchOutcome::Ignored);
        }
        assert!(sink.messages().is_empty());
    }

    #[test]
    fn test_invalid_category_goes_to_gm() {
        let (dispatcher, sink) = dispatcher(table());
        let event = ChatEvent::api("!acg -xyz", "Sam").with_selected(&["aria_tok"]);

        assert_eq!(dispatcher.dispatch(&event), DispatchOutcome::Failed);
        let message = only_message(&sink);
        assert!(message.content.starts_with("/w \"gm\" <span style=\"color: red;"));
        assert!(message.content.contains("\"xyz\""));
        assert!(message.content.contains("is not a valid attribute."));
    }

    #[test]
    fn test_selection_error_whispered_to_sender() {
        let (dispatcher, sink) = dispatcher(table());
        let event = ChatEvent::api("!acg -str", "Sam (GM)");

        assert_eq!(dispatcher.dispatch(&event), DispatchOutcome::Failed);
        let message = only_message(&sink);
        assert_eq!(
            message.content,
            "/w \"Sam\" <span style=\"color: red; font-weight: bold;\">\
             SelectionError: A token must be selected before using this script.</span>"
        );
    }

    #[test]
    fn test_drawing_and_multiple_selection_rejected() {
        let (dispatcher, sink) = dispatcher(table());
        let drawing = ChatEvent::api("!acg -str", "Sam").with_selected(&["doodle"]);
        let two = ChatEvent::api("!acg -str", "Sam").with_selected(&["aria_tok", "gob_tok"]);

        assert_eq!(dispatcher.dispatch(&drawing), DispatchOutcome::Failed);
        assert_eq!(dispatcher.dispatch(&two), DispatchOutcome::Failed);
        for message in sink.messages() {
            assert!(message.content.starts_with("/w \"Sam\" "));
            assert!(message.content.contains("SelectionError"));
        }
    }

    #[test]
    fn test_missing_argument_goes_to_gm() {
        let (dispatcher, sink) = dispatcher(table());
        let event = ChatEvent::api("!acg str", "Sam").with_selected(&["aria_tok"]);
        assert_eq!(dispatcher.dispatch(&event), DispatchOutcome::Failed);
        assert!(only_message(&sink).content.starts_with("/w \"gm\" "));
    }

    struct BrokenStore;

    impl ObjectStore for BrokenStore {
        fn graphic(&self, _id: &str) -> anyhow::Result<Option<Graphic>> {
            Err(anyhow::anyhow!("store offline"))
        }

        fn character(&self, _id: &str) -> anyhow::Result<Option<CharacterRecord>> {
            Ok(None)
        }

        fn find_attributes(
            &self,
            _character_id: &str,
            _name: &str,
        ) -> anyhow::Result<Vec<AttributeRecord>> {
            Ok(vec![])
        }
    }

    #[test]
    fn test_host_failure_reported_to_gm_and_next_command_still_runs() {
        let sink = Arc::new(RecordingSink::new());
        let ctx = CommandContext::new(Arc::new(BrokenStore), sink.clone(), Config::default());
        let dispatcher = CommandDispatcher::with_default_handlers(ctx);

        let event = ChatEvent::api("!acg -str", "Sam").with_selected(&["tok"]);
        assert_eq!(dispatcher.dispatch(&event), DispatchOutcome::Failed);
        assert_eq!(dispatcher.dispatch(&event), DispatchOutcome::Failed);

        let messages = sink.messages();
        assert_eq!(messages.len(), 2);
        assert!(messages[0].content.starts_with("/w \"gm\" "));
        assert!(messages[0].content.contains("store offline"));
    }

    struct FailingSink;

    impl FeedbackSink for FailingSink {
        fn send_chat(&self, _speaker: &str, _content: &str) -> anyhow::Result<()> {
            Err(anyhow::anyhow!("chat unavailable"))
        }
    }

    #[test]
    fn test_sink_failure_does_not_escape() {
        let ctx = CommandContext::new(Arc::new(table()), Arc::new(FailingSink), Config::default());
        let dispatcher = CommandDispatcher::with_default_handlers(ctx);
        let event = ChatEvent::api("!acg -str", "Sam").with_selected(&["aria_tok"]);
        assert_eq!(dispatcher.dispatch(&event), DispatchOutcome::Replied);
    }

    #[test]
    fn test_custom_command_name() {
        let sink = Arc::new(RecordingSink::new());
        let config = Config {
            command: "checks".to_string(),
            ..Config::default()
        };
        let ctx = CommandContext::new(Arc::new(table()), sink.clone(), config);
        let dispatcher = CommandDispatcher::with_default_handlers(ctx);

        let old = ChatEvent::api("!acg -main", "Sam").with_selected(&["aria_tok"]);
        assert_eq!(dispatcher.dispatch(&old), DispatchOutcome::Ignored);

        let event = ChatEvent::api("!checks -main", "Sam").with_selected(&["aria_tok"]);
        assert_eq!(dispatcher.dispatch(&event), DispatchOutcome::Replied);
        assert!(only_message(&sink).content.contains("[Str](!checks -str)"));
    }
}
