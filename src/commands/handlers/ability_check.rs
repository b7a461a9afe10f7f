//! Ability check command handler
//!
//! Handles: `!acg -main`, `!acg -<str|dex|con|int|wis|cha>`
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.9.0
//!
//! ## Changelog
//! - 1.0.0: Main menu and per-category check responses

use log::debug;
use regex::Regex;
use std::sync::OnceLock;

use crate::commands::context::CommandContext;
use crate::commands::handler::{ChatCommandHandler, Invocation, Reply};
use crate::core::CommandError;
use crate::features::abilities::ResponseBuilder;
use crate::features::characters::CharacterResolver;

/// Argument prefix requesting the main menu
pub const MAIN_MENU_ARG: &str = "-main";

/// Handler for the ability check menus
pub struct AbilityCheckHandler {
    command: String,
}

impl AbilityCheckHandler {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl ChatCommandHandler for AbilityCheckHandler {
    fn command_names(&self) -> Vec<String> {
        vec![self.command.clone()]
    }

    fn handle(
        &self,
        ctx: &CommandContext,
        invocation: &Invocation<'_>,
    ) -> Result<Option<Reply>, CommandError> {
        let request_id = invocation.request_id;
        if invocation.args.is_empty() {
            debug!("[{request_id}] Bare !{} invocation, nothing to do", self.command);
            return Ok(None);
        }

        let identity = CharacterResolver::new(ctx.store()).resolve(invocation.selected())?;
        debug!(
            "[{request_id}] Acting for {} ({})",
            identity.display_name, identity.id
        );

        let builder = ResponseBuilder::new(ctx.store(), &self.command);
        let content = if invocation.args.starts_with(MAIN_MENU_ARG) {
            builder.build_main_menu().render_main()
        } else {
            let key = attribute_argument(invocation.args).ok_or_else(|| {
                CommandError::MissingArgument {
                    input: invocation.args.to_string(),
                }
            })?;
            debug!("[{request_id}] Requested category {key}");
            builder.build_for_category(key, &identity)?.render_checks()
        };

        Ok(Some(Reply::whisper(identity.display_name, content)))
    }
}

/// First `-<word>` token in `args`, without the dash
pub fn attribute_argument(args: &str) -> Option<&str> {
    static ARGUMENT: OnceLock<Regex> = OnceLock::new();
    let argument = ARGUMENT.get_or_init(|| Regex::new(r"-(\w+)").expect("valid regex"));
    argument
        .captures(args)
        .and_then(|captures| captures.get(1))
        .map(|word| word.as_str())
}
