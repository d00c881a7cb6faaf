//! Bot handlers module
//!
//! The command router: parses inbound chat text into a command token plus
//! positional arguments, resolves the token through the synonym registry and
//! dispatches to the matching handler. Anything a handler fails on is caught
//! here and turned into the fixed error reply; the host never sees a crash.

pub mod commands;

use tracing::{debug, error};

use crate::models::ChatEvent;
use crate::services::BackendGateway;

/// Reply for unrecognized command tokens
pub const UNKNOWN_COMMAND_REPLY: &str = "알 수 없는 명령어입니다. !도움말을 입력하세요.";

/// Handle one inbound chat event, producing at most one reply
///
/// Ordinary chat (no `!` prefix) is a deliberate no-op, not an error.
pub async fn handle_event(event: &ChatEvent, gateway: &BackendGateway) -> Option<String> {
    let text = event.message.trim();
    if !text.starts_with('!') {
        return None;
    }

    let mut tokens = text.split_whitespace();
    let head = tokens.next()?;
    let name = head.strip_prefix('!').unwrap_or(head).to_lowercase();
    let args: Vec<&str> = tokens.collect();

    debug!(
        command = %name,
        sender = %event.sender,
        room = %event.room,
        is_group_chat = event.is_group_chat,
        "dispatching command"
    );

    let result = match commands::resolve(&name) {
        Some(command) => commands::dispatch(command, event, &args, gateway).await,
        None => Ok(Some(UNKNOWN_COMMAND_REPLY.to_string())),
    };

    match result {
        Ok(reply) => reply,
        Err(e) => {
            error!(error = %e, command = %name, "command handler failed");
            Some(format!("오류가 발생했습니다: {e}"))
        }
    }
}
