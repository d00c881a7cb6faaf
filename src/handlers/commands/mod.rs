//! Command handlers module
//!
//! One module per command family. Every accepted token maps to one canonical
//! command identifier here; handlers own argument validation, parameter-map
//! construction, endpoint/method selection and the formatter binding.

pub mod echo;
pub mod game;
pub mod health;
pub mod help;
pub mod member;
pub mod team;

use serde_json::{Map, Value};

use crate::models::ChatEvent;
use crate::services::BackendGateway;
use crate::utils::errors::Result;

/// Canonical command identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Health,
    Echo,
    MemberCreate,
    MemberLookup,
    MemberDelete,
    TeamCreate,
    TeamLookup,
    TeamAssign,
    TeamUnassign,
    TeamQuery,
    GameCreate,
    GameList,
    Help,
}

/// Resolve a lowercased command token, including synonyms
pub fn resolve(name: &str) -> Option<Command> {
    match name {
        "health" => Some(Command::Health),
        "echo" | "에코" => Some(Command::Echo),
        "회원등록" | "멤버등록" => Some(Command::MemberCreate),
        "회원조회" | "멤버조회" => Some(Command::MemberLookup),
        "회원삭제" | "멤버삭제" => Some(Command::MemberDelete),
        "팀생성" | "팀추가" => Some(Command::TeamCreate),
        "팀조회" | "팀목록" => Some(Command::TeamLookup),
        "팀배정" => Some(Command::TeamAssign),
        "팀해제" => Some(Command::TeamUnassign),
        "팀확인" => Some(Command::TeamQuery),
        "게임생성" | "게임추가" => Some(Command::GameCreate),
        "게임목록" | "게임조회" => Some(Command::GameList),
        "help" | "도움말" => Some(Command::Help),
        _ => None,
    }
}

/// Main command dispatcher
pub async fn dispatch(
    command: Command,
    event: &ChatEvent,
    args: &[&str],
    gateway: &BackendGateway,
) -> Result<Option<String>> {
    match command {
        Command::Health => health::handle(event, gateway).await,
        Command::Echo => echo::handle(args, gateway).await,
        Command::MemberCreate => member::handle_create(event, args, gateway).await,
        Command::MemberLookup => member::handle_lookup(event, args, gateway).await,
        Command::MemberDelete => member::handle_delete(event, args, gateway).await,
        Command::TeamCreate => team::handle_create(event, args, gateway).await,
        Command::TeamLookup => team::handle_lookup(event, args, gateway).await,
        Command::TeamAssign => team::handle_assign(event, args, gateway).await,
        Command::TeamUnassign => team::handle_unassign(event, args, gateway).await,
        Command::TeamQuery => team::handle_query(event, args, gateway).await,
        Command::GameCreate => game::handle_create(event, args, gateway).await,
        Command::GameList => game::handle_list(event, gateway).await,
        Command::Help => help::handle().await,
    }
}

/// Base parameter map for room-scoped commands
///
/// Member, team and game endpoints are scoped to the chat room; `sender` and
/// `room` are never omitted for them.
pub(crate) fn room_scoped(event: &ChatEvent) -> Map<String, Value> {
    let mut params = Map::new();
    params.insert("sender".to_string(), Value::String(event.sender.clone()));
    params.insert("room".to_string(), Value::String(event.room.clone()));
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synonyms_resolve_to_one_command() {
        assert_eq!(resolve("팀생성"), resolve("팀추가"));
        assert_eq!(resolve("게임목록"), resolve("게임조회"));
        assert_eq!(resolve("echo"), resolve("에코"));
        assert_eq!(resolve("help"), resolve("도움말"));
        assert_eq!(resolve("회원등록"), resolve("멤버등록"));
    }

    #[test]
    fn unknown_tokens_do_not_resolve() {
        assert_eq!(resolve("없는명령"), None);
        assert_eq!(resolve(""), None);
    }
}
