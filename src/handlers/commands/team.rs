//! Team command handlers

use serde_json::Value;

use super::room_scoped;
use crate::formatters::{format_plain, member::format_membership, team::format_team};
use crate::models::ChatEvent;
use crate::services::{render_outcome, BackendGateway, RequestSpec};
use crate::utils::errors::Result;

const TEAM_ENDPOINT: &str = "/api/commands/team/";
const MEMBER_TEAM_ENDPOINT: &str = "/api/commands/member_team/";

pub const USAGE_CREATE: &str = "팀 이름을 입력하세요. (예시: !팀생성 블루)";
pub const USAGE_ASSIGN_ALL: &str = "배정할 회원과 팀을 입력하세요. (예시: !팀배정 홍길동 블루)";
pub const USAGE_ASSIGN_TEAM: &str = "배정할 팀을 입력하세요. (예시: !팀배정 홍길동 블루)";
pub const USAGE_UNASSIGN: &str = "팀을 해제할 회원 이름을 입력하세요. (예시: !팀해제 홍길동)";

/// Handle `!팀생성` / `!팀추가`
pub async fn handle_create(
    event: &ChatEvent,
    args: &[&str],
    gateway: &BackendGateway,
) -> Result<Option<String>> {
    let Some(team) = args.first() else {
        return Ok(Some(USAGE_CREATE.to_string()));
    };

    let mut params = room_scoped(event);
    params.insert("team".to_string(), Value::String((*team).to_string()));

    let spec = RequestSpec::new(TEAM_ENDPOINT, params);
    let outcome = gateway.send(&spec).await;
    Ok(Some(render_outcome(&outcome, format_plain)))
}

/// Handle `!팀조회` / `!팀목록`
///
/// With a team name the backend answers with that team's detail; without one
/// it answers with the room's team list.
pub async fn handle_lookup(
    event: &ChatEvent,
    args: &[&str],
    gateway: &BackendGateway,
) -> Result<Option<String>> {
    let mut params = room_scoped(event);
    if let Some(team) = args.first() {
        params.insert("team".to_string(), Value::String((*team).to_string()));
    }

    let spec = RequestSpec::get(TEAM_ENDPOINT, params);
    let outcome = gateway.send(&spec).await;
    Ok(Some(render_outcome(&outcome, format_team)))
}

/// Handle `!팀배정`
///
/// The zero-argument and one-argument cases get distinct usage replies.
pub async fn handle_assign(
    event: &ChatEvent,
    args: &[&str],
    gateway: &BackendGateway,
) -> Result<Option<String>> {
    let (member, team) = match args {
        [] => return Ok(Some(USAGE_ASSIGN_ALL.to_string())),
        [_member] => return Ok(Some(USAGE_ASSIGN_TEAM.to_string())),
        [member, team, ..] => (*member, *team),
    };

    let mut params = room_scoped(event);
    params.insert("member".to_string(), Value::String(member.to_string()));
    params.insert("team".to_string(), Value::String(team.to_string()));

    let spec = RequestSpec::new(MEMBER_TEAM_ENDPOINT, params);
    let outcome = gateway.send(&spec).await;
    Ok(Some(render_outcome(&outcome, format_plain)))
}

/// Handle `!팀해제`
pub async fn handle_unassign(
    event: &ChatEvent,
    args: &[&str],
    gateway: &BackendGateway,
) -> Result<Option<String>> {
    let Some(member) = args.first() else {
        return Ok(Some(USAGE_UNASSIGN.to_string()));
    };

    let mut params = room_scoped(event);
    params.insert("member".to_string(), Value::String((*member).to_string()));

    let spec = RequestSpec::delete(MEMBER_TEAM_ENDPOINT, params);
    let outcome = gateway.send(&spec).await;
    Ok(Some(render_outcome(&outcome, format_plain)))
}

/// Handle `!팀확인`
///
/// The member argument defaults to the sender's own name; the optional
/// second argument is a disambiguating `member_id`.
pub async fn handle_query(
    event: &ChatEvent,
    args: &[&str],
    gateway: &BackendGateway,
) -> Result<Option<String>> {
    let member = args.first().copied().unwrap_or(event.sender.as_str());

    let mut params = room_scoped(event);
    params.insert("member".to_string(), Value::String(member.to_string()));
    if let Some(member_id) = args.get(1) {
        params.insert(
            "member_id".to_string(),
            Value::String((*member_id).to_string()),
        );
    }

    let spec = RequestSpec::get(MEMBER_TEAM_ENDPOINT, params);
    let outcome = gateway.send(&spec).await;
    Ok(Some(render_outcome(&outcome, format_membership)))
}
