//! Member command handlers

use serde_json::Value;

use super::room_scoped;
use crate::formatters::{format_plain, member::format_member};
use crate::models::ChatEvent;
use crate::services::{render_outcome, BackendGateway, RequestSpec};
use crate::utils::errors::Result;

const ENDPOINT: &str = "/api/commands/member/";

pub const USAGE_CREATE: &str = "회원 이름을 입력하세요. (예시: !회원등록 홍길동)";
pub const USAGE_LOOKUP: &str = "조회할 회원 이름을 입력하세요. (예시: !회원조회 홍길동)";
pub const USAGE_DELETE: &str = "삭제할 회원 이름을 입력하세요. (예시: !회원삭제 홍길동)";

/// Handle `!회원등록` / `!멤버등록`
pub async fn handle_create(
    event: &ChatEvent,
    args: &[&str],
    gateway: &BackendGateway,
) -> Result<Option<String>> {
    let Some(member) = args.first() else {
        return Ok(Some(USAGE_CREATE.to_string()));
    };

    let mut params = room_scoped(event);
    params.insert("member".to_string(), Value::String((*member).to_string()));

    let spec = RequestSpec::new(ENDPOINT, params);
    let outcome = gateway.send(&spec).await;
    Ok(Some(render_outcome(&outcome, format_plain)))
}

/// Handle `!회원조회` / `!멤버조회`
///
/// The optional second argument is a `member_id` disambiguating same-named
/// members within the room.
pub async fn handle_lookup(
    event: &ChatEvent,
    args: &[&str],
    gateway: &BackendGateway,
) -> Result<Option<String>> {
    let Some(member) = args.first() else {
        return Ok(Some(USAGE_LOOKUP.to_string()));
    };

    let mut params = room_scoped(event);
    params.insert("member".to_string(), Value::String((*member).to_string()));
    if let Some(member_id) = args.get(1) {
        params.insert(
            "member_id".to_string(),
            Value::String((*member_id).to_string()),
        );
    }

    let spec = RequestSpec::get(ENDPOINT, params);
    let outcome = gateway.send(&spec).await;
    Ok(Some(render_outcome(&outcome, format_member)))
}

/// Handle `!회원삭제` / `!멤버삭제`
pub async fn handle_delete(
    event: &ChatEvent,
    args: &[&str],
    gateway: &BackendGateway,
) -> Result<Option<String>> {
    let Some(member) = args.first() else {
        return Ok(Some(USAGE_DELETE.to_string()));
    };

    let mut params = room_scoped(event);
    params.insert("member".to_string(), Value::String((*member).to_string()));

    let spec = RequestSpec::delete(ENDPOINT, params);
    let outcome = gateway.send(&spec).await;
    Ok(Some(render_outcome(&outcome, format_plain)))
}
