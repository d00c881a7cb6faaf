//! Game command handlers

use chrono::NaiveDate;
use serde_json::Value;

use super::room_scoped;
use crate::formatters::game::{format_game_created, format_game_list};
use crate::models::ChatEvent;
use crate::services::{render_outcome, BackendGateway, RequestSpec};
use crate::utils::errors::Result;

const ENDPOINT: &str = "/api/commands/game/";

pub const USAGE_CREATE: &str = "날짜 형식이 올바르지 않습니다. (예시: !게임생성 2025-01-31)";

/// Handle `!게임생성` / `!게임추가`
///
/// The date argument is optional. When omitted, no `date` parameter is sent
/// at all: the omission itself tells the backend to use its own default.
pub async fn handle_create(
    event: &ChatEvent,
    args: &[&str],
    gateway: &BackendGateway,
) -> Result<Option<String>> {
    let mut params = room_scoped(event);
    if let Some(date) = args.first() {
        if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
            return Ok(Some(USAGE_CREATE.to_string()));
        }
        params.insert("date".to_string(), Value::String((*date).to_string()));
    }

    let spec = RequestSpec::new(ENDPOINT, params);
    let outcome = gateway.send(&spec).await;
    Ok(Some(render_outcome(&outcome, format_game_created)))
}

/// Handle `!게임목록` / `!게임조회`
///
/// The response horizon is a backend concern; no `days`/`limit` is sent.
pub async fn handle_list(event: &ChatEvent, gateway: &BackendGateway) -> Result<Option<String>> {
    let params = room_scoped(event);

    let spec = RequestSpec::get(ENDPOINT, params);
    let outcome = gateway.send(&spec).await;
    Ok(Some(render_outcome(&outcome, format_game_list)))
}
