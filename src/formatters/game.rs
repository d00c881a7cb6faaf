//! Game response formatters

use serde_json::{Map, Value};

use super::{str_field, time, u64_field, MISSING, UNDEFINED};
use crate::services::extract::Payload;

const EMPTY_LIST_REPLY: &str = "등록된 게임이 없습니다. !게임생성 명령어로 게임을 만들어보세요.";
const HORIZON_DISCLAIMER: &str = "(최근 30일 이내의 게임만 표시됩니다.)";

/// Render a game-creation payload
pub fn format_game_created(payload: &Payload) -> String {
    let map = match payload {
        Payload::RawText(text) => return text.clone(),
        Payload::Structured(map) => map,
    };

    let date = str_field(map, "date")
        .map(|date| time::short_date(&date))
        .unwrap_or_else(|| MISSING.to_string());
    let creator = str_field(map, "creator").unwrap_or_else(|| UNDEFINED.to_string());
    let clock = str_field(map, "created_at")
        .and_then(|instant| time::local_clock(&instant))
        .unwrap_or_else(|| MISSING.to_string());
    let url = str_field(map, "url").unwrap_or_else(|| MISSING.to_string());

    let mut out = format!(
        "게임이 생성되었습니다.\n날짜: {date}\n상태: {}\n생성자: {creator}\n생성 시각: {clock}\n링크: {url}",
        status_label(map)
    );
    if let Some(room_url) = str_field(map, "room_url") {
        out.push_str(&format!("\n오픈채팅: {room_url}"));
    }
    out
}

/// Render a game-list payload: numbered entries, a count summary and the
/// time-horizon disclaimer
pub fn format_game_list(payload: &Payload) -> String {
    let map = match payload {
        Payload::RawText(text) => return text.clone(),
        Payload::Structured(map) => map,
    };

    let games = map
        .get("games")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[]);
    let count = u64_field(map, "count").unwrap_or(games.len() as u64);
    if count == 0 {
        return EMPTY_LIST_REPLY.to_string();
    }

    let mut out = String::from("게임 목록");
    for (index, game) in games.iter().enumerate() {
        let Some(entry) = game.as_object() else {
            continue;
        };
        let date = str_field(entry, "date")
            .map(|date| time::short_date(&date))
            .unwrap_or_else(|| MISSING.to_string());
        let clock = str_field(entry, "created_at")
            .and_then(|instant| time::local_clock(&instant))
            .unwrap_or_else(|| MISSING.to_string());
        out.push_str(&format!(
            "\n{}. {date} [{}] {clock} 생성",
            index + 1,
            status_label(entry)
        ));
    }
    out.push_str(&format!(
        "\n\n총 {count}개의 게임이 있습니다.\n{HORIZON_DISCLAIMER}"
    ));
    out
}

/// Status text, with the quarter appended while a game is in progress
fn status_label(map: &Map<String, Value>) -> String {
    let status = str_field(map, "status").unwrap_or_else(|| "대기".to_string());
    match str_field(map, "current_quarter") {
        Some(quarter) if status == "진행중" => format!("{status} {quarter}쿼터"),
        _ => status,
    }
}
