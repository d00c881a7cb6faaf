//! Response formatters
//!
//! Pure functions from an extracted payload to display text. Every formatter
//! follows the same decision order: raw-text payloads pass through unchanged,
//! negative/existence checks come first, duplicate-name disambiguation next,
//! empty collections before full-detail templates. A formatter never fails;
//! missing sub-fields substitute their documented default text.

pub mod game;
pub mod member;
pub mod team;
pub mod time;

use serde_json::{Map, Value};

use crate::services::extract::Payload;

/// Default text for absent team/url/clock style fields
pub(crate) const MISSING: &str = "없음";
/// Default text for absent name/creator style fields
pub(crate) const UNDEFINED: &str = "undefined";

/// Passthrough formatter for endpoints that answer with plain messages
pub fn format_plain(payload: &Payload) -> String {
    match payload {
        Payload::RawText(text) => text.clone(),
        Payload::Structured(map) => Value::Object(map.clone()).to_string(),
    }
}

/// Read a field as display text; numbers and booleans stringify bare
pub(crate) fn str_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    match map.get(key)? {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

pub(crate) fn bool_field(map: &Map<String, Value>, key: &str) -> Option<bool> {
    map.get(key)?.as_bool()
}

pub(crate) fn u64_field(map: &Map<String, Value>, key: &str) -> Option<u64> {
    map.get(key)?.as_u64()
}

/// Last four characters of a member id, char-boundary safe
pub(crate) fn id_suffix(id: &str) -> &str {
    match id.char_indices().rev().nth(3) {
        Some((index, _)) => &id[index..],
        None => id,
    }
}

/// Duplicate-name disambiguation block
///
/// Rendered when the backend reports `is_unique == false` together with a
/// `duplicates` list: a header with the collision count and one line per
/// candidate instructing the user to retry with a `member_id`.
pub(crate) fn duplicate_block(name: &str, map: &Map<String, Value>) -> Option<String> {
    if bool_field(map, "is_unique") != Some(false) {
        return None;
    }
    let duplicates = map.get("duplicates")?.as_array()?;
    let count = u64_field(map, "count").unwrap_or(duplicates.len() as u64);

    let mut out = format!(
        "'{name}' 이름의 회원이 {count}명 있습니다. member_id를 함께 입력해주세요."
    );
    for duplicate in duplicates {
        let Some(entry) = duplicate.as_object() else {
            continue;
        };
        let member_id = str_field(entry, "member_id").unwrap_or_else(|| UNDEFINED.to_string());
        let team = str_field(entry, "team").unwrap_or_else(|| MISSING.to_string());
        out.push_str(&format!("\nID: {member_id} (팀: {team})"));
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plain_formatter_passes_raw_text_through() {
        let payload = Payload::RawText("pong".to_string());
        assert_eq!(format_plain(&payload), "pong");
    }

    #[test]
    fn plain_formatter_serializes_structured_payloads() {
        let map = json!({"status": "ok"}).as_object().unwrap().clone();
        assert_eq!(format_plain(&Payload::Structured(map)), r#"{"status":"ok"}"#);
    }

    #[test]
    fn id_suffix_is_char_boundary_safe() {
        assert_eq!(id_suffix("MEM_AAAA1111"), "1111");
        assert_eq!(id_suffix("ab"), "ab");
        assert_eq!(id_suffix("멤버아이디사"), "아이디사");
    }

    #[test]
    fn duplicate_block_needs_both_flag_and_list() {
        let no_list = json!({"is_unique": false}).as_object().unwrap().clone();
        assert!(duplicate_block("홍길동", &no_list).is_none());

        let unique = json!({"is_unique": true, "duplicates": []})
            .as_object()
            .unwrap()
            .clone();
        assert!(duplicate_block("홍길동", &unique).is_none());
    }
}
