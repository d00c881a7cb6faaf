//! Member response formatters

use serde_json::{Map, Value};

use super::{bool_field, duplicate_block, str_field, MISSING, UNDEFINED};
use crate::services::extract::Payload;

/// Render a member-lookup payload
pub fn format_member(payload: &Payload) -> String {
    let map = match payload {
        Payload::RawText(text) => return text.clone(),
        Payload::Structured(map) => map,
    };

    let name = subject_name(map);
    if bool_field(map, "exists") == Some(false) {
        return format!("'{name}' 회원을 찾을 수 없습니다.");
    }
    if let Some(block) = duplicate_block(&name, map) {
        return block;
    }

    let team = str_field(map, "team").unwrap_or_else(|| MISSING.to_string());
    let mut out = format!("이름: {name}\n팀: {team}");
    if let Some(member_id) = str_field(map, "member_id") {
        out.push_str(&format!("\nID: {member_id}"));
    }
    out
}

/// Render a team-membership payload (the `!팀확인` answer)
pub fn format_membership(payload: &Payload) -> String {
    let map = match payload {
        Payload::RawText(text) => return text.clone(),
        Payload::Structured(map) => map,
    };

    let name = subject_name(map);
    if bool_field(map, "is_member") == Some(false) || bool_field(map, "exists") == Some(false) {
        return format!("'{name}' 회원은 등록되어 있지 않습니다.");
    }
    if let Some(block) = duplicate_block(&name, map) {
        return block;
    }

    let team = str_field(map, "team").unwrap_or_else(|| MISSING.to_string());
    format!("{name}님의 팀: {team}")
}

fn subject_name(map: &Map<String, Value>) -> String {
    str_field(map, "name")
        .or_else(|| str_field(map, "member"))
        .unwrap_or_else(|| UNDEFINED.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn structured(value: Value) -> Payload {
        Payload::Structured(value.as_object().unwrap().clone())
    }

    #[test]
    fn raw_text_passes_through() {
        let payload = Payload::RawText("회원이 등록되었습니다.".to_string());
        assert_eq!(format_member(&payload), "회원이 등록되었습니다.");
    }

    #[test]
    fn missing_member_renders_not_found() {
        let payload = structured(json!({"name": "홍길동", "exists": false}));
        assert_eq!(format_member(&payload), "'홍길동' 회원을 찾을 수 없습니다.");
    }

    #[test]
    fn duplicates_render_one_line_per_candidate() {
        let payload = structured(json!({
            "name": "홍길동",
            "is_unique": false,
            "count": 2,
            "duplicates": [
                {"member_id": "MEM_AAAA1111", "team": "블루"},
                {"member_id": "MEM_BBBB2222", "team": null}
            ]
        }));
        assert_eq!(
            format_member(&payload),
            "'홍길동' 이름의 회원이 2명 있습니다. member_id를 함께 입력해주세요.\n\
             ID: MEM_AAAA1111 (팀: 블루)\n\
             ID: MEM_BBBB2222 (팀: 없음)"
        );
    }

    #[test]
    fn detail_includes_member_id_when_present() {
        let payload = structured(json!({
            "name": "홍길동",
            "team": "블루",
            "member_id": "MEM_AAAA1111"
        }));
        assert_eq!(
            format_member(&payload),
            "이름: 홍길동\n팀: 블루\nID: MEM_AAAA1111"
        );
    }

    #[test]
    fn detail_defaults_absent_team() {
        let payload = structured(json!({"name": "홍길동"}));
        assert_eq!(format_member(&payload), "이름: 홍길동\n팀: 없음");
    }

    #[test]
    fn formatting_is_idempotent() {
        let payload = structured(json!({"name": "홍길동", "team": "블루"}));
        assert_eq!(format_member(&payload), format_member(&payload));
    }

    #[test]
    fn membership_reports_unregistered_member() {
        let payload = structured(json!({"name": "홍길동", "is_member": false}));
        assert_eq!(
            format_membership(&payload),
            "'홍길동' 회원은 등록되어 있지 않습니다."
        );
    }

    #[test]
    fn membership_renders_team() {
        let payload = structured(json!({"name": "홍길동", "team": "블루"}));
        assert_eq!(format_membership(&payload), "홍길동님의 팀: 블루");
    }

    #[test]
    fn membership_without_team_defaults() {
        let payload = structured(json!({"name": "홍길동", "is_member": true}));
        assert_eq!(format_membership(&payload), "홍길동님의 팀: 없음");
    }
}
