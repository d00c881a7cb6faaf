//! Team response formatters

use serde_json::{Map, Value};

use super::{bool_field, id_suffix, str_field, u64_field, UNDEFINED};
use crate::services::extract::Payload;

/// Render a team-lookup payload: a single team's detail, or the team list
/// when the backend answers with a `teams` array
pub fn format_team(payload: &Payload) -> String {
    let map = match payload {
        Payload::RawText(text) => return text.clone(),
        Payload::Structured(map) => map,
    };

    if let Some(teams) = map.get("teams").and_then(Value::as_array) {
        return team_list(map, teams);
    }

    let name = str_field(map, "name")
        .or_else(|| str_field(map, "team"))
        .unwrap_or_else(|| UNDEFINED.to_string());
    if bool_field(map, "exists") == Some(false) {
        return format!("'{name}' 팀을 찾을 수 없습니다.");
    }

    let members = member_entries(map);
    let count = u64_field(map, "member_count").unwrap_or(members.len() as u64);
    if count == 0 {
        return format!("'{name}' 팀에 등록된 멤버가 없습니다.");
    }

    format!(
        "팀: {name}\n인원: {count}명\n멤버: {}",
        member_roster(&members)
    )
}

fn team_list(map: &Map<String, Value>, teams: &[Value]) -> String {
    let count = u64_field(map, "count").unwrap_or(teams.len() as u64);
    if count == 0 {
        return "등록된 팀이 없습니다. !팀생성 명령어로 팀을 만들어보세요.".to_string();
    }

    let mut out = String::from("팀 목록");
    for (index, team) in teams.iter().enumerate() {
        let Some(entry) = team.as_object() else {
            continue;
        };
        let name = str_field(entry, "name").unwrap_or_else(|| UNDEFINED.to_string());
        let members = u64_field(entry, "member_count").unwrap_or(0);
        out.push_str(&format!("\n{}. {name} ({members}명)", index + 1));
    }
    out.push_str(&format!("\n\n총 {count}개의 팀이 있습니다."));
    out
}

/// Member list entries are either plain name strings or `{name, member_id}`
/// objects, depending on the backend generation
fn member_entries(map: &Map<String, Value>) -> Vec<(String, Option<String>)> {
    let Some(members) = map.get("members").and_then(Value::as_array) else {
        return Vec::new();
    };
    members
        .iter()
        .filter_map(|member| match member {
            Value::String(name) => Some((name.clone(), None)),
            Value::Object(entry) => Some((
                str_field(entry, "name").unwrap_or_else(|| UNDEFINED.to_string()),
                str_field(entry, "member_id"),
            )),
            _ => None,
        })
        .collect()
}

/// Join member names with ", ", disambiguating colliding names with the last
/// four characters of their member id
fn member_roster(members: &[(String, Option<String>)]) -> String {
    members
        .iter()
        .map(|(name, member_id)| {
            let collisions = members.iter().filter(|(other, _)| other == name).count();
            match member_id {
                Some(id) if collisions > 1 => format!("{name}({})", id_suffix(id)),
                _ => name.clone(),
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
