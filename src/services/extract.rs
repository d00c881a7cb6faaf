//! Response payload extraction
//!
//! The backend's response shapes have evolved over several deployments, and
//! older shapes are still live. Extraction is an ordered list of strategies
//! tried in fixed precedence: `data`, then `message`, then the legacy
//! `{success, response}` pair, then the raw body text. New strategies are
//! appended at the end, never reordered, so older deployments keep working.

use serde_json::{Map, Value};

/// Extracted payload handed to a response formatter
///
/// A `RawText` payload is already-final display text; `Structured` carries
/// the JSON object a formatter renders through its template.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    RawText(String),
    Structured(Map<String, Value>),
}

type Strategy = fn(&Map<String, Value>) -> Option<Payload>;

const STRATEGIES: &[Strategy] = &[extract_data, extract_message, extract_legacy];

/// Extract a payload from a response body
pub fn extract(body: &str) -> Payload {
    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) => return Payload::RawText(body.to_string()),
    };

    let Value::Object(map) = value else {
        return Payload::RawText(body.to_string());
    };

    for strategy in STRATEGIES {
        if let Some(payload) = strategy(&map) {
            return payload;
        }
    }

    Payload::RawText(body.to_string())
}

/// Current shape: `{"data": ...}`
fn extract_data(map: &Map<String, Value>) -> Option<Payload> {
    let payload = match map.get("data")? {
        Value::Object(data) => Payload::Structured(data.clone()),
        Value::String(text) => Payload::RawText(text.clone()),
        other => Payload::RawText(other.to_string()),
    };
    Some(payload)
}

/// Intermediate shape: `{"message": "..."}`
fn extract_message(map: &Map<String, Value>) -> Option<Payload> {
    let payload = match map.get("message")? {
        Value::String(text) => Payload::RawText(text.clone()),
        other => Payload::RawText(other.to_string()),
    };
    Some(payload)
}

/// Legacy shape: `{"success": ..., "response": ...}`, both fields required
fn extract_legacy(map: &Map<String, Value>) -> Option<Payload> {
    map.get("success")?;
    let payload = match map.get("response")? {
        Value::String(text) => Payload::RawText(text.clone()),
        other => Payload::RawText(other.to_string()),
    };
    Some(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    #[test]
    fn data_takes_precedence_over_message() {
        let body = json!({"data": {"x": 1}, "message": "m"}).to_string();
        let payload = extract(&body);
        assert_matches!(payload, Payload::Structured(map) => {
            assert_eq!(map.get("x"), Some(&json!(1)));
        });
    }

    #[test]
    fn message_returned_when_no_data() {
        let body = json!({"message": "m"}).to_string();
        assert_eq!(extract(&body), Payload::RawText("m".to_string()));
    }

    #[test]
    fn legacy_response_needs_both_fields() {
        let body = json!({"success": true, "response": "r"}).to_string();
        assert_eq!(extract(&body), Payload::RawText("r".to_string()));

        let body = json!({"response": "r"}).to_string();
        assert_eq!(extract(&body), Payload::RawText(body.clone()));
    }

    #[test]
    fn empty_object_falls_back_to_raw_body() {
        assert_eq!(extract("{}"), Payload::RawText("{}".to_string()));
    }

    #[test]
    fn non_json_body_passes_through() {
        assert_eq!(extract("pong"), Payload::RawText("pong".to_string()));
    }

    #[test]
    fn non_object_json_passes_through() {
        assert_eq!(extract("[1, 2]"), Payload::RawText("[1, 2]".to_string()));
    }

    #[test]
    fn string_data_is_final_text() {
        let body = json!({"data": "done"}).to_string();
        assert_eq!(extract(&body), Payload::RawText("done".to_string()));
    }
}
