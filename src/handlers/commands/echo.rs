//! Echo command handler

use serde_json::{Map, Value};

use crate::formatters::format_plain;
use crate::services::{render_outcome, BackendGateway, RequestSpec};
use crate::utils::errors::Result;

pub const USAGE: &str = "에코할 메시지를 입력하세요. 예: !echo 안녕하세요";

/// Handle `!echo` / `!에코`
///
/// The joined remainder of the message is echoed back by the server. Not
/// room-scoped.
pub async fn handle(args: &[&str], gateway: &BackendGateway) -> Result<Option<String>> {
    if args.is_empty() {
        return Ok(Some(USAGE.to_string()));
    }

    let mut params = Map::new();
    params.insert("message".to_string(), Value::String(args.join(" ")));

    let spec = RequestSpec::new("/api/commands/echo/", params);
    let outcome = gateway.send(&spec).await;
    Ok(Some(render_outcome(&outcome, format_plain)))
}
