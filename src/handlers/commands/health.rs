//! Health command handler

use serde_json::Value;

use super::room_scoped;
use crate::formatters::format_plain;
use crate::models::ChatEvent;
use crate::services::{render_outcome, BackendGateway, RequestSpec};
use crate::utils::errors::Result;

/// Handle `!health`
pub async fn handle(event: &ChatEvent, gateway: &BackendGateway) -> Result<Option<String>> {
    let mut params = room_scoped(event);
    params.insert(
        "timestamp".to_string(),
        Value::from(chrono::Utc::now().timestamp_millis()),
    );

    let spec = RequestSpec::get("/health/", params);
    let outcome = gateway.send(&spec).await;
    Ok(Some(render_outcome(&outcome, format_plain)))
}
