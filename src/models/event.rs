//! Chat event model
//!
//! The inbound contract with the host messaging runtime. One event is one
//! delivered chat message together with its room and sender context.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatEvent {
    pub room: String,
    pub message: String,
    pub sender: String,
    #[serde(default)]
    pub is_group_chat: bool,
    #[serde(default)]
    pub package_name: Option<String>,
}
