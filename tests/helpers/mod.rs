//! Shared helpers for pipeline tests

use HoopBuddy::config::ServerConfig;
use HoopBuddy::models::ChatEvent;
use HoopBuddy::services::BackendGateway;

/// Default test room
pub const TEST_ROOM: &str = "농구방";
/// Default test sender
pub const TEST_SENDER: &str = "홍길동";

/// Build a chat event from the default room and sender
pub fn chat_event(message: &str) -> ChatEvent {
    chat_event_from(TEST_SENDER, message)
}

/// Build a chat event from a specific sender
pub fn chat_event_from(sender: &str, message: &str) -> ChatEvent {
    ChatEvent {
        room: TEST_ROOM.to_string(),
        message: message.to_string(),
        sender: sender.to_string(),
        is_group_chat: true,
        package_name: None,
    }
}

/// Build a gateway pointed at a test server
pub fn gateway(base_url: &str) -> BackendGateway {
    BackendGateway::new(&ServerConfig {
        base_url: base_url.to_string(),
        timeout_ms: 2_000,
    })
    .expect("failed to build test gateway")
}
