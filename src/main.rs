//! HoopBuddy Chat Bot
//!
//! Main application entry point: the host adapter. Chat events arrive as
//! newline-delimited JSON on stdin; replies leave as JSON lines on stdout.
//! Logs go to stderr (and optionally a rolling file) so stdout stays a clean
//! reply channel.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

use HoopBuddy::{
    config::Settings,
    handlers,
    models::ChatEvent,
    services::BackendGateway,
    utils::logging,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let settings = Settings::discover()?;
    settings.validate()?;

    // Initialize logging
    let _guard = logging::init_logging(&settings.logging)?;

    info!(base_url = %settings.server.base_url, "Starting HoopBuddy chat bot...");

    let gateway = Arc::new(BackendGateway::new(&settings.server)?);

    info!("HoopBuddy is ready, waiting for chat events on stdin");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let event: ChatEvent = match serde_json::from_str(line) {
            Ok(event) => event,
            Err(e) => {
                warn!(error = %e, "Ignoring malformed chat event");
                continue;
            }
        };
        debug!(
            room = %event.room,
            sender = %event.sender,
            package_name = event.package_name.as_deref(),
            "chat event received"
        );

        if let Some(reply) = handlers::handle_event(&event, &gateway).await {
            let envelope = serde_json::json!({"room": event.room, "reply": reply});
            println!("{envelope}");
        }
    }

    info!("HoopBuddy has been shut down.");

    Ok(())
}
