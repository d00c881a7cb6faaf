//! HoopBuddy Chat Bot
//!
//! A chat-command front-end for basketball club management. HoopBuddy
//! receives chat-message events from a host messaging runtime, recognizes a
//! small `!`-prefixed command language, translates recognized commands into
//! HTTP calls against the club management backend and reformats the JSON
//! responses into chat text.

#![allow(non_snake_case)]

pub mod config;
pub mod formatters;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{HoopBuddyError, Result};

// Re-export main components for easy access
pub use handlers::handle_event;
pub use models::ChatEvent;
pub use services::BackendGateway;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
