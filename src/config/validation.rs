//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured before the bot
//! starts serving commands.

use url::Url;

use super::Settings;
use crate::utils::errors::{HoopBuddyError, Result};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_server_config(&settings.server)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate backend server configuration
fn validate_server_config(config: &super::ServerConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(HoopBuddyError::Config(
            "Server base URL is required".to_string(),
        ));
    }

    Url::parse(&config.base_url)?;

    if config.timeout_ms == 0 {
        return Err(HoopBuddyError::Config(
            "Request timeout must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(HoopBuddyError::Config("Log level is required".to_string()));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(HoopBuddyError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, valid_levels
        )));
    }

    Ok(())
}
