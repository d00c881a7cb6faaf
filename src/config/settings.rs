//! Application settings management
//!
//! This module defines the configuration structure. The on-disk document is
//! JSON with `serverUrl` and `timeout` at the top level, matching the wire
//! contract of the deployed configuration files, plus an optional `logging`
//! section.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    #[serde(flatten)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(rename = "serverUrl")]
    pub base_url: String,
    /// Request timeout in milliseconds, applied to both connect and read
    #[serde(rename = "timeout")]
    pub timeout_ms: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for the daily-rolling log file; stderr only when absent
    pub file_path: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_path: None,
        }
    }
}

impl Settings {
    /// Load settings from the first parseable candidate configuration file
    pub fn discover() -> crate::utils::errors::Result<Self> {
        super::discovery::discover_from(&super::discovery::candidate_paths())
    }

    /// Validate configuration settings
    pub fn validate(&self) -> crate::utils::errors::Result<()> {
        super::validation::validate_settings(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_deserialize_wire_shape() {
        let json = r#"{"serverUrl": "http://localhost:5000", "timeout": 5000}"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.server.base_url, "http://localhost:5000");
        assert_eq!(settings.server.timeout_ms, 5000);
        assert_eq!(settings.logging.level, "info");
        assert!(settings.logging.file_path.is_none());
    }

    #[test]
    fn settings_deserialize_with_logging_section() {
        let json = r#"{
            "serverUrl": "http://localhost:5000",
            "timeout": 3000,
            "logging": {"level": "debug", "file_path": "/var/log/hoopbuddy"}
        }"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.logging.level, "debug");
        assert_eq!(
            settings.logging.file_path.as_deref(),
            Some("/var/log/hoopbuddy")
        );
    }
}
