//! Error handling for HoopBuddy
//!
//! This module defines the main error type used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the HoopBuddy application
#[derive(Error, Debug)]
pub enum HoopBuddyError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias for HoopBuddy operations
pub type Result<T> = std::result::Result<T, HoopBuddyError>;
