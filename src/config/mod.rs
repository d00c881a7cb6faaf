//! Configuration management module
//!
//! This module handles discovery, loading and validation of application
//! configuration from JSON files.

pub mod discovery;
pub mod settings;
pub mod validation;

pub use settings::{LoggingConfig, ServerConfig, Settings};
