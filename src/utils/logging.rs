//! Logging configuration and setup
//!
//! Initializes the tracing stack for the HoopBuddy application. Chat replies
//! travel over stdout, so log output goes to stderr and, when a log directory
//! is configured, to a daily-rolling file.

use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::utils::errors::{HoopBuddyError, Result};

/// Initialize logging based on configuration
///
/// Returns the worker guard for the file appender, which must stay alive for
/// the lifetime of the process when file logging is enabled.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| HoopBuddyError::Config(format!("invalid log level '{}': {}", config.level, e)))?;

    let mut guard = None;
    let file_layer = config.file_path.as_ref().map(|dir| {
        let file_appender = tracing_appender::rolling::daily(dir, "hoopbuddy.log");
        let (non_blocking, worker_guard) = tracing_appender::non_blocking(file_appender);
        guard = Some(worker_guard);
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(non_blocking)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}
