//! Configuration file discovery
//!
//! Probes an ordered list of candidate locations and returns the first
//! successfully read and parsed document. When every candidate fails, the
//! error aggregates one line per attempted path so operators can see exactly
//! what was tried.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::Settings;
use crate::utils::errors::{HoopBuddyError, Result};

/// Environment variable naming an explicit configuration file path.
/// When set, it is probed before the fixed candidates.
pub const CONFIG_PATH_ENV: &str = "HOOPBUDDY_CONFIG";

/// Fixed candidate locations, probed in order
pub const CONFIG_CANDIDATES: &[&str] = &[
    "config.json",
    "config/config.json",
    "/etc/hoopbuddy/config.json",
];

/// Build the ordered candidate path list for this process
pub fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        paths.push(PathBuf::from(path));
    }
    paths.extend(CONFIG_CANDIDATES.iter().map(PathBuf::from));
    paths
}

/// Return the first parseable configuration document from `paths`
pub fn discover_from(paths: &[PathBuf]) -> Result<Settings> {
    let mut attempts = Vec::new();

    for path in paths {
        match try_load(path) {
            Ok(settings) => {
                debug!(path = %path.display(), "configuration loaded");
                return Ok(settings);
            }
            Err(reason) => {
                debug!(path = %path.display(), reason = %reason, "configuration candidate skipped");
                attempts.push(format!("{}: {}", path.display(), reason));
            }
        }
    }

    Err(HoopBuddyError::Config(format!(
        "no configuration file could be loaded; attempted:\n{}",
        attempts.join("\n")
    )))
}

fn try_load(path: &Path) -> std::result::Result<Settings, String> {
    let text = fs::read_to_string(path).map_err(|e| e.to_string())?;
    serde_json::from_str(&text).map_err(|e| e.to_string())
}
