//! Where textmark keeps its highlight config and log files
//!
//! Both live in one per-user directory named after the binary. The host never
//! writes anywhere else, so deleting that directory resets textmark.

use std::{env, fs, path::PathBuf};

use anyhow::{Context, Result};

const APP_DIR: &str = "textmark";

/// Prefix of the daily-rotated log files written by [`crate::tracing::init`]
pub const LOG_FILE_PREFIX: &str = "textmark.log";

/// Per-user directory holding `config.yaml` and `logs/`
///
/// `%APPDATA%\textmark` on Windows. Elsewhere `$XDG_CONFIG_HOME/textmark`,
/// falling back to `~/.config/textmark`. `None` when no home is known.
pub fn config_dir() -> Option<PathBuf> {
    platform_config_root().map(|root| root.join(APP_DIR))
}

#[cfg(target_os = "windows")]
fn platform_config_root() -> Option<PathBuf> {
    env::var_os("APPDATA").map(PathBuf::from)
}

#[cfg(not(target_os = "windows"))]
fn platform_config_root() -> Option<PathBuf> {
    env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
}

/// Highlight config read by [`crate::config::HighlightConfig::load`]
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Create the log directory if needed and return it
pub fn ensure_logs_dir() -> Result<PathBuf> {
    let logs = logs_dir().context("No config directory available for logs")?;
    fs::create_dir_all(&logs)
        .with_context(|| format!("Failed to create log directory {}", logs.display()))?;
    Ok(logs)
}
