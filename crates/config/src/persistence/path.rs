//! Path helpers for configuration file locations.
//!
//! Responsibilities:
//! - Determine the configuration file path.
//! - Honor the `KIOSK_CONFIG_PATH` override.
//!
//! Does NOT handle:
//! - File I/O operations.

use std::path::PathBuf;

use anyhow::Context;

use crate::constants::{APP_NAME, CONFIG_FILE_NAME, ENV_CONFIG_PATH};
use crate::loader::env_var_or_none;

/// Returns the path to the configuration file.
///
/// `KIOSK_CONFIG_PATH` wins when set. Otherwise:
/// - Linux/macOS: `~/.config/kiosk-tui/config.json`
/// - Windows: `%AppData%\kiosk-tui\config.json`
pub fn default_config_path() -> Result<PathBuf, anyhow::Error> {
    if let Some(path) = env_var_or_none(ENV_CONFIG_PATH) {
        return Ok(PathBuf::from(path));
    }

    let proj_dirs = directories::ProjectDirs::from("", "", APP_NAME)
        .context("Failed to determine project directories")?;

    Ok(proj_dirs.config_dir().join(CONFIG_FILE_NAME))
}
