//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `KIOSK_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//! - Provide helper functions for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Reading persisted preferences (see `persistence`).
//! - Building the final `KioskConfig` (see builder.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Environment variables take precedence over persisted preferences.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid values return ConfigError::InvalidValue.

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{ENV_MASK_PASSWORDS, ENV_NO_MOUSE, ENV_THEME, ENV_TICK_MS};
use crate::types::ColorTheme;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Parse a boolean flag value.
///
/// Accepts `true/false`, `1/0`, `yes/no` and `on/off`, case-insensitively.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn bool_var(var: &str) -> Result<Option<bool>, ConfigError> {
    env_var_or_none(var)
        .map(|raw| {
            parse_bool(&raw).ok_or_else(|| ConfigError::InvalidValue {
                var: var.to_string(),
                message: "must be true or false".to_string(),
            })
        })
        .transpose()
}

/// Apply environment variable configuration to the loader.
///
/// Environment variables take precedence over persisted preferences.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(theme) = env_var_or_none(ENV_THEME) {
        let parsed: ColorTheme = theme.parse().map_err(|e| ConfigError::InvalidValue {
            var: ENV_THEME.to_string(),
            message: format!("{e}"),
        })?;
        loader.set_theme(Some(parsed));
    }
    if let Some(no_mouse) = bool_var(ENV_NO_MOUSE)? {
        loader.set_mouse(Some(!no_mouse));
    }
    if let Some(tick) = env_var_or_none(ENV_TICK_MS) {
        let ms: u64 = tick.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_TICK_MS.to_string(),
            message: "must be a number of milliseconds".to_string(),
        })?;
        loader.set_tick_ms(Some(ms));
    }
    if let Some(mask) = bool_var(ENV_MASK_PASSWORDS)? {
        loader.set_mask_passwords(Some(mask));
    }
    Ok(())
}
