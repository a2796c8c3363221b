//! Centralized constants for the kiosk workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Application identity
// =============================================================================

/// Name used for the config directory, log file prefix and metrics.
pub const APP_NAME: &str = "kiosk-tui";

/// File name of the persisted state inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

// =============================================================================
// Event loop
// =============================================================================

/// Default UI tick interval in milliseconds (toast expiry, redraws).
pub const DEFAULT_UI_TICK_MS: u64 = 250;

/// Smallest accepted UI tick interval in milliseconds (~60 fps).
pub const MIN_UI_TICK_MS: u64 = 16;

/// Largest accepted UI tick interval in milliseconds.
pub const MAX_UI_TICK_MS: u64 = 5000;

/// Capacity of the bounded action channel between the input task and the UI loop.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

// =============================================================================
// Logging
// =============================================================================

/// Default directory for log files, relative to the working directory.
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Log file name prefix for the daily rolling appender.
pub const LOG_FILE_NAME: &str = "kiosk-tui.log";

// =============================================================================
// Environment variables
// =============================================================================

pub const ENV_THEME: &str = "KIOSK_THEME";
pub const ENV_NO_MOUSE: &str = "KIOSK_NO_MOUSE";
pub const ENV_TICK_MS: &str = "KIOSK_TICK_MS";
pub const ENV_MASK_PASSWORDS: &str = "KIOSK_MASK_PASSWORDS";
pub const ENV_CONFIG_PATH: &str = "KIOSK_CONFIG_PATH";
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";
