//! Resolved kiosk settings.

use std::time::Duration;

use crate::constants::DEFAULT_UI_TICK_MS;
use crate::types::ColorTheme;

/// Fully resolved configuration handed to the kiosk at startup.
///
/// Produced by [`crate::ConfigLoader::build`]; every field already has the
/// precedence rules applied (flags over environment over persisted state over
/// defaults).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KioskConfig {
    /// Active color theme.
    pub theme: ColorTheme,
    /// Whether mouse (touch) capture is enabled.
    pub mouse: bool,
    /// UI tick interval in milliseconds.
    pub tick_ms: u64,
    /// Whether password fields render as bullets.
    pub mask_passwords: bool,
    /// Whether the footer shows the key hint line.
    pub show_hints: bool,
}

impl KioskConfig {
    /// UI tick interval as a `Duration`.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

impl Default for KioskConfig {
    fn default() -> Self {
        Self {
            theme: ColorTheme::Default,
            mouse: true,
            tick_ms: DEFAULT_UI_TICK_MS,
            mask_passwords: true,
            show_hints: true,
        }
    }
}
