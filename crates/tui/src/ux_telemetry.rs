//! UX telemetry for the on-screen keyboard.
//!
//! Responsibilities:
//! - Emit low-cardinality counters for keyboard open/close and key presses
//! - Emit form submission outcomes
//!
//! Non-goals:
//! - PII in labels: typed characters and field values are never recorded,
//!   only key kinds and fixed enum labels
//! - Alerting (handled by metrics backend)

use kiosk_keyboard::{CloseReason, Key};

pub const METRIC_UX_KEYBOARD_OPENED: &str = "kiosk_ux_keyboard_opened_total";
pub const METRIC_UX_KEYBOARD_CLOSED: &str = "kiosk_ux_keyboard_closed_total";
pub const METRIC_UX_KEYPRESS: &str = "kiosk_ux_keypress_total";
pub const METRIC_UX_FORM_SUBMIT: &str = "kiosk_ux_form_submit_total";
pub const METRIC_TUI_FRAME_RENDER_DURATION: &str = "kiosk_tui_frame_render_duration_seconds";

/// How a key press reached the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    /// Touch (mouse click) on a rendered key.
    Touch,
    /// Physical keyboard, relayed as the matching intent.
    Physical,
    /// Focus navigation plus activation.
    Focus,
}

impl KeySource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Touch => "touch",
            Self::Physical => "physical",
            Self::Focus => "focus",
        }
    }
}

/// UX telemetry collector.
#[derive(Debug, Default, Clone, Copy)]
pub struct UxTelemetryCollector {
    /// Whether metrics are enabled (set from main.rs based on --metrics-bind).
    enabled: bool,
}

impl UxTelemetryCollector {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record the keyboard being mounted on a screen.
    pub fn record_keyboard_opened(&self, screen: &'static str) {
        if !self.enabled {
            return;
        }
        metrics::counter!(METRIC_UX_KEYBOARD_OPENED, "screen" => screen).increment(1);
    }

    /// Record the keyboard leaving the Visible state.
    pub fn record_keyboard_closed(&self, reason: CloseReason) {
        if !self.enabled {
            return;
        }
        metrics::counter!(METRIC_UX_KEYBOARD_CLOSED, "reason" => reason.as_str()).increment(1);
    }

    /// Record one key press by kind only.
    pub fn record_keypress(&self, key: Key, source: KeySource) {
        if !self.enabled {
            return;
        }
        metrics::counter!(
            METRIC_UX_KEYPRESS,
            "kind" => key.kind(),
            "source" => source.as_str(),
        )
        .increment(1);
    }

    /// Record a form submission attempt.
    pub fn record_form_submit(&self, screen: &'static str, accepted: bool) {
        if !self.enabled {
            return;
        }
        metrics::counter!(
            METRIC_UX_FORM_SUBMIT,
            "screen" => screen,
            "accepted" => if accepted { "true" } else { "false" },
        )
        .increment(1);
    }
}
