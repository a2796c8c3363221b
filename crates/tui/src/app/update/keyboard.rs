//! Keyboard lifecycle and key relay.
//!
//! Invariants:
//! - Every transition out of Visible clears `bound_field` and is counted once
//!   with its close reason.
//! - The bound field is borrowed only for the duration of one press.

use kiosk_keyboard::{CloseReason, GlobalKey, Key, KeyOutcome, layout};

use crate::app::form::BoundField;
use crate::app::{App, Screen};
use crate::ux_telemetry::KeySource;

impl App {
    /// Mount the keyboard on field `index` of the current screen.
    ///
    /// A touch on the field that is already bound keeps the session (and its
    /// modifiers); any other field remounts.
    pub(crate) fn open_keyboard_on(&mut self, index: usize) {
        if self.keyboard.is_visible() && self.bound_field == Some(index) {
            return;
        }
        if !self.form_mut().focus(index) {
            tracing::debug!(index, "ignoring keyboard open on missing field");
            return;
        }
        self.mount(index);
    }

    /// Mount (or remount) the keyboard on the focused field.
    pub(crate) fn remount_keyboard(&mut self) {
        let index = self.form().focused();
        self.mount(index);
    }

    /// Mount on the focused field unless already visible.
    pub(crate) fn ensure_keyboard(&mut self) {
        if !self.keyboard.is_visible() {
            self.remount_keyboard();
        }
    }

    fn mount(&mut self, index: usize) {
        if let Some(reason) = self.keyboard.open() {
            self.ux_telemetry.record_keyboard_closed(reason);
        }
        self.bound_field = Some(index);
        self.ux_telemetry.record_keyboard_opened(self.screen.as_str());
        tracing::debug!(screen = self.screen.as_str(), field = index, "keyboard opened");
    }

    /// Hide a visible keyboard without notifying the field.
    pub(crate) fn hide_keyboard(&mut self) {
        if self.keyboard.hide() {
            self.ux_telemetry.record_keyboard_closed(CloseReason::Host);
        }
        self.bound_field = None;
    }

    /// Relay a key to the bound field, mounting the keyboard first if needed.
    ///
    /// Keys the keyboard would ignore never mount it.
    pub(crate) fn press_key(&mut self, key: Key, source: KeySource) {
        if !self.keyboard.is_visible() && !mounts_keyboard(key) {
            return;
        }
        self.ensure_keyboard();
        let Some(index) = self.bound_field else {
            return;
        };

        let form = match self.screen {
            Screen::Login => &mut self.login,
            Screen::Announcement => &mut self.announcement,
        };
        let Some(field) = form.field_mut(index) else {
            tracing::warn!(index, "bound field vanished, hiding keyboard");
            self.hide_keyboard();
            return;
        };

        let mut bound = BoundField::new(field);
        let outcome = self.keyboard.press(key, &mut bound);
        let close_requested = bound.close_requested();

        if outcome != KeyOutcome::Ignored {
            self.ux_telemetry.record_keypress(key, source);
        }
        if close_requested {
            self.ux_telemetry.record_keyboard_closed(CloseReason::CloseKey);
            self.bound_field = None;
        }
    }

    /// Deliver Escape through the global listener registry.
    pub(crate) fn escape(&mut self) {
        let Some(index) = self.bound_field else {
            return;
        };
        let form = match self.screen {
            Screen::Login => &mut self.login,
            Screen::Announcement => &mut self.announcement,
        };
        let Some(field) = form.field_mut(index) else {
            return;
        };

        let mut bound = BoundField::new(field);
        if self.keyboard.handle_global_key(GlobalKey::Escape, &mut bound) {
            self.ux_telemetry.record_keyboard_closed(CloseReason::Escape);
            self.bound_field = None;
        }
    }
}

/// Whether `key` does something on a freshly mounted keyboard.
fn mounts_keyboard(key: Key) -> bool {
    match key {
        Key::Char(c) => layout::position_of(c).is_some(),
        Key::Close => false,
        Key::Shift | Key::Caps | Key::Space | Key::Backspace | Key::Enter => true,
    }
}
