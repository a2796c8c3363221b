//! Action handling for the kiosk app.
//!
//! Responsibilities:
//! - Process Actions and mutate App state accordingly
//!
//! Non-responsibilities:
//! - Does NOT create Actions (handled by input handlers)
//! - Does NOT perform I/O
//!
//! This module delegates to domain-specific submodules:
//! - `keyboard`: Mounting, key presses, Escape, key focus
//! - `forms`: Field focus, submission, screen switching

use crate::action::Action;
use crate::app::App;
use crate::ui::{Toast, push_toast};
use crate::ux_telemetry::KeySource;

mod forms;
mod keyboard;

impl App {
    /// Pure state mutation based on Action.
    pub fn update(&mut self, action: Action) {
        match action {
            // Keyboard
            Action::OpenKeyboard => self.remount_keyboard(),
            Action::OpenKeyboardOn(index) => self.open_keyboard_on(index),
            Action::PressKey(key) => self.press_key(key, KeySource::Physical),
            Action::TouchKey(key) => {
                self.ensure_keyboard();
                self.keyboard.focus_key(key);
                self.press_key(key, KeySource::Touch);
            }
            Action::ActivateFocusedKey => {
                if let Some(key) = self.keyboard.focused_key() {
                    self.press_key(key, KeySource::Focus);
                }
            }
            Action::Escape => self.escape(),
            Action::MoveKeyFocus(direction) => self.keyboard.move_focus(direction),

            // Forms
            Action::MoveField(direction) => self.move_field(direction),
            Action::SubmitLogin => self.submit_login(),
            Action::PostAnnouncement => self.post_announcement(),
            Action::SignOut => self.sign_out(),

            // Preferences
            Action::CycleTheme => {
                let next = self.color_theme.cycle_next();
                self.set_theme(next);
                push_toast(
                    &mut self.toasts,
                    Toast::info(format!("Theme: {}", next.display_name())),
                );
            }
            Action::ToggleHints => self.show_hints = !self.show_hints,

            // System
            Action::Tick => self.toasts.retain(|toast| !toast.is_expired()),
            Action::Resize(width, height) => {
                self.last_area = ratatui::layout::Rect::new(0, 0, width, height);
            }
            Action::Notify(level, message) => {
                push_toast(&mut self.toasts, Toast::new(message, level));
            }

            // Handled by the main loop before reaching update
            Action::Quit | Action::Input(_) | Action::Mouse(_) => {}
        }
    }
}
