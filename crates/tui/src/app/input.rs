//! Key event handling for the kiosk app.
//!
//! Responsibilities:
//! - Resolve shortcuts through the keybinding catalog
//! - Turn remaining keys into keyboard intents
//!
//! Non-responsibilities:
//! - Does NOT mutate App state (returns Actions)

use crossterm::event::KeyEvent;

use crate::action::Action;
use crate::app::App;
use crate::input::{physical_key, resolve_action};

impl App {
    /// Map a key event to an action.
    ///
    /// Shortcuts win over text, so Enter on the login screen submits before
    /// it could reach the keyboard. Text keys become `PressKey`, which opens
    /// the keyboard on the focused field when it is hidden.
    pub fn handle_input(&self, key: KeyEvent) -> Option<Action> {
        resolve_action(self.input_context(), key).or_else(|| physical_key(key).map(Action::PressKey))
    }
}
