//! Redaction wrapper for Action logging.
//!
//! `RedactedAction` implements `Debug` so typed characters never reach log
//! files: key events and key presses show only the kind of key, and messages
//! show only their length.
//!
//! # Example
//!
//! ```ignore
//! let action = Action::PressKey(Key::Char('p'));
//! tracing::info!("Handling action: {:?}", RedactedAction(&action));
//! // Logs: Handling action: PressKey(char)
//! ```

use crossterm::event::{KeyCode, KeyEvent};

use crate::action::variants::Action;

/// Redacted wrapper for Action that prevents typed text from being logged.
pub struct RedactedAction<'a>(pub &'a Action);

fn redact_key_event(key: &KeyEvent) -> String {
    let code = match key.code {
        KeyCode::Char(_) => "Char(<redacted>)".to_string(),
        other => format!("{other:?}"),
    };
    format!("{code}, {:?}", key.modifiers)
}

impl std::fmt::Debug for RedactedAction<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Action::Input(key) => write!(f, "Input({})", redact_key_event(key)),
            Action::PressKey(key) => write!(f, "PressKey({})", key.kind()),
            Action::TouchKey(key) => write!(f, "TouchKey({})", key.kind()),
            Action::Notify(level, message) => {
                write!(f, "Notify({:?}, <{} chars>)", level, message.chars().count())
            }
            Action::Mouse(mouse) => write!(
                f,
                "Mouse({:?} at {},{})",
                mouse.kind, mouse.column, mouse.row
            ),
            other => write!(f, "{other:?}"),
        }
    }
}
