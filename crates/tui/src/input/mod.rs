//! Centralized input definitions for the kiosk.
//!
//! Responsibilities:
//! - Define the keybinding catalog used by input resolution and footer hints.
//! - Translate physical key events into keyboard intents.
//!
//! Non-responsibilities:
//! - Mutating application state directly (handled by App via Actions).
//!
//! Invariants:
//! - Keybinding metadata is the single source of truth for footer hints.
//! - Input resolution returns Actions only and never mutates App state.

pub mod keymap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use kiosk_keyboard::Key;

pub use keymap::{InputContext, footer_hints, resolve_action};

/// Keyboard intent for a physical key event, if it has one.
///
/// Keys chorded with Ctrl or Alt are shortcuts, never text.
pub fn physical_key(key: KeyEvent) -> Option<Key> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    match key.code {
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::CapsLock => Some(Key::Caps),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn maps_text_keys() {
        assert_eq!(
            physical_key(key(KeyCode::Char('k'), KeyModifiers::NONE)),
            Some(Key::Char('k'))
        );
        assert_eq!(
            physical_key(key(KeyCode::Char('K'), KeyModifiers::SHIFT)),
            Some(Key::Char('K'))
        );
        assert_eq!(
            physical_key(key(KeyCode::Char(' '), KeyModifiers::NONE)),
            Some(Key::Space)
        );
    }

    #[test]
    fn maps_editing_keys() {
        assert_eq!(
            physical_key(key(KeyCode::Backspace, KeyModifiers::NONE)),
            Some(Key::Backspace)
        );
        assert_eq!(
            physical_key(key(KeyCode::Enter, KeyModifiers::NONE)),
            Some(Key::Enter)
        );
        assert_eq!(
            physical_key(key(KeyCode::CapsLock, KeyModifiers::NONE)),
            Some(Key::Caps)
        );
    }

    #[test]
    fn chorded_keys_are_not_text() {
        assert_eq!(
            physical_key(key(KeyCode::Char('s'), KeyModifiers::CONTROL)),
            None
        );
        assert_eq!(
            physical_key(key(KeyCode::Char('x'), KeyModifiers::ALT)),
            None
        );
        assert_eq!(physical_key(key(KeyCode::F(5), KeyModifiers::NONE)), None);
    }
}
