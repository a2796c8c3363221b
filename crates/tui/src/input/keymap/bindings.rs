//! Kiosk keybindings.
//!
//! Invariants:
//! - Ordering matches the footer hint order.
//! - Scoped Enter bindings come before any keyboard fall-through.

use crossterm::event::{KeyCode, KeyModifiers};
use kiosk_keyboard::FocusMove;

use crate::action::{Action, FieldMove};
use crate::app::Screen;

use super::{BindingScope, Keybinding, Matcher};

fn key(code: KeyCode, modifiers: KeyModifiers) -> Matcher {
    Matcher::Key { code, modifiers }
}

fn plain(code: KeyCode) -> Matcher {
    key(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> Matcher {
    key(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn binding(
    keys: &'static str,
    description: &'static str,
    scope: BindingScope,
    matcher: Matcher,
    action: Action,
    hint: bool,
) -> Keybinding {
    Keybinding {
        keys,
        description,
        scope,
        matcher,
        action,
        hint,
    }
}

pub(super) fn all() -> Vec<Keybinding> {
    use BindingScope as S;

    let announcement_hidden = BindingScope {
        screen: Some(Screen::Announcement),
        keyboard_visible: Some(false),
    };

    vec![
        // Forms
        binding(
            "Enter",
            "Sign in",
            S::screen(Screen::Login),
            plain(KeyCode::Enter),
            Action::SubmitLogin,
            true,
        ),
        binding(
            "Ctrl+S",
            "Post",
            S::screen(Screen::Announcement),
            ctrl('s'),
            Action::PostAnnouncement,
            true,
        ),
        binding(
            "Enter",
            "Next field",
            announcement_hidden,
            plain(KeyCode::Enter),
            Action::MoveField(FieldMove::Next),
            false,
        ),
        // Keyboard visible
        binding(
            "Esc",
            "Close keyboard",
            S::KEYBOARD_VISIBLE,
            plain(KeyCode::Esc),
            Action::Escape,
            true,
        ),
        binding(
            "Arrows/Tab",
            "Move key",
            S::KEYBOARD_VISIBLE,
            Matcher::Code(KeyCode::Tab),
            Action::MoveKeyFocus(FocusMove::Next),
            true,
        ),
        binding(
            "Shift+Tab",
            "Previous key",
            S::KEYBOARD_VISIBLE,
            Matcher::Code(KeyCode::BackTab),
            Action::MoveKeyFocus(FocusMove::Prev),
            false,
        ),
        binding(
            "Right",
            "Next key",
            S::KEYBOARD_VISIBLE,
            plain(KeyCode::Right),
            Action::MoveKeyFocus(FocusMove::Next),
            false,
        ),
        binding(
            "Left",
            "Previous key",
            S::KEYBOARD_VISIBLE,
            plain(KeyCode::Left),
            Action::MoveKeyFocus(FocusMove::Prev),
            false,
        ),
        binding(
            "Up",
            "Key above",
            S::KEYBOARD_VISIBLE,
            plain(KeyCode::Up),
            Action::MoveKeyFocus(FocusMove::Up),
            false,
        ),
        binding(
            "Down",
            "Key below",
            S::KEYBOARD_VISIBLE,
            plain(KeyCode::Down),
            Action::MoveKeyFocus(FocusMove::Down),
            false,
        ),
        binding(
            "Ctrl+Space",
            "Press key",
            S::KEYBOARD_VISIBLE,
            key(KeyCode::Char(' '), KeyModifiers::CONTROL),
            Action::ActivateFocusedKey,
            true,
        ),
        // Keyboard hidden
        binding(
            "Tab",
            "Next field",
            S::KEYBOARD_HIDDEN,
            Matcher::Code(KeyCode::Tab),
            Action::MoveField(FieldMove::Next),
            true,
        ),
        binding(
            "Shift+Tab",
            "Previous field",
            S::KEYBOARD_HIDDEN,
            Matcher::Code(KeyCode::BackTab),
            Action::MoveField(FieldMove::Prev),
            false,
        ),
        binding(
            "Down",
            "Next field",
            S::KEYBOARD_HIDDEN,
            plain(KeyCode::Down),
            Action::MoveField(FieldMove::Next),
            false,
        ),
        binding(
            "Up",
            "Previous field",
            S::KEYBOARD_HIDDEN,
            plain(KeyCode::Up),
            Action::MoveField(FieldMove::Prev),
            false,
        ),
        binding(
            "F2",
            "Keyboard",
            S::KEYBOARD_HIDDEN,
            plain(KeyCode::F(2)),
            Action::OpenKeyboard,
            true,
        ),
        binding(
            "F2",
            "Reopen keyboard",
            S::KEYBOARD_VISIBLE,
            plain(KeyCode::F(2)),
            Action::OpenKeyboard,
            false,
        ),
        // Global
        binding(
            "Ctrl+L",
            "Sign out",
            S::screen(Screen::Announcement),
            ctrl('l'),
            Action::SignOut,
            true,
        ),
        binding(
            "Ctrl+T",
            "Theme",
            S::GLOBAL,
            ctrl('t'),
            Action::CycleTheme,
            true,
        ),
        binding(
            "F1",
            "Hints",
            S::GLOBAL,
            plain(KeyCode::F(1)),
            Action::ToggleHints,
            false,
        ),
        binding("Ctrl+Q", "Quit", S::GLOBAL, ctrl('q'), Action::Quit, true),
        binding("Ctrl+C", "Quit", S::GLOBAL, ctrl('c'), Action::Quit, false),
    ]
}
