//! Action enum definitions.
//!
//! # Action Categories
//!
//! - **System**: lifecycle (Quit, Tick, Resize)
//! - **Raw input**: terminal key and mouse events before mapping
//! - **Keyboard**: intents for the on-screen keyboard
//! - **Forms**: field focus and form submission
//! - **Preferences**: theme and hint toggles
//! - **Notifications**: toast messages

use crossterm::event::{KeyEvent, MouseEvent};
use kiosk_keyboard::{FocusMove, Key};

use crate::ui::ToastLevel;

/// Direction for moving field focus while the keyboard is hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldMove {
    Next,
    Prev,
}

/// Unified action type for the kiosk event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // System
    Quit,
    Tick,
    Resize(u16, u16),

    // Raw input
    Input(KeyEvent),
    Mouse(MouseEvent),

    // Keyboard
    /// Open (or reopen) the keyboard on the focused field.
    OpenKeyboard,
    /// Open the keyboard on a specific field of the current screen.
    OpenKeyboardOn(usize),
    /// Deliver a key intent; opens the keyboard first when hidden.
    PressKey(Key),
    /// Press a rendered key under a touch; key focus follows the touch.
    TouchKey(Key),
    /// Escape delivered through the global listener registry.
    Escape,
    MoveKeyFocus(FocusMove),
    ActivateFocusedKey,

    // Forms
    MoveField(FieldMove),
    SubmitLogin,
    PostAnnouncement,
    SignOut,

    // Preferences
    CycleTheme,
    ToggleHints,

    // Notifications
    /// Show a toast raised outside the app, e.g. a startup failure.
    Notify(ToastLevel, String),
}
