//! Headless on-screen keyboard for touch kiosks.
//!
//! This crate holds the keyboard's state machine without any rendering or
//! terminal dependency. The caller owns the text being edited and exposes it
//! through [`KeyboardSink`]; the keyboard turns key intents into whole-string
//! updates and close requests.
//!
//! # Example
//!
//! ```rust
//! use kiosk_keyboard::{GlobalKeyListeners, Key, StringSink, VirtualKeyboard};
//!
//! let mut keyboard = VirtualKeyboard::new(GlobalKeyListeners::new());
//! let mut field = StringSink::new("");
//!
//! keyboard.open();
//! keyboard.press(Key::Shift, &mut field);
//! keyboard.press(Key::Char('h'), &mut field);
//! keyboard.press(Key::Char('i'), &mut field);
//! assert_eq!(field.value, "Hi");
//! ```

pub mod focus;
pub mod key;
pub mod layout;
pub mod lifecycle;
pub mod modifier;
pub mod relay;

pub use focus::KeyFocus;
pub use key::{Key, SPECIAL_KEYS};
pub use layout::{KeyPosition, LayoutGrid};
pub use lifecycle::{
    CloseReason, FocusMove, GlobalKey, GlobalKeyListeners, KeyboardSession, ListenerGuard,
    ListenerId, VirtualKeyboard,
};
pub use modifier::ModifierState;
pub use relay::{KeyOutcome, KeyboardSink, StringSink, apply_key};
