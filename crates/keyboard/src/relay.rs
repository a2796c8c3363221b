//! Input relay: key intent to whole-string update.
//!
//! Responsibilities:
//! - Compute the new value of the bound field for a key press.
//! - Forward the result to the caller through a [`KeyboardSink`].
//!
//! Does NOT handle:
//! - Storing text. The caller owns the value; the relay reads it from the
//!   sink on every press so it can never act on a stale copy.
//! - Showing or hiding the keyboard (see `lifecycle`).
//!
//! Invariants:
//! - Exactly one `on_change` per character-producing press (glyphs, space,
//!   enter, backspace).
//! - Zero `on_change` calls for modifier toggles, close, and ignored keys.
//! - `on_close` is only called for [`Key::Close`].

use crate::key::Key;
use crate::layout;
use crate::modifier::ModifierState;

/// Caller side of the keyboard: the live value of the active field and the
/// two callbacks.
pub trait KeyboardSink {
    /// Current value of the field the keyboard is bound to.
    fn current_value(&self) -> &str;

    /// Receives the full updated value after a character-producing press.
    fn on_change(&mut self, value: String);

    /// Called when the user dismisses the keyboard.
    fn on_close(&mut self);
}

/// Result of applying one key to a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The field must be updated to this value.
    Changed(String),
    /// Only the modifier state changed.
    ModifiersChanged,
    /// The keyboard must close.
    Close,
    /// The key is not on the keyboard; nothing happened.
    Ignored,
}

/// Apply a key to `current`, updating `modifiers` as a side effect.
///
/// Pure with respect to the text: the input slice is never retained.
pub fn apply_key(current: &str, key: Key, modifiers: &mut ModifierState) -> KeyOutcome {
    match key {
        Key::Shift => {
            modifiers.press_shift();
            KeyOutcome::ModifiersChanged
        }
        Key::Caps => {
            modifiers.press_caps();
            KeyOutcome::ModifiersChanged
        }
        Key::Close => KeyOutcome::Close,
        Key::Backspace => {
            let mut value = current.to_owned();
            value.pop();
            KeyOutcome::Changed(value)
        }
        Key::Space => commit(current, ' ', modifiers),
        Key::Enter => commit(current, '\n', modifiers),
        Key::Char(ch) => match layout::resolve(ch, modifiers.is_shifted()) {
            Some(resolved) => commit(current, resolved, modifiers),
            None => KeyOutcome::Ignored,
        },
    }
}

fn commit(current: &str, ch: char, modifiers: &mut ModifierState) -> KeyOutcome {
    let mut value = String::with_capacity(current.len() + ch.len_utf8());
    value.push_str(current);
    value.push(ch);
    modifiers.release_after_commit();
    KeyOutcome::Changed(value)
}

/// Apply `key` against the sink's current value and invoke the matching
/// callback.
pub fn relay<S: KeyboardSink + ?Sized>(
    key: Key,
    modifiers: &mut ModifierState,
    sink: &mut S,
) -> KeyOutcome {
    let outcome = apply_key(sink.current_value(), key, modifiers);
    match &outcome {
        KeyOutcome::Changed(value) => sink.on_change(value.clone()),
        KeyOutcome::Close => sink.on_close(),
        KeyOutcome::ModifiersChanged | KeyOutcome::Ignored => {}
    }
    tracing::trace!(kind = key.kind(), ?modifiers, "relayed key");
    outcome
}

/// In-memory [`KeyboardSink`] that records every callback.
///
/// Useful for callers that keep a plain `String` and for tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringSink {
    pub value: String,
    pub changes: usize,
    pub closes: usize,
}

impl StringSink {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }
}

impl KeyboardSink for StringSink {
    fn current_value(&self) -> &str {
        &self.value
    }

    fn on_change(&mut self, value: String) {
        self.value = value;
        self.changes += 1;
    }

    fn on_close(&mut self) {
        self.closes += 1;
    }
}
