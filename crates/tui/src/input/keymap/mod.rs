//! Keybinding catalog and input resolver.
//!
//! Responsibilities:
//! - Define a single source of truth for shortcuts and their descriptions.
//! - Resolve KeyEvents into Actions for the current screen and keyboard state.
//!
//! Non-responsibilities:
//! - Text entry (unbound keys fall through to `physical_key`).
//!
//! Invariants:
//! - Bindings are matched in catalog order; the first match wins.
//! - Resolver never mutates App state and returns at most one Action.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::action::Action;
use crate::app::Screen;

mod bindings;

/// What the resolver needs to know about the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputContext {
    pub screen: Screen,
    pub keyboard_visible: bool,
}

/// Where a binding applies. `None` matches any value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BindingScope {
    pub(crate) screen: Option<Screen>,
    pub(crate) keyboard_visible: Option<bool>,
}

impl BindingScope {
    pub(crate) const GLOBAL: Self = Self {
        screen: None,
        keyboard_visible: None,
    };
    pub(crate) const KEYBOARD_VISIBLE: Self = Self {
        screen: None,
        keyboard_visible: Some(true),
    };
    pub(crate) const KEYBOARD_HIDDEN: Self = Self {
        screen: None,
        keyboard_visible: Some(false),
    };

    pub(crate) const fn screen(screen: Screen) -> Self {
        Self {
            screen: Some(screen),
            keyboard_visible: None,
        }
    }

    fn applies(&self, context: InputContext) -> bool {
        self.screen.is_none_or(|s| s == context.screen)
            && self
                .keyboard_visible
                .is_none_or(|v| v == context.keyboard_visible)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Matcher {
    /// Exact code and modifiers.
    Key {
        code: KeyCode,
        modifiers: KeyModifiers,
    },
    /// Code with any modifiers (BackTab arrives with or without SHIFT).
    Code(KeyCode),
}

#[derive(Debug, Clone)]
pub(crate) struct Keybinding {
    pub(crate) keys: &'static str,
    pub(crate) description: &'static str,
    pub(crate) scope: BindingScope,
    pub(crate) matcher: Matcher,
    pub(crate) action: Action,
    /// Shown in the footer hint line.
    pub(crate) hint: bool,
}

impl Keybinding {
    fn matches(&self, key: KeyEvent, context: InputContext) -> bool {
        if !self.scope.applies(context) {
            return false;
        }
        match self.matcher {
            Matcher::Key { code, modifiers } => key.code == code && key.modifiers == modifiers,
            Matcher::Code(code) => key.code == code,
        }
    }
}

pub(crate) fn keybindings() -> Vec<Keybinding> {
    bindings::all()
}

/// Action bound to `key` in `context`, if any.
pub fn resolve_action(context: InputContext, key: KeyEvent) -> Option<Action> {
    keybindings()
        .into_iter()
        .find(|binding| binding.matches(key, context))
        .map(|binding| binding.action)
}

/// `(keys, description)` pairs for the footer in `context`.
pub fn footer_hints(context: InputContext) -> Vec<(&'static str, &'static str)> {
    keybindings()
        .into_iter()
        .filter(|b| b.hint && b.scope.applies(context))
        .map(|b| (b.keys, b.description))
        .collect()
}
