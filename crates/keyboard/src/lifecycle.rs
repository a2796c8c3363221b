//! Mount/unmount lifecycle of the virtual keyboard.
//!
//! Responsibilities:
//! - Model the Hidden/Visible state of the keyboard.
//! - Reset modifiers and place focus on every mount.
//! - Hold the Escape listener registration for exactly the mounted lifetime.
//!
//! Does NOT handle:
//! - Reading terminal events (the host maps them into [`Key`]s and global
//!   keys).
//! - Rendering.
//!
//! Invariants:
//! - A mounted session owns a [`ListenerGuard`]; dropping the session (close,
//!   Escape, remount, the keyboard itself being dropped, unwinding) always
//!   unregisters the listener.
//! - `on_close` is invoked exactly once per close press or Escape.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::focus::KeyFocus;
use crate::key::Key;
use crate::layout::{self, LayoutGrid};
use crate::modifier::ModifierState;
use crate::relay::{self, KeyOutcome, KeyboardSink};

/// Keys the host delivers to listeners regardless of which control has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlobalKey {
    Escape,
}

/// Identifier of a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    // Registration order; the newest listener is last.
    entries: Vec<(ListenerId, GlobalKey)>,
}

/// Host-wide registry of global key listeners.
///
/// Cloning yields another handle to the same registry.
#[derive(Debug, Clone, Default)]
pub struct GlobalKeyListeners {
    inner: Rc<RefCell<Registry>>,
}

impl GlobalKeyListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. It stays registered until the guard is dropped.
    pub fn register(&self, key: GlobalKey) -> ListenerGuard {
        let mut registry = self.inner.borrow_mut();
        let id = ListenerId(registry.next_id);
        registry.next_id += 1;
        registry.entries.push((id, key));
        tracing::debug!(?id, ?key, "global key listener registered");
        ListenerGuard {
            id,
            registry: Rc::downgrade(&self.inner),
        }
    }

    /// The listener that receives `key`: the most recently registered one.
    pub fn target(&self, key: GlobalKey) -> Option<ListenerId> {
        self.inner
            .borrow()
            .entries
            .iter()
            .rev()
            .find(|(_, k)| *k == key)
            .map(|(id, _)| *id)
    }

    /// Whether anything currently listens for `key`.
    pub fn is_listening(&self, key: GlobalKey) -> bool {
        self.target(key).is_some()
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Registration handle. Unregisters its listener on drop.
#[derive(Debug)]
pub struct ListenerGuard {
    id: ListenerId,
    registry: Weak<RefCell<Registry>>,
}

impl ListenerGuard {
    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        // The registry may already be gone at host shutdown; nothing to do then.
        if let Some(registry) = self.registry.upgrade()
            && let Ok(mut registry) = registry.try_borrow_mut()
        {
            registry.entries.retain(|(id, _)| *id != self.id);
            tracing::debug!(id = ?self.id, "global key listener unregistered");
        }
    }
}

/// State that exists only while the keyboard is visible.
#[derive(Debug)]
pub struct KeyboardSession {
    modifiers: ModifierState,
    focus: KeyFocus,
    escape: ListenerGuard,
}

impl KeyboardSession {
    fn mount(listeners: &GlobalKeyListeners) -> Self {
        let mut focus = KeyFocus::new();
        focus.focus_first();
        Self {
            modifiers: ModifierState::new(),
            focus,
            escape: listeners.register(GlobalKey::Escape),
        }
    }

    pub fn modifiers(&self) -> ModifierState {
        self.modifiers
    }

    pub fn focus(&self) -> &KeyFocus {
        &self.focus
    }

    pub fn escape_listener(&self) -> ListenerId {
        self.escape.id()
    }
}

/// Why the keyboard went from Visible to Hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// The ✕ control was pressed.
    CloseKey,
    /// Escape was delivered through the global listener.
    Escape,
    /// Reopened for another field.
    Remount,
    /// Hidden by the host without user intent.
    Host,
}

impl CloseReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CloseKey => "close_key",
            Self::Escape => "escape",
            Self::Remount => "remount",
            Self::Host => "host",
        }
    }
}

/// Direction for key focus navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusMove {
    Next,
    Prev,
    Up,
    Down,
}

/// The on-screen keyboard widget: Hidden or Visible.
#[derive(Debug)]
pub struct VirtualKeyboard {
    listeners: GlobalKeyListeners,
    session: Option<KeyboardSession>,
}

impl VirtualKeyboard {
    /// A hidden keyboard that registers its listeners in `listeners`.
    pub fn new(listeners: GlobalKeyListeners) -> Self {
        Self {
            listeners,
            session: None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&KeyboardSession> {
        self.session.as_ref()
    }

    /// Modifier state while visible.
    pub fn modifiers(&self) -> Option<ModifierState> {
        self.session.as_ref().map(KeyboardSession::modifiers)
    }

    /// Grid to display; the unshifted grid while hidden.
    pub fn active_grid(&self) -> LayoutGrid {
        layout::grid(self.modifiers().is_some_and(|m| m.is_shifted()))
    }

    /// Mount the keyboard. An already visible keyboard is remounted, which
    /// resets its modifiers and focus.
    ///
    /// Returns the reason the previous session ended, if there was one.
    pub fn open(&mut self) -> Option<CloseReason> {
        let previous = self.session.take().map(|_| CloseReason::Remount);
        self.session = Some(KeyboardSession::mount(&self.listeners));
        tracing::debug!(remount = previous.is_some(), "keyboard mounted");
        previous
    }

    /// Unmount without notifying the sink. Returns false if already hidden.
    pub fn hide(&mut self) -> bool {
        self.unmount(CloseReason::Host)
    }

    fn unmount(&mut self, reason: CloseReason) -> bool {
        let was_visible = self.session.take().is_some();
        if was_visible {
            tracing::debug!(reason = reason.as_str(), "keyboard unmounted");
        }
        was_visible
    }

    /// Press a key. Ignored while hidden.
    ///
    /// A close press invokes `sink.on_close()` once and hides the keyboard.
    pub fn press<S: KeyboardSink + ?Sized>(&mut self, key: Key, sink: &mut S) -> KeyOutcome {
        let Some(session) = self.session.as_mut() else {
            return KeyOutcome::Ignored;
        };
        let outcome = relay::relay(key, &mut session.modifiers, sink);
        if outcome == KeyOutcome::Close {
            self.unmount(CloseReason::CloseKey);
        }
        outcome
    }

    /// Deliver a global key from the host.
    ///
    /// Returns true if this keyboard was the listener and handled it.
    pub fn handle_global_key<S: KeyboardSink + ?Sized>(
        &mut self,
        key: GlobalKey,
        sink: &mut S,
    ) -> bool {
        let Some(session) = self.session.as_ref() else {
            return false;
        };
        if self.listeners.target(key) != Some(session.escape.id()) {
            return false;
        }
        match key {
            GlobalKey::Escape => {
                sink.on_close();
                self.unmount(CloseReason::Escape);
            }
        }
        true
    }

    /// Move key focus. Ignored while hidden.
    pub fn move_focus(&mut self, direction: FocusMove) {
        if let Some(session) = self.session.as_mut() {
            match direction {
                FocusMove::Next => session.focus.next(),
                FocusMove::Prev => session.focus.prev(),
                FocusMove::Up => session.focus.up(),
                FocusMove::Down => session.focus.down(),
            }
        }
    }

    /// Focus a specific control, e.g. the one under a touch.
    pub fn focus_key(&mut self, key: Key) -> bool {
        self.session
            .as_mut()
            .is_some_and(|session| session.focus.set_focus(key))
    }

    /// Focused control while visible.
    pub fn focused_key(&self) -> Option<Key> {
        self.session.as_ref().and_then(|s| s.focus.current())
    }

    /// Press the focused control.
    pub fn activate_focused<S: KeyboardSink + ?Sized>(&mut self, sink: &mut S) -> KeyOutcome {
        match self.focused_key() {
            Some(key) => self.press(key, sink),
            None => KeyOutcome::Ignored,
        }
    }

    /// Registry shared with the host.
    pub fn listeners(&self) -> &GlobalKeyListeners {
        &self.listeners
    }
}
