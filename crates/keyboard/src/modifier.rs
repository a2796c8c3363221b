//! Shift / caps lock state machine.
//!
//! Two independent booleans with total transition functions. There is no
//! invalid combination and no error path: every method is safe to call in
//! any state.
//!
//! Invariants:
//! - `Caps` always clears a pending momentary shift.
//! - `Shift` is ignored while caps lock is on.
//! - A committed character releases momentary shift unless caps lock is on.

/// Modifier state of a mounted keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModifierState {
    shift_active: bool,
    caps_lock_active: bool,
}

impl ModifierState {
    /// Fresh state: both modifiers released.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift_active(&self) -> bool {
        self.shift_active
    }

    pub fn caps_lock_active(&self) -> bool {
        self.caps_lock_active
    }

    /// Whether the shifted grid is displayed and produced.
    pub fn is_shifted(&self) -> bool {
        self.shift_active || self.caps_lock_active
    }

    /// Handle the Shift key.
    pub fn press_shift(&mut self) {
        if !self.caps_lock_active {
            self.shift_active = !self.shift_active;
        }
    }

    /// Handle the Caps key.
    pub fn press_caps(&mut self) {
        self.caps_lock_active = !self.caps_lock_active;
        self.shift_active = false;
    }

    /// Called after a character was committed to the caller's value.
    pub fn release_after_commit(&mut self) {
        if self.shift_active && !self.caps_lock_active {
            self.shift_active = false;
        }
    }

    /// Return to the mount state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_unshifted() {
        let state = ModifierState::new();
        assert!(!state.shift_active());
        assert!(!state.caps_lock_active());
        assert!(!state.is_shifted());
    }

    #[test]
    fn test_shift_toggles() {
        let mut state = ModifierState::new();
        state.press_shift();
        assert!(state.shift_active());
        assert!(state.is_shifted());

        state.press_shift();
        assert!(!state.shift_active());
    }

    #[test]
    fn test_shift_ignored_while_caps_locked() {
        let mut state = ModifierState::new();
        state.press_caps();
        state.press_shift();
        assert!(!state.shift_active());
        assert!(state.is_shifted());
    }

    #[test]
    fn test_caps_clears_pending_shift() {
        let mut state = ModifierState::new();
        state.press_shift();
        state.press_caps();
        assert!(state.caps_lock_active());
        assert!(!state.shift_active());

        // Turning caps off again does not bring the shift back
        state.press_caps();
        assert!(!state.is_shifted());
    }

    #[test]
    fn test_commit_releases_momentary_shift() {
        let mut state = ModifierState::new();
        state.press_shift();
        state.release_after_commit();
        assert!(!state.shift_active());
    }

    #[test]
    fn test_commit_keeps_caps_lock() {
        let mut state = ModifierState::new();
        state.press_caps();
        for _ in 0..5 {
            state.release_after_commit();
            assert!(state.is_shifted());
        }
    }

    #[test]
    fn test_commit_without_modifiers_is_noop() {
        let mut state = ModifierState::new();
        state.release_after_commit();
        assert_eq!(state, ModifierState::new());
    }

    #[test]
    fn test_reset() {
        let mut state = ModifierState::new();
        state.press_caps();
        state.reset();
        assert_eq!(state, ModifierState::default());
    }
}
