//! Key focus for keyboard-only navigation of the on-screen keyboard.
//!
//! Provides a `KeyFocus` tracking which control of the keyboard has focus,
//! so a mounted keyboard can be driven without touch input.
//!
//! Controls are the glyph keys of the unshifted grid, row by row, followed by
//! the special-key row. Glyph controls are identified by their unshifted
//! glyph; the layout maps them to the active grid on press.

use crate::key::{Key, SPECIAL_KEYS};
use crate::layout::{self, KeyPosition};

/// Ordered rows of focusable controls.
pub fn control_rows() -> Vec<Vec<Key>> {
    let mut rows: Vec<Vec<Key>> = layout::UNSHIFTED
        .iter()
        .map(|row| row.iter().copied().map(Key::Char).collect())
        .collect();
    rows.push(SPECIAL_KEYS.to_vec());
    rows
}

/// Tracks the focused control of a mounted keyboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyFocus {
    rows: Vec<Vec<Key>>,
    current: KeyPosition,
}

impl KeyFocus {
    /// Focus manager over the standard control rows, focused on the first
    /// actionable control.
    pub fn new() -> Self {
        Self::from_rows(control_rows())
    }

    /// Focus manager over arbitrary rows. Empty rows are dropped.
    pub fn from_rows(rows: Vec<Vec<Key>>) -> Self {
        let rows: Vec<Vec<Key>> = rows.into_iter().filter(|r| !r.is_empty()).collect();
        Self {
            rows,
            current: KeyPosition::new(0, 0),
        }
    }

    /// Move focus to the first actionable control.
    pub fn focus_first(&mut self) {
        self.current = KeyPosition::new(0, 0);
    }

    /// The focused control, if there is any control at all.
    pub fn current(&self) -> Option<Key> {
        self.rows
            .get(self.current.row)
            .and_then(|row| row.get(self.current.col))
            .copied()
    }

    /// Row/column of the focused control.
    pub fn position(&self) -> KeyPosition {
        self.current
    }

    /// Check if a specific control is focused.
    pub fn is_focused(&self, key: Key) -> bool {
        self.current() == Some(key)
    }

    /// Move focus to the next control, row-major, wrapping at the end.
    pub fn next(&mut self) {
        let Some(row) = self.rows.get(self.current.row) else {
            return;
        };
        if self.current.col + 1 < row.len() {
            self.current.col += 1;
        } else {
            self.current = KeyPosition::new((self.current.row + 1) % self.rows.len(), 0);
        }
    }

    /// Move focus to the previous control, wrapping at the start.
    pub fn prev(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        if self.current.col > 0 {
            self.current.col -= 1;
        } else {
            let row = if self.current.row == 0 {
                self.rows.len() - 1
            } else {
                self.current.row - 1
            };
            self.current = KeyPosition::new(row, self.rows[row].len() - 1);
        }
    }

    /// Move focus one row up, keeping the column where the row allows it.
    pub fn up(&mut self) {
        if self.current.row > 0 {
            self.move_to_row(self.current.row - 1);
        }
    }

    /// Move focus one row down, keeping the column where the row allows it.
    pub fn down(&mut self) {
        if self.current.row + 1 < self.rows.len() {
            self.move_to_row(self.current.row + 1);
        }
    }

    fn move_to_row(&mut self, row: usize) {
        let len = self.rows[row].len();
        self.current = KeyPosition::new(row, self.current.col.min(len - 1));
    }

    /// Set focus to a specific control. Returns false if it is not present.
    pub fn set_focus(&mut self, key: Key) -> bool {
        for (row, keys) in self.rows.iter().enumerate() {
            if let Some(col) = keys.iter().position(|k| *k == key) {
                self.current = KeyPosition::new(row, col);
                return true;
            }
        }
        false
    }

    /// Number of focusable controls.
    pub fn len(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<Key>] {
        &self.rows
    }
}

impl Default for KeyFocus {
    fn default() -> Self {
        Self::new()
    }
}
