//! Fixed character grids for the on-screen keyboard.
//!
//! Responsibilities:
//! - Hold the unshifted and shifted key grids as constant tables.
//! - Select the active grid from the modifier state.
//! - Resolve a glyph to the character committed under the current modifiers.
//!
//! Does NOT handle:
//! - Modifier transitions (see `modifier`).
//! - String mutation (see `relay`).
//!
//! Invariants:
//! - Both grids have the same row count and the same key count per row, so
//!   toggling shift never reflows the rendered keyboard.
//! - Every key is exactly one `char`.

/// A grid of key rows.
pub type LayoutGrid = &'static [&'static [char]];

/// Grid shown when neither shift nor caps lock is active.
pub const UNSHIFTED: LayoutGrid = &[
    &['1', '2', '3', '4', '5', '6', '7', '8', '9', '0'],
    &['q', 'w', 'e', 'r', 't', 'y', 'u', 'i', 'o', 'p'],
    &['a', 's', 'd', 'f', 'g', 'h', 'j', 'k', 'l'],
    &['z', 'x', 'c', 'v', 'b', 'n', 'm', '.'],
];

/// Grid shown while shift or caps lock is active.
///
/// The last key of the bottom row is `@` where the unshifted grid has `.`.
pub const SHIFTED: LayoutGrid = &[
    &['!', '@', '#', '$', '%', '^', '&', '*', '(', ')'],
    &['Q', 'W', 'E', 'R', 'T', 'Y', 'U', 'I', 'O', 'P'],
    &['A', 'S', 'D', 'F', 'G', 'H', 'J', 'K', 'L'],
    &['Z', 'X', 'C', 'V', 'B', 'N', 'M', '@'],
];

/// Row/column coordinates of a key inside a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPosition {
    pub row: usize,
    pub col: usize,
}

impl KeyPosition {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Return the grid to display for the given modifier state.
///
/// `shifted` is `shift_active || caps_lock_active`.
pub fn grid(shifted: bool) -> LayoutGrid {
    if shifted { SHIFTED } else { UNSHIFTED }
}

/// Glyph at a position of the selected grid.
pub fn key_at(shifted: bool, pos: KeyPosition) -> Option<char> {
    grid(shifted)
        .get(pos.row)
        .and_then(|row| row.get(pos.col))
        .copied()
}

/// Locate a glyph, searching the unshifted grid first.
///
/// Returns the position and whether the glyph was found in the shifted grid.
pub fn position_of(ch: char) -> Option<(KeyPosition, bool)> {
    find_in(UNSHIFTED, ch)
        .map(|pos| (pos, false))
        .or_else(|| find_in(SHIFTED, ch).map(|pos| (pos, true)))
}

fn find_in(grid: LayoutGrid, ch: char) -> Option<KeyPosition> {
    grid.iter().enumerate().find_map(|(row, keys)| {
        keys.iter()
            .position(|&k| k == ch)
            .map(|col| KeyPosition::new(row, col))
    })
}

/// Character committed when the key labelled `ch` is pressed.
///
/// A glyph from the unshifted grid follows the active grid at the same
/// position. A glyph that only exists in the shifted grid is already shifted
/// and is committed as-is. Anything else is not on the keyboard.
pub fn resolve(ch: char, shifted: bool) -> Option<char> {
    match position_of(ch)? {
        (pos, false) => key_at(shifted, pos),
        (_, true) => Some(ch),
    }
}

/// Whether both grids have identical shapes.
pub fn shapes_match() -> bool {
    UNSHIFTED.len() == SHIFTED.len()
        && UNSHIFTED
            .iter()
            .zip(SHIFTED.iter())
            .all(|(a, b)| a.len() == b.len())
}

/// Number of keys in the longest row.
pub fn max_row_len() -> usize {
    UNSHIFTED.iter().map(|row| row.len()).max().unwrap_or(0)
}
