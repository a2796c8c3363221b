//! On-screen keyboard panel: geometry, hit-testing and rendering.
//!
//! Responsibilities:
//! - Compute where every key cap sits inside the keyboard panel.
//! - Map a touch (mouse click) position back to the key under it.
//! - Render the active grid with focus and latched-modifier styles.
//!
//! Does NOT handle:
//! - Key semantics or modifier state (see `kiosk_keyboard`).
//! - Deciding when the panel is shown (see `app`).
//!
//! Invariants:
//! - Rendering and hit-testing both go through [`KeyboardGeometry::compute`],
//!   so a click always lands on the key that was drawn there.
//! - Caps shrink before any key is dropped; only a panel narrower than the
//!   most compact sizing loses keys, and those are neither drawn nor
//!   hit-testable.

use bitflags::bitflags;
use kiosk_config::Theme;
use kiosk_keyboard::{Key, VirtualKeyboard, focus::control_rows, layout};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

use crate::ui::theme::ThemeExt;

/// Blank rows between key rows.
const ROW_GAP: u16 = 1;

/// Cap dimensions for one density of the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySizing {
    /// Width of a glyph key cap.
    pub glyph: u16,
    /// Width of the space bar.
    pub space: u16,
    /// Blank cells around the label of other special keys.
    pub padding: u16,
    /// Columns between adjacent key caps.
    pub gap: u16,
}

/// Densities from roomiest to most compact.
const SIZINGS: [KeySizing; 4] = [
    KeySizing { glyph: 5, space: 13, padding: 4, gap: 1 },
    KeySizing { glyph: 3, space: 7, padding: 2, gap: 1 },
    KeySizing { glyph: 1, space: 5, padding: 0, gap: 1 },
    KeySizing { glyph: 1, space: 5, padding: 0, gap: 0 },
];

impl KeySizing {
    /// Roomiest sizing whose widest row fits in `width` columns, or the
    /// most compact one when none does.
    pub fn for_width(width: u16) -> Self {
        let rows = control_rows();
        SIZINGS
            .into_iter()
            .find(|sizing| rows.iter().all(|row| sizing.row_width(row) <= width))
            .unwrap_or(SIZINGS[SIZINGS.len() - 1])
    }

    /// Width of one key cap.
    pub fn key_width(&self, key: Key) -> u16 {
        match key {
            Key::Char(_) => self.glyph,
            Key::Space => self.space,
            other => other.label().chars().count() as u16 + self.padding,
        }
    }

    /// Width of a row of caps including the gaps between them.
    pub fn row_width(&self, row: &[Key]) -> u16 {
        row.iter().map(|k| self.key_width(*k)).sum::<u16>()
            + row.len().saturating_sub(1) as u16 * self.gap
    }
}

/// Height of the keyboard panel including its border.
pub fn panel_height() -> u16 {
    let rows = control_rows().len() as u16;
    rows + rows.saturating_sub(1) * ROW_GAP + 2
}

/// A key cap and the cells it occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyCap {
    pub key: Key,
    pub rect: Rect,
}

/// Placement of every visible key cap for a given panel area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardGeometry {
    pub caps: Vec<KeyCap>,
}

impl KeyboardGeometry {
    /// Lay out the control rows inside `area` (the panel including border).
    ///
    /// Rows are centered horizontally and separated by [`ROW_GAP`]. Caps
    /// shrink to the roomiest [`KeySizing`] that fits every row.
    pub fn compute(area: Rect) -> Self {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        let sizing = KeySizing::for_width(inner.width);
        let mut caps = Vec::new();

        for (row_index, row) in control_rows().iter().enumerate() {
            let y = inner.y + row_index as u16 * (1 + ROW_GAP);
            if y >= inner.bottom() {
                break;
            }

            let row_width = sizing.row_width(row);
            let mut x = inner.x + inner.width.saturating_sub(row_width) / 2;

            for key in row {
                let width = sizing.key_width(*key);
                if x + width > inner.right() {
                    break;
                }
                caps.push(KeyCap {
                    key: *key,
                    rect: Rect::new(x, y, width, 1),
                });
                x += width + sizing.gap;
            }
        }

        Self { caps }
    }

    /// The key drawn at (`column`, `row`), if any.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Key> {
        self.caps
            .iter()
            .find(|cap| {
                column >= cap.rect.x
                    && column < cap.rect.right()
                    && row >= cap.rect.y
                    && row < cap.rect.bottom()
            })
            .map(|cap| cap.key)
    }
}

bitflags! {
    /// Visual state of one key cap.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct KeyVisual: u8 {
        /// Current key focus (keyboard navigation target).
        const FOCUSED = 1 << 0;
        /// Modifier key whose state is engaged.
        const LATCHED = 1 << 1;
    }
}

/// Text drawn on a key cap for the current modifier state.
pub fn cap_label(key: Key, shifted: bool) -> String {
    match key {
        Key::Char(c) => layout::resolve(c, shifted).unwrap_or(c).to_string(),
        other => other.label().to_string(),
    }
}

/// Widget rendering the keyboard panel for a visible keyboard.
pub struct KeyboardWidget<'a> {
    keyboard: &'a VirtualKeyboard,
    theme: &'a Theme,
}

impl<'a> KeyboardWidget<'a> {
    pub fn new(keyboard: &'a VirtualKeyboard, theme: &'a Theme) -> Self {
        Self { keyboard, theme }
    }

    fn visual(&self, key: Key) -> KeyVisual {
        let mut visual = KeyVisual::empty();
        if self.keyboard.focused_key() == Some(key) {
            visual |= KeyVisual::FOCUSED;
        }
        if let Some(modifiers) = self.keyboard.modifiers() {
            let latched = match key {
                Key::Shift => modifiers.shift_active(),
                Key::Caps => modifiers.caps_lock_active(),
                _ => false,
            };
            if latched {
                visual |= KeyVisual::LATCHED;
            }
        }
        visual
    }

    fn style_for(&self, visual: KeyVisual) -> Style {
        let mut style = if visual.contains(KeyVisual::LATCHED) {
            self.theme.key_latched()
        } else {
            self.theme.key_cap()
        };
        if visual.contains(KeyVisual::FOCUSED) {
            style = style.patch(self.theme.key_focused());
        }
        style
    }

    fn title(&self) -> Line<'static> {
        let mut spans = vec![Span::styled(" Keyboard ", self.theme.title())];
        if let Some(modifiers) = self.keyboard.modifiers() {
            if modifiers.caps_lock_active() {
                spans.push(Span::styled("[CAPS] ", self.theme.key_latched()));
            } else if modifiers.shift_active() {
                spans.push(Span::styled("[SHIFT] ", self.theme.key_latched()));
            }
        }
        Line::from(spans)
    }
}

impl Widget for KeyboardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_active())
            .title(self.title())
            .render(area, buf);

        let shifted = self
            .keyboard
            .modifiers()
            .is_some_and(|m| m.is_shifted());

        for cap in KeyboardGeometry::compute(area).caps {
            let style = self.style_for(self.visual(cap.key));
            let label = cap_label(cap.key, shifted);
            let width = cap.rect.width as usize;
            let text = format!("{label:^width$}");
            buf.set_stringn(cap.rect.x, cap.rect.y, text, width, style);
        }
    }
}
