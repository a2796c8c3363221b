//! Screen layout calculation for rendering and hit-testing.
//!
//! Responsibilities:
//! - Split the terminal into header, body, keyboard panel and footer.
//! - Place each form field inside the body.
//!
//! Does NOT handle:
//! - Drawing (see `render.rs`).
//! - Mouse events (see `mouse.rs`).
//!
//! Invariants:
//! - `render` and `handle_mouse` both use `AppLayout::compute` with the same
//!   inputs, so a click on a field or key hits what was drawn.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::app::form::Field;
use crate::ui::keyboard::panel_height;

pub const HEADER_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 3;
/// Rows of a single-line field including its border.
pub const FIELD_HEIGHT: u16 = 3;
/// Rows of a multiline field including its border.
pub const MULTILINE_FIELD_HEIGHT: u16 = 4;

/// Areas of one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppLayout {
    pub header: Rect,
    pub body: Rect,
    pub keyboard: Option<Rect>,
    pub footer: Rect,
    /// One rect per field, in field order. Fields that do not fit get an
    /// empty rect.
    pub fields: Vec<Rect>,
}

impl AppLayout {
    pub fn compute(area: Rect, fields: &[Field], keyboard_visible: bool) -> Self {
        let keyboard_height = if keyboard_visible { panel_height() } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(keyboard_height),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        let body = chunks[1];
        let keyboard = keyboard_visible.then_some(chunks[2]);

        let mut fields_rects = Vec::with_capacity(fields.len());
        let mut y = body.y;
        for field in fields {
            let wanted = if field.multiline {
                MULTILINE_FIELD_HEIGHT
            } else {
                FIELD_HEIGHT
            };
            let available = body.bottom().saturating_sub(y);
            if available < FIELD_HEIGHT {
                fields_rects.push(Rect::new(body.x, y.min(body.bottom()), body.width, 0));
                continue;
            }
            let height = wanted.min(available);
            fields_rects.push(Rect::new(body.x, y, body.width, height));
            y += height;
        }

        Self {
            header: chunks[0],
            body,
            keyboard,
            footer: chunks[3],
            fields: fields_rects,
        }
    }

    /// Index of the field drawn at (`column`, `row`).
    pub fn field_at(&self, column: u16, row: u16) -> Option<usize> {
        self.fields.iter().position(|rect| {
            rect.height > 0
                && column >= rect.x
                && column < rect.right()
                && row >= rect.y
                && row < rect.bottom()
        })
    }
}
