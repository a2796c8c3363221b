//! Touch (mouse click) handling for the kiosk app.
//!
//! Responsibilities:
//! - Press the keyboard key under a touch
//! - Open the keyboard on the field under a touch
//!
//! Does NOT handle:
//! - Keyboard input
//! - Rendering
//!
//! Invariants:
//! - Hit-testing uses `App::layout` and `KeyboardGeometry::compute` on the
//!   last rendered area, the same calls `render` makes.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::action::Action;
use crate::app::App;
use crate::ui::keyboard::KeyboardGeometry;

impl App {
    /// Handle mouse input - returns Action if one should be dispatched.
    pub fn handle_mouse(&self, mouse: MouseEvent) -> Option<Action> {
        if !self.mouse_enabled {
            return None;
        }
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_touch(mouse.column, mouse.row),
            _ => None,
        }
    }

    fn handle_touch(&self, column: u16, row: u16) -> Option<Action> {
        let layout = self.layout(self.last_area);
        layout
            .keyboard
            .and_then(|panel| KeyboardGeometry::compute(panel).hit_test(column, row))
            .map(Action::TouchKey)
            .or_else(|| layout.field_at(column, row).map(Action::OpenKeyboardOn))
    }
}
