//! Test helpers for kiosk TUI testing.
//!
//! Provides utility functions for simulating keyboard and touch input and a
//! rendering harness backed by `TestBackend`.

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use kiosk_config::KioskConfig;
use kiosk_keyboard::Key;
use kiosk_tui::App;
use kiosk_tui::ui::keyboard::KeyboardGeometry;
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, layout::Rect};

/// Create a character key event.
pub fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

/// Create a key event with no modifiers.
pub fn code(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Create a Ctrl+char key event.
pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// A mouse event of `kind` at (`column`, `row`).
pub fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// A left click at (`column`, `row`).
pub fn left_click(column: u16, row: u16) -> MouseEvent {
    mouse(MouseEventKind::Down(MouseButton::Left), column, row)
}

/// App with default config and an 80x24 last frame.
pub fn test_app() -> App {
    let mut app = App::new(&KioskConfig::default());
    app.last_area = Rect::new(0, 0, 80, 24);
    app
}

/// Resolve and apply a key event the way the main loop does.
pub fn dispatch(app: &mut App, event: KeyEvent) {
    if let Some(action) = app.handle_input(event) {
        app.update(action);
    }
}

/// Dispatch one event per character.
pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        dispatch(app, key(c));
    }
}

/// Resolve and apply a mouse event the way the main loop does.
pub fn dispatch_mouse(app: &mut App, event: MouseEvent) {
    if let Some(action) = app.handle_mouse(event) {
        app.update(action);
    }
}

/// Center cell of the rendered cap for `key`, if it is on screen.
pub fn cap_center(app: &App, key: Key) -> Option<(u16, u16)> {
    let panel = app.layout(app.last_area).keyboard?;
    KeyboardGeometry::compute(panel)
        .caps
        .into_iter()
        .find(|cap| cap.key == key)
        .map(|cap| (cap.rect.x + cap.rect.width / 2, cap.rect.y))
}

/// Tap the rendered cap for `key`.
pub fn tap(app: &mut App, key: Key) {
    let (column, row) = cap_center(app, key).expect("key is not on screen");
    dispatch_mouse(app, left_click(column, row));
}

/// App already signed in and showing the announcement form.
pub fn signed_in_app() -> App {
    let mut app = test_app();
    app.login.fields[0].value = "ada".to_string();
    app.login.fields[1].value = "secret".to_string();
    app.update(kiosk_tui::Action::SubmitLogin);
    app
}

/// Test harness for rendering with a mock terminal.
pub struct TuiHarness {
    pub app: App,
    pub terminal: Terminal<TestBackend>,
}

impl TuiHarness {
    /// Create a new test harness with the given terminal dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create terminal");
        let mut app = App::new(&KioskConfig::default());
        app.last_area = Rect::new(0, 0, width, height);
        Self { app, terminal }
    }

    /// Render the current app state and return the buffer contents.
    pub fn render(&mut self) -> String {
        self.terminal
            .draw(|f| self.app.render(f))
            .expect("Failed to render");
        buffer_to_string(self.terminal.backend().buffer())
    }
}

/// Convert a ratatui Buffer to a string, one line per row.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area();
    let mut output = String::new();

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            output.push_str(buffer[(x, y)].symbol());
        }
        if y < area.bottom() - 1 {
            output.push('\n');
        }
    }

    output
}
