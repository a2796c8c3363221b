//! Kiosk application state.
//!
//! The module is organized into submodules:
//! - `form`: Screens, fields, and the field/keyboard binding
//! - `layout`: Shared frame layout for rendering and hit-testing
//! - `input`: Key event resolution
//! - `mouse`: Touch (mouse click) handling
//! - `update`: Action handling
//! - `render`: Rendering logic
//!
//! Invariants:
//! - The forms own every field value; the keyboard only sees the bound field
//!   through a sink for the duration of one press.
//! - `bound_field` is `Some` exactly while the keyboard is visible.

pub mod form;
pub mod layout;

mod input;
mod mouse;
mod render;
mod update;

pub use form::{Announcement, BoundField, Field, Form, Screen};
pub use layout::{AppLayout, FOOTER_HEIGHT, HEADER_HEIGHT};

use kiosk_config::{ColorTheme, KioskConfig, PersistedState, Theme};
use kiosk_keyboard::{GlobalKeyListeners, VirtualKeyboard};
use ratatui::layout::Rect;

use crate::input::InputContext;
use crate::ui::Toast;
use crate::ux_telemetry::UxTelemetryCollector;

/// Main application state.
pub struct App {
    pub screen: Screen,
    pub login: Form,
    pub announcement: Form,
    /// Announcements posted this session, oldest first.
    pub posted: Vec<Announcement>,
    /// Username accepted by the last sign-in.
    pub signed_in_as: Option<String>,

    pub keyboard: VirtualKeyboard,
    /// Index of the field the keyboard edits, on the current screen.
    pub bound_field: Option<usize>,

    pub color_theme: ColorTheme,
    pub theme: Theme,
    pub toasts: Vec<Toast>,
    pub show_hints: bool,
    pub mask_passwords: bool,
    pub mouse_enabled: bool,

    /// Terminal area of the last frame (used for mouse hit-testing).
    pub last_area: Rect,

    pub ux_telemetry: UxTelemetryCollector,
}

impl App {
    pub fn new(config: &KioskConfig) -> Self {
        Self {
            screen: Screen::Login,
            login: Form::login(),
            announcement: Form::announcement(),
            posted: Vec::new(),
            signed_in_as: None,
            keyboard: VirtualKeyboard::new(GlobalKeyListeners::new()),
            bound_field: None,
            color_theme: config.theme,
            theme: Theme::from(config.theme),
            toasts: Vec::new(),
            show_hints: config.show_hints,
            mask_passwords: config.mask_passwords,
            mouse_enabled: config.mouse,
            last_area: Rect::default(),
            ux_telemetry: UxTelemetryCollector::default(),
        }
    }

    /// Form of the current screen.
    pub fn form(&self) -> &Form {
        match self.screen {
            Screen::Login => &self.login,
            Screen::Announcement => &self.announcement,
        }
    }

    pub fn form_mut(&mut self) -> &mut Form {
        match self.screen {
            Screen::Login => &mut self.login,
            Screen::Announcement => &mut self.announcement,
        }
    }

    pub fn input_context(&self) -> InputContext {
        InputContext {
            screen: self.screen,
            keyboard_visible: self.keyboard.is_visible(),
        }
    }

    /// Layout of a frame of `area` for the current state.
    pub fn layout(&self, area: Rect) -> AppLayout {
        AppLayout::compute(area, &self.form().fields, self.keyboard.is_visible())
    }

    pub fn set_theme(&mut self, theme: ColorTheme) {
        self.color_theme = theme;
        self.theme = Theme::from(theme);
    }

    /// Preferences to save on exit.
    pub fn persisted_state(&self) -> PersistedState {
        PersistedState {
            selected_theme: self.color_theme,
            show_hints: self.show_hints,
        }
    }
}
