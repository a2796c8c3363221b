//! Kiosk TUI library.
//!
//! This library provides the application state, input mapping and widgets
//! for a terminal kiosk that edits form fields through an on-screen keyboard.
//!
//! # Example
//!
//! ```rust
//! use crossterm::event::{KeyCode, KeyEvent};
//! use kiosk_config::KioskConfig;
//! use kiosk_tui::{Action, App};
//!
//! let mut app = App::new(&KioskConfig::default());
//! if let Some(action) = app.handle_input(KeyEvent::from(KeyCode::Char('a'))) {
//!     app.update(action);
//! }
//! assert_eq!(app.login.fields[0].value, "a");
//! ```

pub mod action;
pub mod app;
pub mod cli;
pub mod input;
pub mod metrics_exporter;
pub mod runtime;
pub mod ui;
pub mod ux_telemetry;

// Re-export commonly used types at the crate root
pub use action::Action;
pub use app::{App, FOOTER_HEIGHT, HEADER_HEIGHT, Screen};
pub use ui::toast::{Toast, ToastLevel};
