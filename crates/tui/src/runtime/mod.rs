//! Runtime components for the kiosk.
//!
//! This module contains the runtime infrastructure:
//! - Terminal management (TerminalGuard)
//! - Configuration loading and persistence
//!
//! Does NOT handle:
//! - UI rendering or input handling (see `kiosk_tui::app` and `kiosk_tui::ui`).
//! - Keyboard semantics (see `kiosk_keyboard`).
//!
//! Invariants:
//! - All modules are initialized during application startup in `main()`.

pub mod config;
pub mod terminal;
