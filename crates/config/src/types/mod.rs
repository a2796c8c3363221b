//! Configuration types for the kiosk.
//!
//! Responsibilities:
//! - Define the resolved runtime configuration (`KioskConfig`).
//! - Define theme types (`ColorTheme`, `Theme`).
//!
//! Does NOT handle:
//! - Loading values from the environment or disk (see `loader`).
//! - Writing preferences back to disk (see `persistence`).

mod settings;
mod theme;

pub use settings::KioskConfig;
pub use theme::{ColorTheme, ParseThemeError, Theme};
