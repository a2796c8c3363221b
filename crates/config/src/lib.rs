//! Configuration management for the kiosk.
//!
//! This crate provides the theme palette, the layered settings loader
//! (defaults, persisted preferences, environment, flags) and the on-disk
//! preference store.

pub mod constants;
mod loader;
pub mod persistence;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none, parse_bool};
pub use persistence::{ConfigManager, PersistedState};
pub use types::{ColorTheme, KioskConfig, ParseThemeError, Theme};
