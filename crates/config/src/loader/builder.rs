//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Support loading from persisted state, environment variables, and direct builder methods.
//! - Build and validate the final `KioskConfig`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Persisting configuration changes (see `persistence`).
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over persisted values.
//! - Builder `with_*` methods take precedence over environment variables regardless of call order.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{DEFAULT_UI_TICK_MS, ENV_DOTENV_DISABLED, MAX_UI_TICK_MS, MIN_UI_TICK_MS};
use crate::persistence::PersistedState;
use crate::types::{ColorTheme, KioskConfig};

/// Explicit overrides, typically from command-line flags.
#[derive(Debug, Default, Clone)]
struct Overrides {
    theme: Option<ColorTheme>,
    mouse: Option<bool>,
    tick_ms: Option<u64>,
}

/// Configuration loader that merges defaults, persisted state, environment and flags.
#[derive(Debug, Default, Clone)]
pub struct ConfigLoader {
    theme: Option<ColorTheme>,
    mouse: Option<bool>,
    tick_ms: Option<u64>,
    mask_passwords: Option<bool>,
    show_hints: Option<bool>,
    overrides: Overrides,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Seed values from persisted user preferences.
    pub fn from_persisted(mut self, state: &PersistedState) -> Self {
        self.theme = Some(state.selected_theme);
        self.show_hints = Some(state.show_hints);
        self
    }

    /// Read configuration from environment variables.
    ///
    /// Environment variables take precedence over persisted preferences.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Override the theme.
    pub fn with_theme(mut self, theme: ColorTheme) -> Self {
        self.overrides.theme = Some(theme);
        self
    }

    /// Override mouse capture.
    pub fn with_mouse(mut self, enabled: bool) -> Self {
        self.overrides.mouse = Some(enabled);
        self
    }

    /// Override the UI tick interval in milliseconds.
    pub fn with_tick_ms(mut self, tick_ms: u64) -> Self {
        self.overrides.tick_ms = Some(tick_ms);
        self
    }

    pub(crate) fn set_theme(&mut self, theme: Option<ColorTheme>) {
        self.theme = theme;
    }

    pub(crate) fn set_mouse(&mut self, mouse: Option<bool>) {
        self.mouse = mouse;
    }

    pub(crate) fn set_tick_ms(&mut self, tick_ms: Option<u64>) {
        self.tick_ms = tick_ms;
    }

    pub(crate) fn set_mask_passwords(&mut self, mask: Option<bool>) {
        self.mask_passwords = mask;
    }

    /// Build the final configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidTickRate` if the resolved tick interval
    /// falls outside the accepted range.
    pub fn build(self) -> Result<KioskConfig, ConfigError> {
        let defaults = KioskConfig::default();
        let tick_ms = self
            .overrides
            .tick_ms
            .or(self.tick_ms)
            .unwrap_or(DEFAULT_UI_TICK_MS);

        if !(MIN_UI_TICK_MS..=MAX_UI_TICK_MS).contains(&tick_ms) {
            return Err(ConfigError::InvalidTickRate {
                message: format!(
                    "must be between {MIN_UI_TICK_MS} and {MAX_UI_TICK_MS} ms (got {tick_ms})"
                ),
            });
        }

        Ok(KioskConfig {
            theme: self.overrides.theme.or(self.theme).unwrap_or(defaults.theme),
            mouse: self.overrides.mouse.or(self.mouse).unwrap_or(defaults.mouse),
            tick_ms,
            mask_passwords: self.mask_passwords.unwrap_or(defaults.mask_passwords),
            show_hints: self.show_hints.unwrap_or(defaults.show_hints),
        })
    }
}
