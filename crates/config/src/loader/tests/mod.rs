//! Tests for the configuration loader.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Environment mutations go through `temp_env` so prior values are restored.
//! - Temporary directories are cleaned up automatically via `tempfile`.

mod dotenv_tests;
mod precedence_tests;

/// Every variable the loader reads, unset.
pub(crate) fn cleared_env() -> Vec<(&'static str, Option<&'static str>)> {
    use crate::constants::*;
    vec![
        (ENV_THEME, None),
        (ENV_NO_MOUSE, None),
        (ENV_TICK_MS, None),
        (ENV_MASK_PASSWORDS, None),
        (ENV_DOTENV_DISABLED, None),
    ]
}
