//! Configuration loader for environment variables and persisted preferences.
//!
//! Responsibilities:
//! - Load configuration from `.env` files, environment variables, and persisted state.
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Persisting configuration changes back to disk (see `persistence`).
//!
//! Invariants / Assumptions:
//! - Builder overrides beat environment variables, which beat persisted values.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

mod builder;
mod env;
mod error;

pub use builder::ConfigLoader;
pub use env::{env_var_or_none, parse_bool};
pub use error::ConfigError;

#[cfg(test)]
mod tests;
