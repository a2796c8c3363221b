//! Configuration persistence for user preferences.
//!
//! Responsibilities:
//! - Resolve the configuration file path.
//! - Read and write user preferences (`PersistedState`) to disk.
//! - Back up corrupt config files before they are overwritten.
//!
//! Does NOT handle:
//! - Loading environment variables (see `loader`).
//! - High-level configuration merging (see `loader`).
//!
//! Invariants:
//! - Writes are atomic (temp file + rename).
//! - Only preferences are stored; typed field values never reach disk.

use std::path::{Path, PathBuf};

mod manager;
mod path;
mod state;

pub use manager::ConfigManager;
pub use path::default_config_path;
pub use state::{ConfigFileError, PersistedState};

/// Renames a corrupt config file to `<name>.corrupt.<unix-seconds>`.
///
/// Returns the backup path.
pub(crate) fn create_corrupt_backup(path: &Path) -> Result<PathBuf, std::io::Error> {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let backup_path = path.with_extension(format!("corrupt.{timestamp}"));
    std::fs::rename(path, &backup_path)?;
    Ok(backup_path)
}
