//! Reading and writing persisted preferences.
//!
//! Invariants:
//! - A missing file yields default preferences.
//! - A corrupt file is backed up (best effort) and replaced by defaults; it never blocks startup.
//! - Writes are atomic (temp file + rename).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::state::{ConfigFileError, PersistedState, read_config_file};
use super::{create_corrupt_backup, default_config_path};

/// Manages loading and saving user preferences.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
    state: PersistedState,
}

impl ConfigManager {
    /// Creates a manager for the default config path.
    pub fn new() -> Result<Self> {
        let path = default_config_path()?;
        Self::new_with_path(path)
    }

    /// Creates a manager for an explicit path (tests, `--config-path`).
    pub fn new_with_path(config_path: PathBuf) -> Result<Self> {
        let state = Self::read_or_recover(&config_path)?;
        Ok(Self { config_path, state })
    }

    fn read_or_recover(path: &Path) -> Result<PersistedState> {
        if !path.exists() {
            return Ok(PersistedState::default());
        }

        match read_config_file(path) {
            Ok(state) => Ok(state),
            Err(ConfigFileError::Parse { .. }) => {
                match create_corrupt_backup(path) {
                    Ok(backup) => tracing::warn!(
                        path = %path.display(),
                        backup = %backup.display(),
                        "Config file was corrupt; using defaults"
                    ),
                    Err(error) => tracing::warn!(
                        path = %path.display(),
                        %error,
                        "Config file was corrupt and could not be backed up; using defaults"
                    ),
                }
                Ok(PersistedState::default())
            }
            Err(err @ ConfigFileError::Read { .. }) => Err(err.into()),
        }
    }

    /// Returns the path to the configuration file.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Returns the loaded preferences.
    pub fn load(&self) -> PersistedState {
        self.state.clone()
    }

    /// Saves preferences to disk.
    ///
    /// # Errors
    /// Returns an error if the parent directory cannot be created
    /// or the file cannot be written.
    pub fn save(&mut self, state: &PersistedState) -> Result<()> {
        self.state = state.clone();
        self.atomic_save()
    }

    /// Writes to a temporary file first, then renames it to the target path.
    fn atomic_save(&self) -> Result<()> {
        if let Some(parent) = self.config_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let temp_path = self.config_path.with_extension("tmp");
        let content = serde_json::to_string_pretty(&self.state)?;
        std::fs::write(&temp_path, content).context("Failed to write temporary config file")?;

        std::fs::rename(&temp_path, &self.config_path)
            .context("Failed to rename temporary config file")?;

        tracing::debug!(path = %self.config_path.display(), "Config saved atomically");
        Ok(())
    }
}
