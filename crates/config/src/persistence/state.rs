//! State types and serialization for configuration persistence.
//!
//! Responsibilities:
//! - Define persisted preferences (`PersistedState`).
//! - Define config file errors (`ConfigFileError`).
//! - Read and parse config files.
//!
//! Does NOT handle:
//! - Writing config files (handled by manager.rs via atomic_save).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::ColorTheme;

/// User preferences that persist across application runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedState {
    /// Persisted UI theme selection.
    pub selected_theme: ColorTheme,
    /// Whether the footer key hints are shown.
    pub show_hints: bool,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            selected_theme: ColorTheme::Default,
            show_hints: true,
        }
    }
}

/// Errors that can occur when reading the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Reads and parses the config file from disk.
pub(crate) fn read_config_file(path: &Path) -> Result<PersistedState, ConfigFileError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigFileError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| ConfigFileError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}
