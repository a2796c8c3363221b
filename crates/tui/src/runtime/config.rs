//! Configuration loading and persistence for the kiosk.
//!
//! Responsibilities:
//! - Load configuration with CLI and environment variable overrides.
//! - Save persisted preferences on application exit.
//!
//! Does NOT handle:
//! - Terminal state management (see `runtime::terminal`).
//!
//! Invariants:
//! - Configuration precedence: CLI args > env vars > persisted preferences > defaults.
//! - `load_dotenv()` is called before the environment is read.
//! - `--fresh` ignores persisted preferences but still saves on exit.

use anyhow::Result;
use kiosk_config::persistence::default_config_path;
use kiosk_config::{ConfigLoader, ConfigManager, KioskConfig, PersistedState};

use crate::app::App;
use crate::cli::Cli;

/// Resolved configuration plus the manager that saves it on exit.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: KioskConfig,
    pub manager: ConfigManager,
}

/// Load configuration for a session.
///
/// # Errors
///
/// Returns an error if the config file cannot be read (a corrupt file is
/// recovered, not an error), if `.env` is malformed, or if an override is
/// out of range.
pub fn load_config(cli: &Cli) -> Result<LoadedConfig> {
    let manager = config_manager(cli)?;
    let persisted = if cli.fresh {
        tracing::info!("--fresh flag set, starting with default state");
        PersistedState::default()
    } else {
        manager.load()
    };

    let config = build_loader_with_cli(cli, &persisted)?.build()?;
    tracing::info!(
        theme = config.theme.as_str(),
        mouse = config.mouse,
        tick_ms = config.tick_ms,
        path = %manager.config_path().display(),
        "configuration loaded"
    );
    Ok(LoadedConfig { config, manager })
}

/// Build a ConfigLoader with CLI options applied.
pub fn build_loader_with_cli(cli: &Cli, persisted: &PersistedState) -> Result<ConfigLoader> {
    let mut loader = ConfigLoader::new()
        .load_dotenv()?
        .from_persisted(persisted)
        .from_env()?;

    if let Some(theme) = cli.theme {
        loader = loader.with_theme(theme);
    }
    if cli.no_mouse {
        loader = loader.with_mouse(false);
    }
    if let Some(tick_ms) = cli.tick_ms {
        loader = loader.with_tick_ms(tick_ms);
    }
    Ok(loader)
}

/// CLI `--config-path` wins when not blank; otherwise the default location.
fn config_manager(cli: &Cli) -> Result<ConfigManager> {
    match &cli.config_path {
        Some(path) if !path.to_string_lossy().trim().is_empty() => {
            ConfigManager::new_with_path(path.clone())
        }
        _ => ConfigManager::new_with_path(default_config_path()?),
    }
}

/// Save preferences before exit.
pub fn save_and_quit(app: &App, manager: &mut ConfigManager) -> Result<()> {
    manager.save(&app.persisted_state())?;
    Ok(())
}
