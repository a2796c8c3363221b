//! Command-line argument parsing for kiosk-tui.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//! - Provide parsed CLI arguments to the main application.
//!
//! Does NOT handle:
//! - Configuration loading or validation (see `runtime::config`).
//! - Terminal state management (see `runtime::terminal`).
//! - Environment variable parsing (handled by `kiosk_config`).
//!
//! Invariants:
//! - CLI arguments are parsed once at startup via `Cli::parse()`.
//! - All path arguments are resolved relative to the current working directory.

use clap::Parser;
use kiosk_config::ColorTheme;
use std::path::PathBuf;

/// Command-line arguments for kiosk-tui.
///
/// Configuration precedence (highest to lowest):
/// 1. CLI arguments (e.g., --theme, --no-mouse)
/// 2. Environment variables (e.g., KIOSK_THEME, KIOSK_TICK_MS)
/// 3. Persisted preferences (from config.json)
/// 4. Default values
#[derive(Debug, Parser)]
#[command(
    name = "kiosk-tui",
    about = "Touch kiosk forms with an on-screen keyboard",
    version,
    after_help = "Examples:\n  kiosk-tui\n  kiosk-tui --theme high-contrast\n  kiosk-tui --config-path /etc/kiosk-tui/config.json\n  kiosk-tui --log-dir /var/log/kiosk-tui --no-mouse\n  kiosk-tui --fresh\n  kiosk-tui --metrics-bind 127.0.0.1:9090\n"
)]
pub struct Cli {
    /// Path to a custom configuration file
    #[arg(long)]
    pub config_path: Option<PathBuf>,

    /// Directory for log files
    #[arg(long, default_value = kiosk_config::constants::DEFAULT_LOG_DIR)]
    pub log_dir: PathBuf,

    /// Disable mouse (touch) support
    #[arg(long)]
    pub no_mouse: bool,

    /// Color theme (default, light, dark, high_contrast, monochrome)
    #[arg(long)]
    pub theme: Option<ColorTheme>,

    /// UI tick interval in milliseconds
    #[arg(long)]
    pub tick_ms: Option<u64>,

    /// Start with fresh state, ignoring any persisted state
    #[arg(long)]
    pub fresh: bool,

    /// Enable Prometheus metrics endpoint and bind address (e.g., "127.0.0.1:9090")
    ///
    /// When enabled, exposes /metrics endpoint for Prometheus scraping.
    #[arg(long, env = "KIOSK_METRICS_BIND")]
    pub metrics_bind: Option<String>,
}
