//! Kiosk TUI - touch kiosk forms with an on-screen keyboard.
//!
//! Responsibilities:
//! - Orchestrate application startup and shutdown.
//! - Initialize terminal, logging, metrics, and async runtime.
//! - Run the main event loop.
//!
//! Does NOT handle:
//! - Keyboard semantics (see `kiosk_keyboard`).
//! - Configuration persistence (see `kiosk_config`).
//!
//! Invariants:
//! - The TUI enters raw mode and alternate screen on startup.
//! - `load_dotenv()` is called at startup to support `.env` configuration.
//! - Configuration precedence: CLI args > env vars > persisted preferences > defaults.
//! - Mouse capture is enabled by default unless `--no-mouse` or `KIOSK_NO_MOUSE` is set.

use anyhow::Result;
use clap::Parser;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures_util::StreamExt;
use kiosk_config::constants::{DEFAULT_CHANNEL_CAPACITY, LOG_FILE_NAME};
use kiosk_tui::action::{Action, RedactedAction};
use kiosk_tui::app::App;
use kiosk_tui::ui::ToastLevel;
use kiosk_tui::cli::Cli;
use kiosk_tui::metrics_exporter::MetricsExporter;
use kiosk_tui::runtime::config::{LoadedConfig, load_config, save_and_quit};
use kiosk_tui::runtime::terminal::{TerminalGuard, enter_terminal, restore_terminal};
use kiosk_tui::ux_telemetry::{METRIC_TUI_FRAME_RENDER_DURATION, UxTelemetryCollector};
use tokio::sync::mpsc::{channel, error::TrySendError};
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Create logs directory if it doesn't exist
    std::fs::create_dir_all(&cli.log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, LOG_FILE_NAME);
    let (non_blocking, _guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(non_blocking))
        .init();
    // Note: _guard must live for entire main() duration to ensure logs are flushed

    // Initialize metrics exporter if --metrics-bind is provided
    let mut startup_notices = Vec::new();
    let metrics_exporter = match cli.metrics_bind.as_deref() {
        Some(bind_addr) => match MetricsExporter::install(bind_addr) {
            Ok(exporter) => Some(exporter),
            Err(e) => {
                tracing::error!("Failed to start metrics exporter: {}", e);
                startup_notices.push(Action::Notify(
                    ToastLevel::Error,
                    format!("Metrics disabled: {e}"),
                ));
                None
            }
        },
        None => None,
    };
    let metrics_enabled = metrics_exporter.is_some();

    let LoadedConfig {
        config,
        mut manager,
    } = load_config(&cli)?;

    let mouse = config.mouse;
    let mut terminal = enter_terminal(mouse)?;
    // Restores the terminal on panic or early return
    let _terminal_guard = TerminalGuard::new(mouse);

    let (tx, mut rx) = channel::<Action>(DEFAULT_CHANNEL_CAPACITY);
    for notice in startup_notices {
        if let Err(e) = tx.try_send(notice) {
            tracing::warn!(error = %e, "Dropping startup notice");
        }
    }

    // Spawn input stream task with backpressure handling
    let tx_input = tx.clone();
    let input_task = tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            let action = match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => Action::Input(key),
                Event::Mouse(mouse) => Action::Mouse(mouse),
                Event::Resize(width, height) => Action::Resize(width, height),
                _ => continue,
            };

            if matches!(action, Action::Mouse(_)) {
                // Mouse events are droppable (especially mouse move floods)
                match tx_input.try_send(action) {
                    Ok(()) => {}
                    Err(TrySendError::Full(_)) => {
                        tracing::debug!("Input channel full, dropping mouse event");
                    }
                    Err(TrySendError::Closed(_)) => break,
                }
            } else if tx_input.send(action).await.is_err() {
                // Key and resize events are user intent and must not be lost
                break;
            }
        }
    });

    let mut app = App::new(&config);
    app.ux_telemetry = UxTelemetryCollector::new(metrics_enabled);

    let mut tick_interval = tokio::time::interval(config.tick_interval());

    // Main event loop
    loop {
        let render_start = std::time::Instant::now();
        terminal.draw(|f| app.render(f))?;
        if metrics_enabled {
            metrics::histogram!(METRIC_TUI_FRAME_RENDER_DURATION)
                .record(render_start.elapsed().as_secs_f64());
        }

        tokio::select! {
            Some(action) = rx.recv() => {
                tracing::info!("Handling action: {:?}", RedactedAction(&action));

                let action = match action {
                    Action::Input(key) => app.handle_input(key),
                    Action::Mouse(mouse) => app.handle_mouse(mouse),
                    other => Some(other),
                };
                let Some(action) = action else {
                    continue;
                };

                if matches!(action, Action::Quit) {
                    if let Err(e) = save_and_quit(&app, &mut manager) {
                        tracing::error!(error = %e, "Failed to save config");
                    }
                    break;
                }
                app.update(action);
            }
            _ = tick_interval.tick() => {
                app.update(Action::Tick);
            }
        }
    }

    input_task.abort();
    restore_terminal(&mut terminal, mouse)?;

    Ok(())
}
