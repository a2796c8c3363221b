//! Terminal setup, teardown and panic-safe restoration.
//!
//! Responsibilities:
//! - Enter raw mode and the alternate screen, with optional mouse capture.
//! - Restore the terminal on normal exit and, through [`TerminalGuard`], on
//!   panics and early returns.
//!
//! Invariants / Assumptions:
//! - The guard is created right after setup succeeds and lives for the whole
//!   session.
//! - Restoration is idempotent, so the explicit restore on exit and the
//!   guard's drop may both run.
//! - Drop implementation must not panic.

use std::io::{self, Stdout, Write};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

pub type KioskTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Switch the terminal into kiosk mode.
///
/// Mouse capture is what turns taps on a touchscreen into click events.
pub fn enter_terminal(mouse: bool) -> io::Result<KioskTerminal> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if mouse {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    Terminal::new(CrosstermBackend::new(stdout))
}

fn leave<W: Write>(out: &mut W, mouse: bool) -> io::Result<()> {
    disable_raw_mode()?;
    if mouse {
        execute!(out, LeaveAlternateScreen, DisableMouseCapture)
    } else {
        execute!(out, LeaveAlternateScreen)
    }
}

/// Restore the terminal on normal exit, reporting errors.
pub fn restore_terminal(terminal: &mut KioskTerminal, mouse: bool) -> io::Result<()> {
    leave(terminal.backend_mut(), mouse)?;
    terminal.show_cursor()
}

/// Guard that restores the terminal on drop.
pub struct TerminalGuard {
    mouse: bool,
}

impl TerminalGuard {
    /// `mouse` must match the value passed to [`enter_terminal`].
    pub fn new(mouse: bool) -> Self {
        Self { mouse }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Errors are ignored: this runs during unwinding too.
        let _ = leave(&mut io::stdout(), self.mouse);
    }
}
