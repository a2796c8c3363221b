//! Toast notifications for transient feedback messages.
//!
//! Toasts are queued on the app and the newest live one is shown in the
//! footer in place of the key hints. Each toast has a severity level and an
//! automatic expiration time (TTL); expired toasts are pruned on every tick.

use std::time::{Duration, Instant};

use kiosk_config::Theme;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::theme::ThemeExt;

/// Severity level for toast notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    /// Returns the display label for this level.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Success => "OK",
            Self::Warning => "WARN",
            Self::Error => "ERR",
        }
    }

    /// Returns the TTL (time-to-live) for this level.
    pub fn ttl(&self) -> Duration {
        match self {
            Self::Info | Self::Success | Self::Warning => Duration::from_secs(5),
            Self::Error => Duration::from_secs(10),
        }
    }
}

/// A single toast notification.
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    pub created_at: Instant,
    pub ttl: Duration,
}

impl Toast {
    /// Creates a new toast with the given message and level.
    pub fn new(message: String, level: ToastLevel) -> Self {
        Self {
            message,
            level,
            created_at: Instant::now(),
            ttl: level.ttl(),
        }
    }

    /// Returns true if this toast has expired (TTL elapsed).
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.ttl
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Error)
    }
}

/// Maximum number of queued toasts; older ones are dropped first.
pub const MAX_TOASTS: usize = 5;

/// Push a toast, keeping at most [`MAX_TOASTS`].
pub fn push_toast(toasts: &mut Vec<Toast>, toast: Toast) {
    toasts.push(toast);
    if toasts.len() > MAX_TOASTS {
        let excess = toasts.len() - MAX_TOASTS;
        toasts.drain(..excess);
    }
}

/// The newest toast that has not expired.
pub fn newest_active(toasts: &[Toast]) -> Option<&Toast> {
    toasts.iter().rev().find(|t| !t.is_expired())
}

/// Build the footer line for a toast, truncated to `width` columns.
pub fn toast_line(toast: &Toast, width: u16, theme: &Theme) -> Line<'static> {
    let color = theme.toast_level(toast.level);
    let label = format!(" {} ", toast.level.label());

    let max_chars = (width as usize).saturating_sub(label.chars().count());
    let message: String = if toast.message.chars().count() > max_chars {
        let mut truncated: String = toast
            .message
            .chars()
            .take(max_chars.saturating_sub(3))
            .collect();
        truncated.push_str("...");
        truncated
    } else {
        toast.message.clone()
    };

    Line::from(vec![
        Span::styled(label, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::styled(message, theme.text()),
    ])
}
