//! Style builders over `kiosk_config::Theme`.
//!
//! Every widget goes through these helpers so a theme switch restyles the
//! header, fields, key caps and footer together.

use kiosk_config::Theme;
use ratatui::style::{Color, Modifier, Style};

use crate::ui::toast::ToastLevel;

/// Style helpers for the kiosk widgets.
pub trait ThemeExt {
    fn text(&self) -> Style;
    fn text_dim(&self) -> Style;
    fn info(&self) -> Style;
    /// Accent + bold, for block titles.
    fn title(&self) -> Style;
    fn border(&self) -> Style;
    /// Border of the field bound to the keyboard, and of the keyboard panel.
    fn border_active(&self) -> Style;
    /// Border of the focused field while the keyboard is elsewhere or hidden.
    fn field_focused(&self) -> Style;
    /// Style of an idle key cap.
    fn key_cap(&self) -> Style;
    /// Style of a latched modifier key (Shift or Caps engaged).
    fn key_latched(&self) -> Style;
    /// Cap holding key focus; overrides the idle or latched colors.
    fn key_focused(&self) -> Style;
    /// Color of a toast level badge.
    fn toast_level(&self, level: ToastLevel) -> Color;
}

impl ThemeExt for Theme {
    fn text(&self) -> Style {
        Style::default().fg(self.text)
    }

    fn text_dim(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    fn info(&self) -> Style {
        Style::default().fg(self.info)
    }

    fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    fn border_active(&self) -> Style {
        self.title()
    }

    fn field_focused(&self) -> Style {
        Style::default().fg(self.highlight_fg)
    }

    fn key_cap(&self) -> Style {
        Style::default().fg(self.key_fg).bg(self.key_bg)
    }

    fn key_latched(&self) -> Style {
        Style::default()
            .fg(self.key_latched)
            .bg(self.key_bg)
            .add_modifier(Modifier::BOLD)
    }

    fn key_focused(&self) -> Style {
        Style::default()
            .fg(self.highlight_fg)
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    fn toast_level(&self, level: ToastLevel) -> Color {
        match level {
            ToastLevel::Info => self.info,
            ToastLevel::Success => self.success,
            ToastLevel::Warning => self.warning,
            ToastLevel::Error => self.error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiosk_config::ColorTheme;

    #[test]
    fn test_active_border_is_bold_accent() {
        let theme = Theme::from_color_theme(ColorTheme::Default);
        let style = theme.border_active();
        assert_eq!(style.fg, Some(theme.accent));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_key_styles_share_background() {
        for color_theme in ColorTheme::ALL {
            let theme = Theme::from_color_theme(color_theme);
            assert_eq!(theme.key_cap().bg, theme.key_latched().bg);
            assert_ne!(theme.key_cap().fg, theme.key_latched().fg);
        }
    }

    #[test]
    fn test_focused_key_stands_out_from_caps() {
        for color_theme in ColorTheme::ALL {
            let theme = Theme::from_color_theme(color_theme);
            assert!(
                theme
                    .key_focused()
                    .add_modifier
                    .contains(Modifier::UNDERLINED)
            );
        }
    }

    #[test]
    fn test_warning_toast_uses_warning_color() {
        let theme = Theme::from_color_theme(ColorTheme::Dark);
        assert_eq!(theme.toast_level(ToastLevel::Warning), theme.warning);
    }
}
