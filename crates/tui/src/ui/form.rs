//! Form field widget.
//!
//! Responsibilities:
//! - Draw one field with its label, value and focus state.
//! - Keep the end of the value (where typing happens) in view.
//!
//! Does NOT handle:
//! - Editing (see `kiosk_keyboard`).
//! - Field placement (see `app::layout`).

use kiosk_config::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::app::Field;
use crate::ui::theme::ThemeExt;

/// Caret drawn after the value of the field bound to the keyboard.
pub const CARET: char = '▏';

/// Last `width` characters of `text`.
fn tail(text: &str, width: usize) -> String {
    let count = text.chars().count();
    text.chars().skip(count.saturating_sub(width)).collect()
}

/// Lines of `value` that fit `width` x `height`, keeping the end in view.
pub fn visible_lines(value: &str, width: u16, height: u16) -> Vec<String> {
    let lines: Vec<&str> = value.split('\n').collect();
    let skip = lines.len().saturating_sub(height as usize);
    lines
        .into_iter()
        .skip(skip)
        .map(|line| tail(line, width as usize))
        .collect()
}

pub struct FieldWidget<'a> {
    field: &'a Field,
    theme: &'a Theme,
    focused: bool,
    active: bool,
    mask_secrets: bool,
}

impl<'a> FieldWidget<'a> {
    pub fn new(field: &'a Field, theme: &'a Theme) -> Self {
        Self {
            field,
            theme,
            focused: false,
            active: false,
            mask_secrets: true,
        }
    }

    /// Field has form focus.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Field is bound to the visible keyboard.
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn mask_secrets(mut self, mask: bool) -> Self {
        self.mask_secrets = mask;
        self
    }

    fn border_style(&self) -> Style {
        if self.active {
            self.theme.border_active()
        } else if self.focused {
            self.theme.field_focused()
        } else {
            self.theme.border()
        }
    }
}

impl Widget for FieldWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let marker = if self.focused { "> " } else { "" };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.border_style())
            .title(Span::styled(
                format!(" {marker}{} ", self.field.label),
                self.theme.title(),
            ));
        let inner = block.inner(area);

        let mut value = self.field.display_value(self.mask_secrets);
        if self.active {
            value.push(CARET);
        }

        let lines: Vec<Line> = if value.is_empty() {
            vec![Line::from(Span::styled("Tap to type", self.theme.text_dim()))]
        } else {
            visible_lines(&value, inner.width, inner.height.max(1))
                .into_iter()
                .map(|line| Line::from(Span::styled(line, self.theme.text())))
                .collect()
        };

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
