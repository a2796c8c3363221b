//! Rendering logic for the kiosk app.
//!
//! Responsibilities:
//! - Render header, form fields, keyboard panel and footer
//!
//! Non-responsibilities:
//! - Does NOT handle input
//! - Does NOT mutate app state (except for `last_area`)

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, AppLayout, Screen};
use crate::input::footer_hints;
use crate::ui::form::FieldWidget;
use crate::ui::keyboard::KeyboardWidget;
use crate::ui::newest_active;
use crate::ui::theme::ThemeExt;
use crate::ui::toast::toast_line;

impl App {
    /// Render the application UI.
    pub fn render(&mut self, f: &mut Frame) {
        self.last_area = f.area();
        let layout = self.layout(f.area());

        self.render_header(f, layout.header);
        self.render_body(f, &layout);
        if let Some(panel) = layout.keyboard {
            f.render_widget(KeyboardWidget::new(&self.keyboard, &self.theme), panel);
        }
        self.render_footer(f, layout.footer);
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let mut spans = vec![
            Span::styled("Kiosk", theme.title()),
            Span::raw(" - "),
            Span::styled(self.screen.title(), theme.text()),
        ];
        if let Some(user) = &self.signed_in_as {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(user.clone(), theme.info()));
        }
        if self.screen == Screen::Announcement {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                format!("Posted: {}", self.posted.len()),
                theme.text_dim(),
            ));
        }

        let header = Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::ALL).border_style(theme.border()));
        f.render_widget(header, area);
    }

    fn render_body(&self, f: &mut Frame, layout: &AppLayout) {
        let form = self.form();
        let keyboard_visible = self.keyboard.is_visible();

        for (index, (field, rect)) in form.fields.iter().zip(&layout.fields).enumerate() {
            if rect.height == 0 {
                continue;
            }
            let widget = FieldWidget::new(field, &self.theme)
                .focused(form.focused() == index)
                .active(keyboard_visible && self.bound_field == Some(index))
                .mask_secrets(self.mask_passwords);
            f.render_widget(widget, *rect);
        }

        if self.screen == Screen::Announcement {
            let used = layout
                .fields
                .iter()
                .copied()
                .map(Rect::bottom)
                .max()
                .unwrap_or(layout.body.y);
            let remaining = Rect::new(
                layout.body.x,
                used,
                layout.body.width,
                layout.body.bottom().saturating_sub(used),
            );
            self.render_posted(f, remaining);
        }
    }

    fn render_posted(&self, f: &mut Frame, area: Rect) {
        if area.height < 3 || self.posted.is_empty() {
            return;
        }
        let rows = area.height.saturating_sub(2) as usize;
        let lines: Vec<Line> = self
            .posted
            .iter()
            .rev()
            .take(rows)
            .map(|a| Line::from(Span::styled(format!("• {}", a.title), self.theme.text())))
            .collect();
        let list = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.border())
                .title(Span::styled(" Posted ", self.theme.title())),
        );
        f.render_widget(list, area);
    }

    fn render_footer(&self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border());
        let inner = block.inner(area);

        let line = if let Some(toast) = newest_active(&self.toasts) {
            toast_line(toast, inner.width, &self.theme)
        } else if self.show_hints {
            let hints = footer_hints(self.input_context())
                .into_iter()
                .map(|(keys, description)| format!("{keys}:{description}"))
                .collect::<Vec<_>>()
                .join(" | ");
            Line::from(Span::styled(format!(" {hints}"), self.theme.text_dim()))
        } else {
            Line::default()
        };

        f.render_widget(Paragraph::new(line).block(block), area);
    }
}
