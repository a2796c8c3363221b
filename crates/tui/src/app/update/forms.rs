//! Form focus, submission and screen switching.

use crate::action::FieldMove;
use crate::app::{Announcement, App, Screen};
use crate::ui::{Toast, push_toast};

impl App {
    pub(crate) fn move_field(&mut self, direction: FieldMove) {
        let form = self.form_mut();
        match direction {
            FieldMove::Next => form.focus_next(),
            FieldMove::Prev => form.focus_prev(),
        }
    }

    pub(crate) fn submit_login(&mut self) {
        let username = self
            .login
            .field(0)
            .map(|f| f.value.trim().to_string())
            .unwrap_or_default();
        let has_password = self.login.field(1).is_some_and(|f| !f.value.is_empty());

        let accepted = !username.is_empty() && has_password;
        self.ux_telemetry
            .record_form_submit(Screen::Login.as_str(), accepted);

        if !accepted {
            push_toast(
                &mut self.toasts,
                Toast::warning("Enter a username and password"),
            );
            return;
        }

        tracing::info!("sign-in accepted");
        self.login.clear();
        push_toast(
            &mut self.toasts,
            Toast::success(format!("Signed in as {username}")),
        );
        self.signed_in_as = Some(username);
        self.switch_screen(Screen::Announcement);
    }

    pub(crate) fn post_announcement(&mut self) {
        let title = self
            .announcement
            .field(0)
            .map(|f| f.value.trim().to_string())
            .unwrap_or_default();

        let accepted = !title.is_empty();
        self.ux_telemetry
            .record_form_submit(Screen::Announcement.as_str(), accepted);

        if !accepted {
            push_toast(&mut self.toasts, Toast::warning("Title is required"));
            return;
        }

        let details = self
            .announcement
            .field(1)
            .map(|f| f.value.clone())
            .unwrap_or_default();
        self.posted.push(Announcement { title, details });
        self.hide_keyboard();
        self.announcement.clear();
        tracing::info!(posted = self.posted.len(), "announcement posted");
        push_toast(&mut self.toasts, Toast::success("Announcement posted"));
    }

    pub(crate) fn sign_out(&mut self) {
        self.switch_screen(Screen::Login);
        self.login.clear();
        self.announcement.clear();
        self.signed_in_as = None;
        push_toast(&mut self.toasts, Toast::info("Signed out"));
    }

    /// Change screen; a visible keyboard is hidden without calling its
    /// close callback.
    pub(crate) fn switch_screen(&mut self, screen: Screen) {
        if self.screen == screen {
            return;
        }
        self.hide_keyboard();
        self.screen = screen;
    }
}
