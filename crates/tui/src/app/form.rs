//! Demo forms hosting the keyboard.
//!
//! Responsibilities:
//! - Own the text of every field (the keyboard never stores it).
//! - Track which field has focus.
//! - Bind a field to the keyboard through [`BoundField`].
//!
//! Does NOT handle:
//! - Authentication or storage of submitted data.
//! - Rendering (see `ui::form`).

use kiosk_keyboard::KeyboardSink;

/// Which form is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Announcement,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Login => "Sign in",
            Self::Announcement => "Post announcement",
        }
    }

    /// Label used in metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Announcement => "announcement",
        }
    }
}

/// One text field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: &'static str,
    pub value: String,
    /// Rendered as bullets when password masking is on.
    pub secret: bool,
    /// Given extra rows; the keyboard's Enter key makes line breaks.
    pub multiline: bool,
}

impl Field {
    pub fn text(label: &'static str) -> Self {
        Self {
            label,
            value: String::new(),
            secret: false,
            multiline: false,
        }
    }

    pub fn secret(label: &'static str) -> Self {
        Self {
            secret: true,
            ..Self::text(label)
        }
    }

    pub fn multiline(label: &'static str) -> Self {
        Self {
            multiline: true,
            ..Self::text(label)
        }
    }

    /// Text as it should appear on screen.
    pub fn display_value(&self, mask_secrets: bool) -> String {
        if self.secret && mask_secrets {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}

/// A screen's fields plus field focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    pub fields: Vec<Field>,
    focused: usize,
}

impl Form {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields, focused: 0 }
    }

    pub fn login() -> Self {
        Self::new(vec![Field::text("Username"), Field::secret("Password")])
    }

    pub fn announcement() -> Self {
        Self::new(vec![Field::text("Title"), Field::multiline("Details")])
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn focus(&mut self, index: usize) -> bool {
        if index < self.fields.len() {
            self.focused = index;
            true
        } else {
            false
        }
    }

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + 1) % self.fields.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + self.fields.len() - 1) % self.fields.len();
        }
    }

    pub fn field(&self, index: usize) -> Option<&Field> {
        self.fields.get(index)
    }

    pub fn field_mut(&mut self, index: usize) -> Option<&mut Field> {
        self.fields.get_mut(index)
    }

    pub fn clear(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
        self.focused = 0;
    }
}

/// A field bound to the keyboard for one press.
///
/// The keyboard hands back whole-string updates; the field adopts them.
/// A close request is recorded so the app can drop the binding.
pub struct BoundField<'a> {
    field: &'a mut Field,
    close_requested: bool,
}

impl<'a> BoundField<'a> {
    pub fn new(field: &'a mut Field) -> Self {
        Self {
            field,
            close_requested: false,
        }
    }

    pub fn close_requested(&self) -> bool {
        self.close_requested
    }
}

impl KeyboardSink for BoundField<'_> {
    fn current_value(&self) -> &str {
        &self.field.value
    }

    fn on_change(&mut self, value: String) {
        self.field.value = value;
    }

    fn on_close(&mut self) {
        self.close_requested = true;
    }
}

/// A posted announcement (kept in memory only).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub title: String,
    pub details: String,
}
