//! Key intents delivered to the keyboard.

use std::fmt;

/// A key-press intent, from a rendered key or a physical keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A glyph key. Resolved through the layout against the modifier state.
    Char(char),
    Shift,
    Caps,
    Space,
    Backspace,
    Enter,
    /// The explicit close control (✕).
    Close,
}

/// Non-glyph keys in the order they are rendered on the bottom row.
pub const SPECIAL_KEYS: [Key; 6] = [
    Key::Shift,
    Key::Caps,
    Key::Space,
    Key::Backspace,
    Key::Enter,
    Key::Close,
];

impl Key {
    /// Parse a key label.
    ///
    /// Single characters become [`Key::Char`]; named keys are matched case
    /// insensitively. Returns `None` for labels that are not keys, which
    /// callers treat as an ignored press.
    pub fn parse(label: &str) -> Option<Self> {
        let mut chars = label.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            return match ch {
                ' ' => Some(Self::Space),
                '\n' => Some(Self::Enter),
                '✕' => Some(Self::Close),
                '⌫' => Some(Self::Backspace),
                c if c.is_control() => None,
                c => Some(Self::Char(c)),
            };
        }
        match label.to_ascii_lowercase().as_str() {
            "shift" => Some(Self::Shift),
            "caps" | "capslock" | "caps lock" => Some(Self::Caps),
            "space" => Some(Self::Space),
            "backspace" | "bksp" => Some(Self::Backspace),
            "enter" | "return" => Some(Self::Enter),
            "close" | "esc" | "escape" => Some(Self::Close),
            _ => None,
        }
    }

    /// Label drawn on the key cap. Glyph keys are labelled by the caller
    /// from the active grid.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Char(_) => "",
            Self::Shift => "Shift",
            Self::Caps => "Caps",
            Self::Space => "Space",
            Self::Backspace => "⌫",
            Self::Enter => "Enter",
            Self::Close => "✕",
        }
    }

    /// Low-cardinality name used for logging and metrics. Never includes
    /// the glyph itself.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Char(_) => "char",
            Self::Shift => "shift",
            Self::Caps => "caps",
            Self::Space => "space",
            Self::Backspace => "backspace",
            Self::Enter => "enter",
            Self::Close => "close",
        }
    }

    /// Whether pressing this key only changes modifier state.
    pub fn is_modifier(&self) -> bool {
        matches!(self, Self::Shift | Self::Caps)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "{c}"),
            other => f.write_str(other.label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_glyph() {
        assert_eq!(Key::parse("q"), Some(Key::Char('q')));
        assert_eq!(Key::parse("@"), Some(Key::Char('@')));
    }

    #[test]
    fn test_parse_named_keys() {
        assert_eq!(Key::parse("Shift"), Some(Key::Shift));
        assert_eq!(Key::parse("CAPS"), Some(Key::Caps));
        assert_eq!(Key::parse("Backspace"), Some(Key::Backspace));
        assert_eq!(Key::parse("Enter"), Some(Key::Enter));
        assert_eq!(Key::parse("Space"), Some(Key::Space));
        assert_eq!(Key::parse("Escape"), Some(Key::Close));
        assert_eq!(Key::parse("✕"), Some(Key::Close));
    }

    #[test]
    fn test_parse_whitespace_glyphs() {
        assert_eq!(Key::parse(" "), Some(Key::Space));
        assert_eq!(Key::parse("\n"), Some(Key::Enter));
    }

    #[test]
    fn test_parse_unknown_labels() {
        assert_eq!(Key::parse(""), None);
        assert_eq!(Key::parse("Hyper"), None);
        assert_eq!(Key::parse("\t"), None);
    }

    #[test]
    fn test_kind_never_leaks_glyph() {
        assert_eq!(Key::Char('x').kind(), "char");
        assert_eq!(Key::Close.kind(), "close");
    }

    #[test]
    fn test_modifier_keys() {
        assert!(Key::Shift.is_modifier());
        assert!(Key::Caps.is_modifier());
        assert!(!Key::Space.is_modifier());
    }

    #[test]
    fn test_display() {
        assert_eq!(Key::Char('a').to_string(), "a");
        assert_eq!(Key::Enter.to_string(), "Enter");
    }
}
