//! Integration tests for keyboard flows through the app.
//!
//! These tests drive the app with key events exactly as the main loop does
//! (`handle_input` then `update`) and check the form values and keyboard
//! lifecycle.

mod helpers;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use helpers::*;
use kiosk_config::ColorTheme;
use kiosk_keyboard::Key;
use kiosk_tui::action::FieldMove;
use kiosk_tui::{Action, Screen, ToastLevel};

#[test]
fn test_typing_while_hidden_opens_keyboard_on_focused_field() {
    let mut app = test_app();
    assert!(!app.keyboard.is_visible());

    type_text(&mut app, "hi");

    assert!(app.keyboard.is_visible());
    assert_eq!(app.bound_field, Some(0));
    assert_eq!(app.login.fields[0].value, "hi");
    assert_eq!(app.keyboard.listeners().len(), 1);
}

#[test]
fn test_escape_closes_keyboard_and_unregisters_listener() {
    let mut app = test_app();
    type_text(&mut app, "a");

    dispatch(&mut app, code(KeyCode::Esc));

    assert!(!app.keyboard.is_visible());
    assert!(app.bound_field.is_none());
    assert!(app.keyboard.listeners().is_empty());
    assert_eq!(app.login.fields[0].value, "a");
}

#[test]
fn test_escape_while_hidden_does_nothing() {
    let mut app = test_app();
    assert_eq!(app.handle_input(code(KeyCode::Esc)), None);
    app.update(Action::Escape);
    assert!(!app.keyboard.is_visible());
}

#[test]
fn test_full_sign_in_flow() {
    let mut app = test_app();
    type_text(&mut app, "ada");
    dispatch(&mut app, code(KeyCode::Esc));
    dispatch(&mut app, code(KeyCode::Tab));
    assert_eq!(app.login.focused(), 1);
    type_text(&mut app, "pw");
    assert_eq!(app.bound_field, Some(1));

    dispatch(&mut app, code(KeyCode::Enter));

    assert_eq!(app.screen, Screen::Announcement);
    assert_eq!(app.signed_in_as.as_deref(), Some("ada"));
    assert!(!app.keyboard.is_visible());
    assert!(app.bound_field.is_none());
    assert!(app.login.fields.iter().all(|f| f.value.is_empty()));
    assert_eq!(app.toasts.last().map(|t| t.level), Some(ToastLevel::Success));
}

#[test]
fn test_enter_on_login_never_reaches_the_field() {
    let mut app = test_app();
    type_text(&mut app, "ada");

    dispatch(&mut app, code(KeyCode::Enter));

    assert_eq!(app.screen, Screen::Login);
    assert_eq!(app.login.fields[0].value, "ada");
    assert_eq!(app.toasts.last().map(|t| t.level), Some(ToastLevel::Warning));
}

#[test]
fn test_enter_in_details_inserts_newline() {
    let mut app = signed_in_app();
    dispatch(&mut app, code(KeyCode::Tab));
    type_text(&mut app, "a");
    dispatch(&mut app, code(KeyCode::Enter));
    type_text(&mut app, "b");

    assert_eq!(app.announcement.fields[1].value, "a\nb");
}

#[test]
fn test_enter_on_hidden_announcement_moves_field() {
    let mut app = signed_in_app();
    assert_eq!(app.announcement.focused(), 0);
    dispatch(&mut app, code(KeyCode::Enter));
    assert_eq!(app.announcement.focused(), 1);
    assert!(!app.keyboard.is_visible());
}

#[test]
fn test_post_announcement_requires_title() {
    let mut app = signed_in_app();
    dispatch(&mut app, ctrl_key('s'));
    assert!(app.posted.is_empty());
    assert_eq!(app.toasts.last().map(|t| t.level), Some(ToastLevel::Warning));

    type_text(&mut app, "Fire drill");
    dispatch(&mut app, ctrl_key('s'));

    assert_eq!(app.posted.len(), 1);
    assert_eq!(app.posted[0].title, "Fire drill");
    assert!(app.announcement.fields[0].value.is_empty());
    assert!(!app.keyboard.is_visible());
    assert!(app.keyboard.listeners().is_empty());
}

#[test]
fn test_focus_navigation_and_activation() {
    let mut app = test_app();
    dispatch(&mut app, code(KeyCode::F(2)));
    assert_eq!(app.keyboard.focused_key(), Some(Key::Char('1')));

    let activate = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::CONTROL);
    dispatch(&mut app, activate);
    dispatch(&mut app, code(KeyCode::Right));
    dispatch(&mut app, activate);
    dispatch(&mut app, code(KeyCode::Down));
    assert_eq!(app.keyboard.focused_key(), Some(Key::Char('w')));
    dispatch(&mut app, activate);

    assert_eq!(app.login.fields[0].value, "12w");
}

#[test]
fn test_reopening_on_another_field_resets_modifiers() {
    let mut app = test_app();
    dispatch(&mut app, code(KeyCode::CapsLock));
    assert!(app.keyboard.modifiers().is_some_and(|m| m.caps_lock_active()));

    app.update(Action::OpenKeyboardOn(1));

    assert_eq!(app.bound_field, Some(1));
    assert_eq!(app.login.focused(), 1);
    assert!(app.keyboard.modifiers().is_some_and(|m| !m.is_shifted()));
    assert_eq!(app.keyboard.listeners().len(), 1);
}

#[test]
fn test_reopening_on_same_field_keeps_session() {
    let mut app = test_app();
    dispatch(&mut app, code(KeyCode::CapsLock));

    app.update(Action::OpenKeyboardOn(0));

    assert!(app.keyboard.modifiers().is_some_and(|m| m.caps_lock_active()));
}

#[test]
fn test_f2_remounts_visible_keyboard() {
    let mut app = test_app();
    dispatch(&mut app, code(KeyCode::CapsLock));
    dispatch(&mut app, code(KeyCode::F(2)));
    assert!(app.keyboard.is_visible());
    assert!(app.keyboard.modifiers().is_some_and(|m| !m.caps_lock_active()));
}

#[test]
fn test_caps_lock_shifts_letters_until_released() {
    let mut app = test_app();
    dispatch(&mut app, code(KeyCode::CapsLock));
    type_text(&mut app, "ab");
    dispatch(&mut app, code(KeyCode::CapsLock));
    type_text(&mut app, "c");
    assert_eq!(app.login.fields[0].value, "ABc");
}

#[test]
fn test_characters_off_the_layout_are_ignored() {
    let mut app = test_app();
    type_text(&mut app, "a,b");
    assert_eq!(app.login.fields[0].value, "ab");
}

#[test]
fn test_off_layout_key_does_not_open_hidden_keyboard() {
    let mut app = test_app();
    for c in [',', '-', '?'] {
        dispatch(&mut app, key(c));
    }

    assert!(!app.keyboard.is_visible());
    assert!(app.bound_field.is_none());
    assert!(app.keyboard.listeners().is_empty());
    assert_eq!(app.login.fields[0].value, "");
}

#[test]
fn test_shifted_only_glyph_opens_keyboard() {
    let mut app = test_app();
    dispatch(&mut app, key('!'));
    assert!(app.keyboard.is_visible());
    assert_eq!(app.login.fields[0].value, "!");
}

#[test]
fn test_backspace_on_empty_field_keeps_it_empty() {
    let mut app = test_app();
    dispatch(&mut app, code(KeyCode::Backspace));
    assert!(app.keyboard.is_visible());
    assert_eq!(app.login.fields[0].value, "");
}

#[test]
fn test_sign_out_hides_keyboard_and_clears_forms() {
    let mut app = signed_in_app();
    type_text(&mut app, "draft");
    assert!(app.keyboard.is_visible());

    dispatch(&mut app, ctrl_key('l'));

    assert_eq!(app.screen, Screen::Login);
    assert!(!app.keyboard.is_visible());
    assert!(app.keyboard.listeners().is_empty());
    assert!(app.announcement.fields[0].value.is_empty());
    assert!(app.signed_in_as.is_none());
}

#[test]
fn test_field_navigation_while_hidden() {
    let mut app = signed_in_app();
    app.update(Action::MoveField(FieldMove::Prev));
    assert_eq!(app.announcement.focused(), 1);
    dispatch(&mut app, code(KeyCode::Down));
    assert_eq!(app.announcement.focused(), 0);
}

#[test]
fn test_theme_cycle_and_hints_toggle_are_persisted() {
    let mut app = test_app();
    dispatch(&mut app, ctrl_key('t'));
    dispatch(&mut app, code(KeyCode::F(1)));

    let state = app.persisted_state();
    assert_eq!(state.selected_theme, ColorTheme::Light);
    assert!(!state.show_hints);
}

#[test]
fn test_quit_shortcuts() {
    let app = test_app();
    assert_eq!(app.handle_input(ctrl_key('c')), Some(Action::Quit));
    assert_eq!(app.handle_input(ctrl_key('q')), Some(Action::Quit));
}

#[test]
fn test_tick_prunes_expired_toasts() {
    let mut app = test_app();
    app.update(Action::Notify(ToastLevel::Info, "hello".to_string()));
    app.toasts[0].ttl = std::time::Duration::ZERO;
    app.update(Action::Tick);
    assert!(app.toasts.is_empty());
}

#[test]
fn test_resize_updates_last_area() {
    let mut app = test_app();
    app.update(Action::Resize(120, 40));
    assert_eq!(app.last_area.width, 120);
    assert_eq!(app.last_area.height, 40);
}
