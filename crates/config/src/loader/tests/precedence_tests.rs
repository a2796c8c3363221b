//! Precedence: flags > environment > persisted state > defaults.

use serial_test::serial;

use super::cleared_env;
use crate::constants::{ENV_MASK_PASSWORDS, ENV_NO_MOUSE, ENV_THEME, ENV_TICK_MS};
use crate::loader::builder::ConfigLoader;
use crate::persistence::PersistedState;
use crate::types::{ColorTheme, KioskConfig};

fn with_env<F: FnOnce()>(vars: &[(&'static str, Option<&'static str>)], f: F) {
    let mut all = cleared_env();
    for (key, value) in vars {
        all.retain(|(k, _)| k != key);
        all.push((*key, *value));
    }
    temp_env::with_vars(all, f);
}

#[test]
#[serial]
fn test_defaults_when_nothing_is_set() {
    with_env(&[], || {
        let config = ConfigLoader::new().from_env().unwrap().build().unwrap();
        assert_eq!(config, KioskConfig::default());
    });
}

#[test]
#[serial]
fn test_persisted_values_apply() {
    with_env(&[], || {
        let state = PersistedState {
            selected_theme: ColorTheme::Dark,
            show_hints: false,
        };
        let config = ConfigLoader::new()
            .from_persisted(&state)
            .from_env()
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.theme, ColorTheme::Dark);
        assert!(!config.show_hints);
    });
}

#[test]
#[serial]
fn test_env_beats_persisted() {
    with_env(&[(ENV_THEME, Some("high_contrast"))], || {
        let state = PersistedState {
            selected_theme: ColorTheme::Dark,
            ..PersistedState::default()
        };
        let config = ConfigLoader::new()
            .from_persisted(&state)
            .from_env()
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.theme, ColorTheme::HighContrast);
    });
}

#[test]
#[serial]
fn test_flags_beat_env_regardless_of_order() {
    with_env(
        &[(ENV_THEME, Some("light")), (ENV_TICK_MS, Some("100"))],
        || {
            let config = ConfigLoader::new()
                .with_theme(ColorTheme::Monochrome)
                .with_tick_ms(500)
                .from_env()
                .unwrap()
                .build()
                .unwrap();
            assert_eq!(config.theme, ColorTheme::Monochrome);
            assert_eq!(config.tick_ms, 500);
        },
    );
}

#[test]
#[serial]
fn test_no_mouse_env_disables_mouse() {
    with_env(&[(ENV_NO_MOUSE, Some("1"))], || {
        let config = ConfigLoader::new().from_env().unwrap().build().unwrap();
        assert!(!config.mouse);
    });
}

#[test]
#[serial]
fn test_mouse_flag_overrides_env() {
    with_env(&[(ENV_NO_MOUSE, Some("true"))], || {
        let config = ConfigLoader::new()
            .from_env()
            .unwrap()
            .with_mouse(true)
            .build()
            .unwrap();
        assert!(config.mouse);
    });
}

#[test]
#[serial]
fn test_mask_passwords_can_be_disabled() {
    with_env(&[(ENV_MASK_PASSWORDS, Some("false"))], || {
        let config = ConfigLoader::new().from_env().unwrap().build().unwrap();
        assert!(!config.mask_passwords);
    });
}
