//! Regression tests for corrupt config backup behavior.

use std::io::Write;

use kiosk_config::{ColorTheme, ConfigManager, PersistedState};

/// Config file is corrupt AND the parent directory is read-only, so the
/// backup rename fails. The manager must still come up with defaults and
/// leave the original file in place.
#[cfg(unix)]
#[test]
fn test_corrupt_config_backup_failure_continues_with_defaults() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("config.json");

    let mut file = std::fs::File::create(&config_path).unwrap();
    file.write_all(b"{ invalid json }").unwrap();
    drop(file);

    std::fs::set_permissions(temp_dir.path(), std::fs::Permissions::from_mode(0o555)).unwrap();

    // Privileged users ignore directory permissions; nothing to exercise then.
    if std::fs::write(temp_dir.path().join("probe"), b"").is_ok() {
        std::fs::set_permissions(temp_dir.path(), std::fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let result = ConfigManager::new_with_path(config_path.clone());

    std::fs::set_permissions(temp_dir.path(), std::fs::Permissions::from_mode(0o755)).unwrap();

    let manager = result.unwrap();
    assert_eq!(manager.load(), PersistedState::default());
    assert!(config_path.exists());
}

#[test]
fn test_corrupt_config_is_replaced_on_next_save() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("config.json");
    std::fs::write(&config_path, "[1, 2,").unwrap();

    let mut manager = ConfigManager::new_with_path(config_path.clone()).unwrap();
    let state = PersistedState {
        selected_theme: ColorTheme::HighContrast,
        show_hints: true,
    };
    manager.save(&state).unwrap();

    let reloaded = ConfigManager::new_with_path(config_path).unwrap();
    assert_eq!(reloaded.load(), state);
}
