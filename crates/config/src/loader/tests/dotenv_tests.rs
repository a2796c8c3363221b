//! Tests for dotenv loading behavior.
//!
//! Invariants / Assumptions:
//! - Tests mutate the process cwd and are therefore `#[serial]`.
//! - Error messages must never contain values from `.env` files.

use std::fs;
use std::path::PathBuf;

use serial_test::serial;
use tempfile::TempDir;

use crate::constants::ENV_DOTENV_DISABLED;
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;

const PROBE: &str = "KIOSK_DOTENV_PROBE";

/// RAII guard for temporarily changing the current working directory.
struct CwdGuard {
    original_dir: PathBuf,
}

impl CwdGuard {
    fn new(temp_dir: &TempDir) -> Self {
        let original_dir = std::env::current_dir().expect("Failed to get current directory");
        std::env::set_current_dir(temp_dir.path()).expect("Failed to set current directory");
        Self { original_dir }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original_dir);
    }
}

fn in_dir_with_env<F: FnOnce(&TempDir)>(dotenv_disabled: Option<&'static str>, f: F) {
    let temp_dir = TempDir::new().unwrap();
    let _cwd = CwdGuard::new(&temp_dir);
    temp_env::with_vars(
        [(ENV_DOTENV_DISABLED, dotenv_disabled), (PROBE, None)],
        || f(&temp_dir),
    );
}

#[test]
#[serial]
fn test_missing_dotenv_is_ok() {
    in_dir_with_env(None, |_| {
        assert!(ConfigLoader::new().load_dotenv().is_ok());
    });
}

#[test]
#[serial]
fn test_valid_dotenv_populates_environment() {
    in_dir_with_env(None, |dir| {
        fs::write(dir.path().join(".env"), format!("{PROBE}=loaded\n")).unwrap();
        assert!(ConfigLoader::new().load_dotenv().is_ok());
        assert_eq!(std::env::var(PROBE).as_deref(), Ok("loaded"));
    });
}

#[test]
#[serial]
fn test_invalid_dotenv_returns_parse_error_without_contents() {
    in_dir_with_env(None, |dir| {
        let secret = "pin_code_98765";
        fs::write(
            dir.path().join(".env"),
            format!("{PROBE}={secret}\nINVALID_LINE_WITHOUT_EQUALS"),
        )
        .unwrap();

        match ConfigLoader::new().load_dotenv() {
            Err(err @ ConfigError::DotenvParse { .. }) => {
                let message = err.to_string();
                assert!(!message.contains(secret), "{message}");
                assert!(!message.contains("INVALID_LINE"), "{message}");
                assert!(message.contains("DOTENV_DISABLED"), "{message}");
            }
            Err(other) => panic!("expected DotenvParse, got {other}"),
            Ok(_) => panic!("expected DotenvParse, got Ok"),
        }
    });
}

#[test]
#[serial]
fn test_dotenv_disabled_skips_invalid_file() {
    for flag in ["1", "true"] {
        in_dir_with_env(Some(flag), |dir| {
            fs::write(dir.path().join(".env"), "INVALID_LINE_WITHOUT_EQUALS").unwrap();
            assert!(ConfigLoader::new().load_dotenv().is_ok(), "{flag}");
        });
    }
}
