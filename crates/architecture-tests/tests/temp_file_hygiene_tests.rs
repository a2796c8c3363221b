//! Purpose: Enforce deterministic temp file cleanup patterns in tests.
//!
//! Config persistence tests write real files; those must live in
//! `tempfile` RAII directories so a failing assertion never leaves state
//! behind for the next run.
//!
//! Non-scope: This test does not verify runtime behavior; it only checks
//! source code patterns.
//!
//! Invariants:
//! - Test code never uses `std::env::temp_dir()` directly.
//! - Test code never hardcodes `/tmp` paths.
//! - Temp directories are bound to a named variable, not dropped at once.

mod common;

use std::fs;
use std::path::PathBuf;

/// Files under `crates/` that contain tests, with their contents.
fn test_sources() -> Vec<(String, String)> {
    let root = common::workspace_root();
    common::rust_files(&root.join("crates"))
        .into_iter()
        .filter_map(|path: PathBuf| {
            let content = fs::read_to_string(&path).ok()?;
            let has_tests = content.contains("#[test]") || content.contains("#[tokio::test]");
            has_tests.then(|| (common::display_path(&root, &path), content))
        })
        .collect()
}

#[test]
fn test_no_manual_temp_dir_usage() {
    let mut violations = Vec::new();

    for (path, content) in test_sources() {
        if content.contains("std::env::temp_dir()") {
            violations.push(format!(
                "{path}: uses std::env::temp_dir() - prefer tempfile::tempdir() for RAII cleanup"
            ));
        }
        if content.contains("\"/tmp") || content.contains("'/tmp") {
            violations.push(format!(
                "{path}: contains hardcoded /tmp path - prefer tempfile crate"
            ));
        }
        if content.contains("std::fs::remove_file") && !content.contains("tempfile") {
            violations.push(format!(
                "{path}: uses std::fs::remove_file without tempfile - prefer RAII cleanup"
            ));
        }
    }

    assert!(
        violations.is_empty(),
        "Found manual temp file patterns (not panic-safe):\n{}",
        violations.join("\n")
    );
}

#[test]
fn test_tempfile_bindings_retained() {
    let mut violations = Vec::new();

    for (path, content) in test_sources() {
        for (i, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.starts_with("//") {
                continue;
            }
            if trimmed.starts_with("let _ = tempfile::")
                || trimmed.starts_with("let _ = TempDir::new()")
                || trimmed.starts_with("let _ = NamedTempFile")
            {
                violations.push(format!(
                    "{path}:{}: tempfile instance bound to `_` - use a named variable",
                    i + 1
                ));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "Found tempfile instances not properly retained:\n{}",
        violations.join("\n")
    );
}

#[test]
fn test_walk_finds_config_tests() {
    let sources = test_sources();
    assert!(
        sources
            .iter()
            .any(|(path, _)| path.contains("config_loading_tests.rs")),
        "expected the TUI config loading tests to be scanned"
    );
}
