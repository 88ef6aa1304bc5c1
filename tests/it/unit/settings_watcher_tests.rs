//! Unit tests for settings_watcher module.

use circuitboard::settings_watcher::{SettingsWatcher, default_settings_path};
use std::fs;
use std::io::Write;
use tempfile::tempdir;

#[test]
fn test_watcher_creation() {
    let dir = tempdir().unwrap();
    let settings_path = dir.path().join("settings.json");
    fs::write(&settings_path, "{}").unwrap();

    let watcher = SettingsWatcher::new(settings_path.clone()).unwrap();
    assert_eq!(watcher.path(), settings_path.as_path());
}

#[test]
fn test_default_paths() {
    let settings = default_settings_path();
    assert!(settings.is_some() || cfg!(target_os = "unknown"));
    if let Some(path) = settings {
        assert!(path.ends_with("circuitboard/settings.json"));
    }
}

#[test]
fn test_poll_without_changes() {
    let dir = tempdir().unwrap();
    let settings_path = dir.path().join("settings.json");
    fs::write(&settings_path, "{}").unwrap();

    let mut watcher = SettingsWatcher::new(settings_path).unwrap();
    // Nothing was touched after the watcher started
    let _ = watcher.poll();
}

/// Ignored: file system notifications are timing-dependent and not
/// delivered reliably in CI sandboxes.
#[test]
#[ignore]
fn test_file_modification_detection() {
    let dir = tempdir().unwrap();
    let settings_path = dir.path().join("settings.json");
    fs::write(&settings_path, "{}").unwrap();

    let mut watcher = SettingsWatcher::new(settings_path.clone()).unwrap();

    let mut file = fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(&settings_path)
        .unwrap();
    writeln!(file, "{{\"snap_to_grid\": true}}").unwrap();
    file.sync_all().unwrap();

    std::thread::sleep(std::time::Duration::from_millis(200));
    assert!(watcher.poll().is_some());
}
