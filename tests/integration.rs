// SPDX-License-Identifier: MPL-2.0
//! Cross-module flows: settings on disk, queue construction, file export.

use std::fs;

use panelflow::config::Settings;
use panelflow::console::{export_to_dir, ConsoleQueue, LogRecord};
use panelflow::testing::{
    drive_console_idle, ManualTimers, RecordingConsoleSurface, RecordingToastSurface,
};
use panelflow::toast::{Notification, ToastQueue};

#[test]
fn settings_round_trip_through_disk() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("panelflow").join("settings.toml");

    let settings = Settings {
        max_visible_toasts: Some(2),
        toast_ttl_ms: Some(3000),
        log_batch_size: Some(10),
        log_history: Some(100),
        ..Settings::default()
    };
    settings.save_to_path(&path).expect("save");

    let loaded = Settings::load_from_path(&path);
    assert_eq!(loaded, settings);

    // The written file is valid TOML with only the set keys.
    let contents = fs::read_to_string(&path).expect("read");
    assert!(contents.contains("max_visible_toasts = 2"));
    assert!(!contents.contains("log_backlog"));
}

#[test]
fn saved_settings_shape_queue_behavior() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");
    Settings {
        max_visible_toasts: Some(2),
        log_batch_size: Some(10),
        ..Settings::default()
    }
    .save_to_path(&path)
    .expect("save");
    let settings = Settings::load_from_path(&path);

    // Toast side: only two slots.
    let mut toasts = ToastQueue::new(
        RecordingToastSurface::default(),
        ManualTimers::new(),
        settings.toast_options(),
    );
    for n in 0..4 {
        toasts.push(Notification::info(format!("toast {n}")));
    }
    assert_eq!(toasts.visible_count(), 2);
    assert_eq!(toasts.queued_count(), 2);

    // Console side: burst batches of ten.
    let mut console = ConsoleQueue::new(
        RecordingConsoleSurface::default(),
        ManualTimers::new(),
        settings.console_options(),
    );
    for n in 0..25 {
        console.append(LogRecord::info(format!("line {n}")));
    }
    drive_console_idle(&mut console);
    assert_eq!(
        console.surface().batches,
        vec![(10, false), (10, false), (5, false)]
    );
}

#[test]
fn console_history_exports_to_file() {
    let mut console = ConsoleQueue::new(
        RecordingConsoleSurface::default(),
        ManualTimers::new(),
        Settings::default().console_options(),
    );
    console.append(LogRecord::info("starting up").from_source("launcher"));
    drive_console_idle(&mut console);
    console.append(LogRecord::warn("cache miss"));
    drive_console_idle(&mut console);

    let text = console.export_text();
    let dir = tempfile::tempdir().expect("temp dir");
    let path = export_to_dir(dir.path(), &text).expect("export");

    let name = path.file_name().and_then(|n| n.to_str()).expect("file name");
    assert!(name.starts_with("console-export-"));
    assert!(name.ends_with(".log"));

    let written = fs::read_to_string(&path).expect("read back");
    assert_eq!(written, text);
    assert!(written.contains("[INFO] [launcher] starting up"));
    assert!(written.contains("[WARN] cache miss"));
}

#[test]
fn defaults_survive_missing_config() {
    let dir = tempfile::tempdir().expect("temp dir");
    let settings = Settings::load_from_path(&dir.path().join("nowhere.toml"));

    let mut toasts = ToastQueue::new(
        RecordingToastSurface::default(),
        ManualTimers::new(),
        settings.toast_options(),
    );
    for n in 0..5 {
        toasts.push(Notification::info(format!("toast {n}")));
    }
    assert_eq!(toasts.visible_count(), 3);
}
