// SPDX-License-Identifier: MPL-2.0
//! Persistent settings and tuning defaults.
//!
//! [`Settings`] is the user-facing TOML file; every field is optional and
//! anything absent falls back to [`defaults`]. Loading is infallible by
//! design: a missing or malformed file yields defaults so the host always
//! comes up.

pub mod defaults;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::console::ConsoleOptions;
use crate::domain::{BacklogCapacity, BatchSize, HistoryCapacity, VisibleLimit};
use crate::error::{Error, Result};
use crate::toast::ToastOptions;

const APP_NAME: &str = "panelflow";
const CONFIG_FILE: &str = "settings.toml";

/// User-adjustable queue settings, persisted as TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Overrides the number of simultaneously visible toasts.
    pub max_visible_toasts: Option<usize>,
    /// Overrides the toast auto-dismiss lifetime in milliseconds.
    pub toast_ttl_ms: Option<u64>,
    /// Overrides the pending-toast backlog capacity.
    pub toast_backlog: Option<usize>,
    /// Overrides the unrendered log backlog capacity.
    pub log_backlog: Option<usize>,
    /// Overrides the burst-mode render batch size.
    pub log_batch_size: Option<usize>,
    /// Overrides the rendered-history capacity.
    pub log_history: Option<usize>,
}

impl Settings {
    /// Loads settings from the platform config directory.
    #[must_use]
    pub fn load() -> Self {
        match config_path() {
            Some(path) => Self::load_from_path(&path),
            None => Self::default(),
        }
    }

    /// Loads settings from an explicit path.
    ///
    /// A missing, unreadable or malformed file yields the defaults.
    #[must_use]
    pub fn load_from_path(path: &Path) -> Self {
        fs::read_to_string(path)
            .ok()
            .and_then(|contents| toml::from_str(&contents).ok())
            .unwrap_or_default()
    }

    /// Saves settings into the platform config directory.
    pub fn save(&self) -> Result<()> {
        let path = config_path()
            .ok_or_else(|| Error::Config("no config directory on this platform".to_string()))?;
        self.save_to_path(&path)
    }

    /// Saves settings to an explicit path, creating parent directories as
    /// needed.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Toast queue options with defaults applied and bounds enforced.
    #[must_use]
    pub fn toast_options(&self) -> ToastOptions {
        ToastOptions {
            max_visible: VisibleLimit::new(
                self.max_visible_toasts
                    .unwrap_or(defaults::DEFAULT_MAX_VISIBLE_TOASTS),
            ),
            backlog: BacklogCapacity::new(
                self.toast_backlog.unwrap_or(defaults::DEFAULT_TOAST_BACKLOG),
            ),
        }
    }

    /// Console queue options with defaults applied and bounds enforced.
    #[must_use]
    pub fn console_options(&self) -> ConsoleOptions {
        ConsoleOptions {
            backlog: BacklogCapacity::new(
                self.log_backlog.unwrap_or(defaults::DEFAULT_LOG_BACKLOG),
            ),
            batch_size: BatchSize::new(
                self.log_batch_size.unwrap_or(defaults::DEFAULT_LOG_BATCH_SIZE),
            ),
            history: HistoryCapacity::new(
                self.log_history.unwrap_or(defaults::DEFAULT_LOG_HISTORY),
            ),
        }
    }

    /// Display lifetime for toasts built by the host.
    #[must_use]
    pub fn toast_ttl(&self) -> Duration {
        Duration::from_millis(self.toast_ttl_ms.unwrap_or(defaults::DEFAULT_TOAST_TTL_MS))
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{batch_size_bounds, visible_limit_bounds};

    #[test]
    fn default_settings_apply_default_options() {
        let settings = Settings::default();
        let toast = settings.toast_options();
        assert_eq!(toast.max_visible.value(), defaults::DEFAULT_MAX_VISIBLE_TOASTS);
        assert_eq!(toast.backlog.value(), defaults::DEFAULT_TOAST_BACKLOG);

        let console = settings.console_options();
        assert_eq!(console.backlog.value(), defaults::DEFAULT_LOG_BACKLOG);
        assert_eq!(console.batch_size.value(), defaults::DEFAULT_LOG_BATCH_SIZE);
        assert_eq!(console.history.value(), defaults::DEFAULT_LOG_HISTORY);

        assert_eq!(
            settings.toast_ttl(),
            Duration::from_millis(defaults::DEFAULT_TOAST_TTL_MS)
        );
    }

    #[test]
    fn overrides_flow_into_options() {
        let settings = Settings {
            max_visible_toasts: Some(5),
            toast_ttl_ms: Some(4000),
            log_batch_size: Some(25),
            ..Settings::default()
        };
        assert_eq!(settings.toast_options().max_visible.value(), 5);
        assert_eq!(settings.console_options().batch_size.value(), 25);
        assert_eq!(settings.toast_ttl(), Duration::from_secs(4));
    }

    #[test]
    fn out_of_range_overrides_are_clamped() {
        let settings = Settings {
            max_visible_toasts: Some(999),
            log_batch_size: Some(0),
            ..Settings::default()
        };
        assert_eq!(
            settings.toast_options().max_visible.value(),
            visible_limit_bounds::MAX
        );
        assert_eq!(
            settings.console_options().batch_size.value(),
            batch_size_bounds::MIN
        );
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let settings = Settings::load_from_path(&dir.path().join("absent.toml"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn malformed_file_loads_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");
        fs::write(&path, "max_visible_toasts = \"many\"").expect("write");
        let settings = Settings::load_from_path(&path);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("settings.toml");
        let settings = Settings {
            max_visible_toasts: Some(4),
            toast_ttl_ms: Some(1500),
            toast_backlog: Some(32),
            log_backlog: Some(2000),
            log_batch_size: Some(100),
            log_history: Some(800),
        };
        settings.save_to_path(&path).expect("save");
        assert_eq!(Settings::load_from_path(&path), settings);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");
        fs::write(&path, "log_history = 600\nlegacy_key = true\n").expect("write");
        let settings = Settings::load_from_path(&path);
        assert_eq!(settings.log_history, Some(600));
    }
}
