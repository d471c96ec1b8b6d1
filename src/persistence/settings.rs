use crate::domain::TimerKind;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// User settings stored in config.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Default length of a work interval in minutes
    pub work_minutes: u64,
    /// Default length of a break in minutes
    pub break_minutes: u64,
    /// Ring the bell / post a desktop notification when a timer completes
    pub notifications: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            work_minutes: 25,
            break_minutes: 5,
            notifications: true,
        }
    }
}

impl Settings {
    /// Bring out-of-range durations back into what the timers accept
    pub fn clamped(mut self) -> Self {
        self.work_minutes = TimerKind::Work.clamp_minutes(self.work_minutes);
        self.break_minutes = TimerKind::Break.clamp_minutes(self.break_minutes);
        self
    }
}

/// Load settings from config.json, falling back to defaults when missing
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Settings::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings: {}", path.display()))?;
    let settings: Settings = serde_json::from_str(&content)
        .with_context(|| format!("Invalid settings file: {}", path.display()))?;
    Ok(settings.clamped())
}

/// Save settings to config.json
pub fn save_settings<P: AsRef<Path>>(path: P, settings: &Settings) -> Result<()> {
    let json = serde_json::to_string_pretty(settings)?;
    crate::persistence::atomic_write(path, &json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_nonexistent_settings() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");

        let settings = load_settings(&path).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_and_load_settings() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");

        let settings = Settings {
            work_minutes: 50,
            break_minutes: 10,
            notifications: false,
        };
        save_settings(&path, &settings).unwrap();

        assert_eq!(load_settings(&path).unwrap(), settings);
    }

    #[test]
    fn test_partial_settings_use_defaults() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{"breakMinutes": 15}"#).unwrap();

        let settings = load_settings(&path).unwrap();
        assert_eq!(settings.work_minutes, 25);
        assert_eq!(settings.break_minutes, 15);
        assert!(settings.notifications);
    }

    #[test]
    fn test_out_of_range_settings_are_clamped() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{"workMinutes": 500, "breakMinutes": 0}"#).unwrap();

        let settings = load_settings(&path).unwrap();
        assert_eq!(settings.work_minutes, 120);
        assert_eq!(settings.break_minutes, 1);
    }
}
