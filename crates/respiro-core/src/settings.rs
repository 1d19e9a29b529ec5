//! TOML-based application settings.
//!
//! Stores user preferences:
//! - Display language
//! - Daily-reminder toggle and time
//! - Background-sound choice
//!
//! Settings are stored at `~/.config/respiro/settings.toml` and are read
//! once at session start -- a running session never sees them change.
//! Read failures are never fatal: an unreadable or corrupt file falls
//! back to defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::audio::BackgroundSound;
use crate::error::SettingsError;
use crate::i18n::Language;

/// Returns `~/.config/respiro[-dev]/` based on RESPIRO_ENV.
///
/// Set RESPIRO_ENV=dev to use a development settings directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn settings_dir() -> Result<PathBuf, SettingsError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("RESPIRO_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("respiro-dev")
    } else {
        base_dir.join("respiro")
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| SettingsError::DirUnavailable(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}

/// Daily-reminder configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderSettings {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_reminder_hour")]
    pub hour: u32,
    #[serde(default)]
    pub minute: u32,
}

/// Background-sound configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundSettings {
    #[serde(default = "default_background")]
    pub background: BackgroundSound,
}

/// Application settings.
///
/// Serialized to/from TOML at `~/.config/respiro/settings.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub reminder: ReminderSettings,
    #[serde(default)]
    pub sound: SoundSettings,
}

fn default_reminder_hour() -> u32 {
    18
}
fn default_background() -> BackgroundSound {
    BackgroundSound::Ocean
}

impl Default for ReminderSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            hour: 18,
            minute: 0,
        }
    }
}

impl Default for SoundSettings {
    fn default() -> Self {
        Self {
            background: BackgroundSound::Ocean,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Language::default(),
            reminder: ReminderSettings::default(),
            sound: SoundSettings::default(),
        }
    }
}

impl Settings {
    fn path() -> Result<PathBuf, SettingsError> {
        Ok(settings_dir()?.join("settings.toml"))
    }

    /// Load from disk, falling back to defaults on any failure.
    ///
    /// A missing file writes the defaults back; an unreadable or corrupt
    /// file logs a warning and returns defaults without touching it.
    pub fn load() -> Self {
        match Self::path() {
            Ok(path) => Self::load_from(&path),
            Err(e) => {
                tracing::warn!(error = %e, "settings directory unavailable, using defaults");
                Self::default()
            }
        }
    }

    /// Load from an explicit path with the same fallback semantics.
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e,
                        "settings file corrupt, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                let settings = Self::default();
                if let Err(e) = settings.save_to(path) {
                    tracing::warn!(path = %path.display(), error = %e,
                        "could not write default settings");
                }
                settings
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot be serialized or written.
    pub fn save(&self) -> Result<(), SettingsError> {
        self.save_to(&Self::path()?)
    }

    /// Persist to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| SettingsError::ParseFailed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Get a settings value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a settings value by dot-separated key. Does not save.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value cannot be
    /// parsed as the existing field's type.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        let mut json =
            serde_json::to_value(&*self).map_err(|e| SettingsError::ParseFailed(e.to_string()))?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json).map_err(|e| SettingsError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), SettingsError> {
        let unknown = || SettingsError::UnknownKey(key.to_string());
        let invalid = |message: String| SettingsError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if parts.peek().is_none() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value.parse::<bool>().map_err(|e| invalid(e.to_string()))?,
                    ),
                    serde_json::Value::Number(_) => {
                        let n = value
                            .parse::<u64>()
                            .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?;
                        serde_json::Value::Number(n.into())
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_roundtrip() {
        let settings = Settings::default();
        let toml_str = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, settings);
        assert_eq!(parsed.reminder.hour, 18);
        assert_eq!(parsed.sound.background, BackgroundSound::Ocean);
    }

    #[test]
    fn missing_file_writes_defaults_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        let settings = Settings::load_from(&path);
        assert_eq!(settings, Settings::default());
        assert!(path.exists());
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "language = [this is not toml").unwrap();
        let settings = Settings::load_from(&path);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let settings = Settings::default();
        assert_eq!(settings.get("language").as_deref(), Some("en"));
        assert_eq!(settings.get("reminder.hour").as_deref(), Some("18"));
        assert_eq!(settings.get("sound.background").as_deref(), Some("ocean"));
        assert!(settings.get("sound.missing_key").is_none());
    }

    #[test]
    fn set_round_trips_through_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        let mut settings = Settings::default();
        settings.set("sound.background", "forest").unwrap();
        settings.set("reminder.enabled", "true").unwrap();
        settings.set("reminder.hour", "7").unwrap();
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path);
        assert_eq!(loaded.sound.background, BackgroundSound::Forest);
        assert!(loaded.reminder.enabled);
        assert_eq!(loaded.reminder.hour, 7);
    }

    #[test]
    fn set_rejects_unknown_key() {
        let mut settings = Settings::default();
        let err = settings.set("sound.nonexistent", "x").unwrap_err();
        assert!(matches!(err, SettingsError::UnknownKey(_)));
    }

    #[test]
    fn set_rejects_mistyped_value() {
        let mut settings = Settings::default();
        assert!(settings.set("reminder.enabled", "not_a_bool").is_err());
        assert!(settings.set("reminder.hour", "eighteen").is_err());
        // A sound value outside the enum fails when deserializing back.
        assert!(settings.set("sound.background", "rainfall").is_err());
    }
}
