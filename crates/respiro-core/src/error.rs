//! Core error types for respiro-core.
//!
//! None of these errors abort a breathing session once it has started:
//! audio and reminder failures are surfaced once and the session keeps
//! running, and settings read failures fall back to defaults.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for respiro-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Background ambience errors (non-fatal for a running session)
    #[error("Audio error: {0}")]
    Audio(#[from] AudioError),

    /// Settings-related errors
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),

    /// Daily reminder errors
    #[error("Reminder error: {0}")]
    Reminder(#[from] ReminderError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Background-audio errors.
#[derive(Error, Debug)]
pub enum AudioError {
    /// The ambience resource could not be loaded. The session continues
    /// silently; a one-time warning is surfaced to the caller.
    #[error("Failed to load '{sound}' ambience: {message}")]
    LoadFailed { sound: String, message: String },
}

/// Settings-specific errors.
///
/// Read-path failures never propagate out of [`crate::Settings::load`];
/// only explicit save/set operations report these.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Failed to resolve the settings directory
    #[error("Failed to resolve settings directory: {0}")]
    DirUnavailable(String),

    /// Failed to save settings
    #[error("Failed to save settings to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to serialize settings
    #[error("Failed to serialize settings: {0}")]
    ParseFailed(String),

    /// Unknown dot-separated settings key
    #[error("Unknown settings key: {0}")]
    UnknownKey(String),

    /// Value cannot be parsed for the given key
    #[error("Invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Reminder-scheduling errors.
#[derive(Error, Debug)]
pub enum ReminderError {
    /// The OS denied notification permission. Non-fatal: reported once,
    /// no retry.
    #[error("Notification permission denied")]
    PermissionDenied,

    /// The scheduler backend failed to register the reminder.
    #[error("Failed to schedule reminder: {0}")]
    ScheduleFailed(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
