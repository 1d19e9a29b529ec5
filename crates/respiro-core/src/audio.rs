//! Background ambience seam.
//!
//! Real playback devices are an external collaborator. The core only
//! tracks ownership of a single loaded, loopable resource per session:
//! the [`crate::session::SessionController`] acquires at most one
//! [`AudioHandle`] and releases it on every exit path.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AudioError;

/// Fixed ambience volume, a fraction of device maximum.
pub const AMBIENCE_VOLUME: f32 = 0.3;

/// Background sound choice for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundSound {
    Ocean,
    Forest,
    None,
}

impl BackgroundSound {
    pub fn as_str(self) -> &'static str {
        match self {
            BackgroundSound::Ocean => "ocean",
            BackgroundSound::Forest => "forest",
            BackgroundSound::None => "none",
        }
    }
}

impl std::fmt::Display for BackgroundSound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque reference to a loaded, loopable sound resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioHandle(Uuid);

impl AudioHandle {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AudioHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Every audio playback backend implements this trait.
/// Backends are stateless from the core's point of view -- the handle
/// identifies the loaded resource across calls.
pub trait AudioBackend: Send + Sync {
    /// Load a loopable ambience resource. May be slow; the session
    /// controller tolerates the result arriving after finish.
    fn load(&self, sound: BackgroundSound) -> Result<AudioHandle, AudioError>;

    /// Start (or restart) looping playback.
    fn play(&self, handle: AudioHandle);

    /// Pause playback, keeping the resource loaded.
    fn pause(&self, handle: AudioHandle);

    /// Stop playback.
    fn stop(&self, handle: AudioHandle);

    /// Set playback volume (0.0 ..= 1.0).
    fn set_volume(&self, handle: AudioHandle, volume: f32);

    /// Release the loaded resource. The handle is dead afterwards.
    fn release(&self, handle: AudioHandle);
}

/// Silent backend for hosts without a playback device (the CLI).
/// Every operation succeeds and logs at debug level.
#[derive(Debug, Default)]
pub struct NullBackend;

impl NullBackend {
    pub fn new() -> Self {
        Self
    }
}

impl AudioBackend for NullBackend {
    fn load(&self, sound: BackgroundSound) -> Result<AudioHandle, AudioError> {
        let handle = AudioHandle::new();
        tracing::debug!(%sound, ?handle, "null backend: loaded ambience");
        Ok(handle)
    }

    fn play(&self, handle: AudioHandle) {
        tracing::debug!(?handle, "null backend: play");
    }

    fn pause(&self, handle: AudioHandle) {
        tracing::debug!(?handle, "null backend: pause");
    }

    fn stop(&self, handle: AudioHandle) {
        tracing::debug!(?handle, "null backend: stop");
    }

    fn set_volume(&self, handle: AudioHandle, volume: f32) {
        tracing::debug!(?handle, volume, "null backend: set volume");
    }

    fn release(&self, handle: AudioHandle) {
        tracing::debug!(?handle, "null backend: release");
    }
}
