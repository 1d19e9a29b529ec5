//! Session controller.
//!
//! Composes the countdown clock, phase oscillator, animation driver and
//! the single background-audio handle into one state machine:
//!
//! ```text
//! Idle -> Active -> Finished
//! ```
//!
//! `Finished` is terminal -- a new controller is created for the next
//! session. The controller never reads the wall clock itself: the
//! runner stamps every command, and event timestamps use `Utc::now()`.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::animation::{AnimationDriver, AnimationSample};
use super::clock::SessionClock;
use super::oscillator::{Phase, PhaseOscillator};
use super::SESSION_SECS;
use crate::audio::{AudioBackend, AudioHandle, BackgroundSound, AMBIENCE_VOLUME};
use crate::error::AudioError;
use crate::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    Idle,
    Active,
    Finished,
}

/// Why a session ended. Both paths converge on the same finish logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FinishReason {
    /// The countdown reached zero.
    Elapsed,
    /// The user requested an early exit.
    Cancelled,
}

/// Immutable per-session configuration, read from settings at start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub background_sound: BackgroundSound,
}

/// Read-only snapshot for rendering. Always read as a whole -- consumers
/// must not assemble display state field-by-field across ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayState {
    pub remaining_secs: u32,
    pub phase: Phase,
    pub running: bool,
}

/// Lifecycle of the session's single audio handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AudioState {
    /// Sound configured as `none`; every audio operation is a no-op.
    NotConfigured,
    /// Load requested, result not yet delivered.
    Pending,
    /// Handle live and owned by the controller.
    Ready { handle: AudioHandle, playing: bool },
    /// Load failed; the session continues silently.
    Failed,
    /// Handle released (session finished, or late result discarded).
    Released,
}

/// Owns one breathing session from start to finish.
pub struct SessionController {
    session_id: Uuid,
    config: SessionConfig,
    state: SessionState,
    clock: SessionClock,
    oscillator: PhaseOscillator,
    animation: AnimationDriver,
    audio: AudioState,
    backend: Box<dyn AudioBackend>,
}

impl SessionController {
    pub fn new(config: SessionConfig, backend: Box<dyn AudioBackend>) -> Self {
        let audio = match config.background_sound {
            BackgroundSound::None => AudioState::NotConfigured,
            _ => AudioState::Pending,
        };
        Self {
            session_id: Uuid::new_v4(),
            config,
            state: SessionState::Idle,
            clock: SessionClock::new(SESSION_SECS),
            oscillator: PhaseOscillator::new(),
            animation: AnimationDriver::new(),
            audio,
            backend,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state == SessionState::Finished
    }

    pub fn background_sound(&self) -> BackgroundSound {
        self.config.background_sound
    }

    /// Whether an audio load is owed and its result not yet delivered.
    pub fn audio_pending(&self) -> bool {
        self.audio == AudioState::Pending
    }

    pub fn backend(&self) -> &dyn AudioBackend {
        self.backend.as_ref()
    }

    /// One consistent snapshot of everything a renderer needs.
    pub fn display_state(&self) -> DisplayState {
        DisplayState {
            remaining_secs: self.clock.remaining_secs(),
            phase: self.oscillator.phase(),
            running: self.clock.is_running(),
        }
    }

    /// Sampled visual values for the breathing circle.
    pub fn animation_sample(&self, now_ms: u64) -> AnimationSample {
        self.animation.sample(now_ms)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start the session: clock and oscillator begin together and the
    /// animation tweens towards the inhale targets. The audio load is
    /// not performed here -- its result arrives via [`Self::attach_audio`],
    /// possibly after the session has already finished.
    pub fn start(&mut self, now_ms: u64) -> Option<Event> {
        if self.state != SessionState::Idle {
            return None;
        }
        self.state = SessionState::Active;
        self.clock.start();
        self.oscillator.start(now_ms);
        self.animation.retarget(Phase::In, now_ms);
        Some(Event::SessionStarted {
            session_id: self.session_id,
            background_sound: self.config.background_sound,
            duration_secs: self.clock.total_secs(),
            at: Utc::now(),
        })
    }

    /// Deliver the result of the background-audio load.
    ///
    /// While active, a successful load starts looping playback at the
    /// fixed ambience volume; a failure emits a one-time warning and the
    /// session continues silently. After finish, a late-arriving handle
    /// is released immediately and the result discarded.
    pub fn attach_audio(&mut self, result: Result<AudioHandle, AudioError>) -> Option<Event> {
        if self.audio != AudioState::Pending {
            // Not expecting a load result; release anything that arrives.
            if let Ok(handle) = result {
                self.backend.release(handle);
            }
            return None;
        }
        if self.state == SessionState::Finished {
            if let Ok(handle) = result {
                self.backend.release(handle);
            }
            self.audio = AudioState::Released;
            return None;
        }
        match result {
            Ok(handle) => {
                self.backend.set_volume(handle, AMBIENCE_VOLUME);
                self.backend.play(handle);
                self.audio = AudioState::Ready {
                    handle,
                    playing: true,
                };
                Some(Event::AudioStarted {
                    sound: self.config.background_sound,
                    at: Utc::now(),
                })
            }
            Err(err) => {
                tracing::warn!(sound = %self.config.background_sound, error = %err,
                    "ambience unavailable, session continues silently");
                self.audio = AudioState::Failed;
                Some(Event::AudioUnavailable {
                    sound: self.config.background_sound,
                    reason: err.to_string(),
                    at: Utc::now(),
                })
            }
        }
    }

    /// Pause or resume the ambience without touching clock or
    /// oscillator. Strict no-op when no sound is configured, the load
    /// failed or is still pending, or the session is not active.
    pub fn toggle_audio(&mut self) -> Option<Event> {
        if self.state != SessionState::Active {
            return None;
        }
        let AudioState::Ready { handle, playing } = self.audio else {
            return None;
        };
        if playing {
            self.backend.pause(handle);
        } else {
            self.backend.play(handle);
        }
        self.audio = AudioState::Ready {
            handle,
            playing: !playing,
        };
        Some(Event::AudioToggled {
            playing: !playing,
            at: Utc::now(),
        })
    }

    /// Advance the countdown by one second. Expiry converges into
    /// [`Self::finish`] with [`FinishReason::Elapsed`].
    pub fn tick_second(&mut self) -> Option<Event> {
        if self.state != SessionState::Active {
            return None;
        }
        if self.clock.tick() {
            return self.finish(FinishReason::Elapsed);
        }
        let snapshot = self.display_state();
        Some(Event::SecondElapsed {
            remaining_secs: snapshot.remaining_secs,
            phase: snapshot.phase,
            at: Utc::now(),
        })
    }

    /// Flip the breath phase and retarget the animation.
    pub fn flip_phase(&mut self, now_ms: u64) -> Option<Event> {
        if self.state != SessionState::Active {
            return None;
        }
        let phase = self.oscillator.flip(now_ms);
        self.animation.retarget(phase, now_ms);
        Some(Event::PhaseChanged {
            phase,
            at: Utc::now(),
        })
    }

    /// End the session: stop the clock and oscillator, release the
    /// audio handle. Idempotent -- on an already-finished controller
    /// this does nothing and returns None.
    pub fn finish(&mut self, reason: FinishReason) -> Option<Event> {
        if self.state != SessionState::Active {
            return None;
        }
        if reason == FinishReason::Cancelled {
            self.clock.cancel();
        }
        self.oscillator.stop();
        if let AudioState::Ready { handle, .. } = self.audio {
            self.backend.stop(handle);
            self.backend.release(handle);
            self.audio = AudioState::Released;
        }
        self.state = SessionState::Finished;
        Some(Event::SessionFinished {
            reason,
            remaining_secs: self.clock.remaining_secs(),
            at: Utc::now(),
        })
    }
}
