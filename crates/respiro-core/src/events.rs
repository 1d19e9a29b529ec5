use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::audio::BackgroundSound;
use crate::session::{FinishReason, Phase};

/// Every state change in a session produces an Event.
/// Renderers consume the stream; the CLI can also emit it as NDJSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    SessionStarted {
        session_id: Uuid,
        background_sound: BackgroundSound,
        duration_secs: u32,
        at: DateTime<Utc>,
    },
    /// One second of the countdown elapsed. Carries the phase so a
    /// renderer gets a consistent snapshot per tick.
    SecondElapsed {
        remaining_secs: u32,
        phase: Phase,
        at: DateTime<Utc>,
    },
    PhaseChanged {
        phase: Phase,
        at: DateTime<Utc>,
    },
    AudioStarted {
        sound: BackgroundSound,
        at: DateTime<Utc>,
    },
    /// The ambience load failed -- emitted at most once per session;
    /// the session keeps running silently.
    AudioUnavailable {
        sound: BackgroundSound,
        reason: String,
        at: DateTime<Utc>,
    },
    AudioToggled {
        playing: bool,
        at: DateTime<Utc>,
    },
    SessionFinished {
        reason: FinishReason,
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_are_tagged_by_type() {
        let event = Event::SessionFinished {
            reason: FinishReason::Elapsed,
            remaining_secs: 0,
            at: Utc::now(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "SessionFinished");
        assert_eq!(json["reason"], "elapsed");
    }

    #[test]
    fn phase_serializes_lowercase() {
        let event = Event::PhaseChanged {
            phase: Phase::Out,
            at: Utc::now(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["phase"], "out");
    }
}
