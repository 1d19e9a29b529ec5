//! One complete breathing session: a 60-second countdown paired with a
//! 4-second inhale/exhale oscillator, composed by a session controller
//! and driven by a tokio event loop.

mod animation;
mod clock;
mod controller;
mod oscillator;
mod runner;

pub use animation::{AnimationDriver, AnimationSample};
pub use clock::{ClockState, SessionClock};
pub use controller::{
    DisplayState, FinishReason, SessionConfig, SessionController, SessionState,
};
pub use oscillator::{Phase, PhaseOscillator, PHASE_MS};
pub use runner::{run_session, SessionCommand};

/// Default session length in seconds.
pub const SESSION_SECS: u32 = 60;

/// Current wall clock as milliseconds since the Unix epoch.
///
/// The session components never read the clock themselves -- callers
/// stamp every time-sensitive operation so tests stay deterministic.
pub fn epoch_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
