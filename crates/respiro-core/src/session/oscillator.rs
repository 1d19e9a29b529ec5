//! Breath phase oscillator.
//!
//! Alternates the inhale/exhale cue every [`PHASE_MS`] while a session
//! is active. The oscillator has no awareness of the countdown; the
//! session controller starts and stops it, and the runner's 4-second
//! periodic task supplies the cadence.

use serde::{Deserialize, Serialize};

/// Milliseconds per breath phase.
pub const PHASE_MS: u64 = 4000;

/// Inhale or exhale cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    In,
    Out,
}

impl Phase {
    pub fn toggled(self) -> Self {
        match self {
            Phase::In => Phase::Out,
            Phase::Out => Phase::In,
        }
    }
}

/// Two-phase oscillator with flip-instant bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseOscillator {
    phase: Phase,
    running: bool,
    /// Epoch-ms stamp of the last flip (or start). Used by animation
    /// sampling, not for scheduling.
    flipped_at_ms: Option<u64>,
}

impl PhaseOscillator {
    pub fn new() -> Self {
        Self {
            phase: Phase::In,
            running: false,
            flipped_at_ms: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Milliseconds elapsed since the last flip. Zero before start.
    pub fn millis_into_phase(&self, now_ms: u64) -> u64 {
        self.flipped_at_ms
            .map(|at| now_ms.saturating_sub(at))
            .unwrap_or(0)
    }

    /// Begin alternating, always from `In`. A restart after stop resets
    /// the phase -- there is no resume-from-last-phase.
    pub fn start(&mut self, now_ms: u64) {
        self.phase = Phase::In;
        self.running = true;
        self.flipped_at_ms = Some(now_ms);
    }

    /// Toggle the phase and re-stamp the flip instant.
    /// Ignored while stopped; the last phase stays readable.
    pub fn flip(&mut self, now_ms: u64) -> Phase {
        if self.running {
            self.phase = self.phase.toggled();
            self.flipped_at_ms = Some(now_ms);
        }
        self.phase
    }

    /// Halt alternation immediately, freezing the current phase.
    pub fn stop(&mut self) {
        self.running = false;
    }
}

impl Default for PhaseOscillator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_inhale_phase() {
        let mut osc = PhaseOscillator::new();
        osc.start(1000);
        assert_eq!(osc.phase(), Phase::In);
        assert!(osc.is_running());
    }

    #[test]
    fn alternates_on_each_flip() {
        let mut osc = PhaseOscillator::new();
        osc.start(0);
        assert_eq!(osc.flip(4000), Phase::Out);
        assert_eq!(osc.flip(8000), Phase::In);
        assert_eq!(osc.flip(12000), Phase::Out);
    }

    #[test]
    fn stop_freezes_the_phase() {
        let mut osc = PhaseOscillator::new();
        osc.start(0);
        osc.flip(4000);
        osc.stop();
        assert_eq!(osc.flip(8000), Phase::Out);
        assert_eq!(osc.phase(), Phase::Out);
    }

    #[test]
    fn restart_resets_to_inhale() {
        let mut osc = PhaseOscillator::new();
        osc.start(0);
        osc.flip(4000);
        osc.stop();
        osc.start(10_000);
        assert_eq!(osc.phase(), Phase::In);
    }

    #[test]
    fn millis_into_phase_tracks_last_flip() {
        let mut osc = PhaseOscillator::new();
        assert_eq!(osc.millis_into_phase(500), 0);
        osc.start(1000);
        assert_eq!(osc.millis_into_phase(2500), 1500);
        osc.flip(5000);
        assert_eq!(osc.millis_into_phase(6000), 1000);
    }
}
