//! Session countdown clock.
//!
//! The clock is a state machine without internal threads -- the caller
//! (the session runner's 1-second periodic task) invokes `tick()` once
//! per second. There is no wall-clock compensation: a tick delayed by
//! host scheduling simply stretches that second.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockState {
    Idle,
    Running,
    Expired,
    Cancelled,
}

/// Fixed-duration countdown ticking once per second.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClock {
    total_secs: u32,
    remaining_secs: u32,
    state: ClockState,
}

impl SessionClock {
    pub fn new(total_secs: u32) -> Self {
        Self {
            total_secs,
            remaining_secs: total_secs,
            state: ClockState::Idle,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn total_secs(&self) -> u32 {
        self.total_secs
    }

    pub fn is_running(&self) -> bool {
        self.state == ClockState::Running
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin the countdown. A zero-length clock refuses to start.
    pub fn start(&mut self) {
        if self.state == ClockState::Idle && self.remaining_secs > 0 {
            self.state = ClockState::Running;
        }
    }

    /// Advance by one second.
    ///
    /// Returns true exactly once, on the tick that reaches zero. Ticks
    /// in any other state are ignored, so no decrement can happen after
    /// expiry or cancellation.
    pub fn tick(&mut self) -> bool {
        if self.state != ClockState::Running {
            return false;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.state = ClockState::Expired;
            true
        } else {
            false
        }
    }

    /// Stop early without an expiry signal.
    pub fn cancel(&mut self) {
        if self.state == ClockState::Running {
            self.state = ClockState::Cancelled;
        }
    }
}
