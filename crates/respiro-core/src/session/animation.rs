//! Breathing-circle animation driver.
//!
//! A thin adapter with no state machine of its own: each phase change
//! retargets a scale/opacity pair, and `sample()` interpolates towards
//! the targets over exactly one phase period with cubic in-out easing.
//! The rendering engine consuming the samples is an external
//! collaborator; nothing else in the core reads these values.

use super::oscillator::{Phase, PHASE_MS};

const IN_SCALE: f64 = 1.3;
const IN_OPACITY: f64 = 0.8;
const OUT_SCALE: f64 = 0.8;
const OUT_OPACITY: f64 = 1.0;

/// Interpolated visual values at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSample {
    pub scale: f64,
    pub opacity: f64,
}

impl AnimationSample {
    /// Resting state before the first retarget.
    pub const NEUTRAL: AnimationSample = AnimationSample {
        scale: 1.0,
        opacity: 1.0,
    };

    fn target_for(phase: Phase) -> Self {
        match phase {
            Phase::In => AnimationSample {
                scale: IN_SCALE,
                opacity: IN_OPACITY,
            },
            Phase::Out => AnimationSample {
                scale: OUT_SCALE,
                opacity: OUT_OPACITY,
            },
        }
    }
}

/// Tweens scale and opacity towards the current phase's targets.
#[derive(Debug, Clone)]
pub struct AnimationDriver {
    from: AnimationSample,
    to: AnimationSample,
    started_at_ms: Option<u64>,
}

impl AnimationDriver {
    pub fn new() -> Self {
        Self {
            from: AnimationSample::NEUTRAL,
            to: AnimationSample::NEUTRAL,
            started_at_ms: None,
        }
    }

    /// The values being tweened towards.
    pub fn target(&self) -> AnimationSample {
        self.to
    }

    /// Begin tweening towards `phase`'s targets over one phase period,
    /// starting from whatever is currently on screen.
    pub fn retarget(&mut self, phase: Phase, now_ms: u64) {
        self.from = self.sample(now_ms);
        self.to = AnimationSample::target_for(phase);
        self.started_at_ms = Some(now_ms);
    }

    /// Eased interpolation at `now_ms`, clamped at the target once the
    /// phase period has elapsed.
    pub fn sample(&self, now_ms: u64) -> AnimationSample {
        let Some(started) = self.started_at_ms else {
            return self.to;
        };
        let elapsed = now_ms.saturating_sub(started);
        let t = (elapsed as f64 / PHASE_MS as f64).clamp(0.0, 1.0);
        let eased = ease_in_out_cubic(t);
        AnimationSample {
            scale: lerp(self.from.scale, self.to.scale, eased),
            opacity: lerp(self.from.opacity, self.to.opacity, eased),
        }
    }
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new()
    }
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_neutral_values() {
        let driver = AnimationDriver::new();
        assert_eq!(driver.sample(0), AnimationSample::NEUTRAL);
    }

    #[test]
    fn reaches_inhale_targets_after_one_period() {
        let mut driver = AnimationDriver::new();
        driver.retarget(Phase::In, 1000);
        let sample = driver.sample(1000 + PHASE_MS);
        assert!((sample.scale - 1.3).abs() < 1e-9);
        assert!((sample.opacity - 0.8).abs() < 1e-9);
    }

    #[test]
    fn exhale_target_is_smaller_and_opaque() {
        let mut driver = AnimationDriver::new();
        driver.retarget(Phase::Out, 0);
        let target = driver.target();
        assert!((target.scale - 0.8).abs() < 1e-9);
        assert!((target.opacity - 1.0).abs() < 1e-9);
    }

    #[test]
    fn midpoint_lies_between_endpoints() {
        let mut driver = AnimationDriver::new();
        driver.retarget(Phase::In, 0);
        let mid = driver.sample(PHASE_MS / 2);
        assert!(mid.scale > 1.0 && mid.scale < 1.3);
        assert!(mid.opacity < 1.0 && mid.opacity > 0.8);
    }

    #[test]
    fn clamps_at_target_after_the_period() {
        let mut driver = AnimationDriver::new();
        driver.retarget(Phase::Out, 0);
        let late = driver.sample(PHASE_MS * 3);
        assert_eq!(late, driver.target());
    }

    #[test]
    fn retarget_mid_tween_starts_from_current_sample() {
        let mut driver = AnimationDriver::new();
        driver.retarget(Phase::In, 0);
        let mid = driver.sample(PHASE_MS / 2);
        driver.retarget(Phase::Out, PHASE_MS / 2);
        // Immediately after the retarget nothing jumps.
        let after = driver.sample(PHASE_MS / 2);
        assert!((after.scale - mid.scale).abs() < 1e-9);
        assert!((after.opacity - mid.opacity).abs() < 1e-9);
    }
}
