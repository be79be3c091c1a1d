//! Time-based difficulty curve

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::tuning::Tuning;

/// Linear speed ramp with a derived spawn interval
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyRamp {
    pub max_mult: f32,
    pub ramp_secs: f32,
    pub base_interval: f32,
    pub min_interval: f32,
}

impl Default for DifficultyRamp {
    fn default() -> Self {
        Self {
            max_mult: MAX_SPEED_MULT,
            ramp_secs: SPEED_RAMP_SECS,
            base_interval: BASE_SPAWN_INTERVAL,
            min_interval: MIN_SPAWN_INTERVAL,
        }
    }
}

impl From<&Tuning> for DifficultyRamp {
    fn from(tuning: &Tuning) -> Self {
        Self {
            max_mult: tuning.max_speed_mult,
            ramp_secs: tuning.speed_ramp_secs,
            base_interval: tuning.base_spawn_interval,
            min_interval: tuning.min_spawn_interval,
        }
    }
}

impl DifficultyRamp {
    /// Speed multiplier after `elapsed` seconds: 1.0 at start, `max_mult` at
    /// `ramp_secs` and clamped thereafter. A ramp of zero (or a non-positive
    /// or NaN length) counts as already finished.
    pub fn multiplier(&self, elapsed: f32) -> f32 {
        if !(self.ramp_secs > 0.0) {
            return self.max_mult;
        }
        // max/min rather than clamp: NaN elapsed maps to 0 instead of panicking
        let t = elapsed.max(0.0).min(self.ramp_secs) / self.ramp_secs;
        1.0 + (self.max_mult - 1.0) * t
    }

    /// Seconds between spawns at the given multiplier
    pub fn spawn_interval(&self, mult: f32) -> f32 {
        (self.base_interval / (0.9 + 0.1 * mult)).max(self.min_interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ramp_endpoints() {
        let ramp = DifficultyRamp::default();
        assert_eq!(ramp.multiplier(0.0), 1.0);
        assert!((ramp.multiplier(60.0) - 5.5).abs() < 1e-5);
        assert_eq!(ramp.multiplier(SPEED_RAMP_SECS), MAX_SPEED_MULT);
        assert_eq!(ramp.multiplier(10_000.0), MAX_SPEED_MULT);
    }

    #[test]
    fn test_spawn_interval_values() {
        let ramp = DifficultyRamp::default();
        assert!((ramp.spawn_interval(1.0) - 0.9).abs() < 1e-6);
        assert!((ramp.spawn_interval(MAX_SPEED_MULT) - 0.9 / 1.9).abs() < 1e-5);
        // Only a steeper ramp reaches the floor
        assert_eq!(ramp.spawn_interval(50.0), MIN_SPAWN_INTERVAL);
    }

    #[test]
    fn test_from_tuning() {
        let tuning = Tuning {
            max_speed_mult: 3.0,
            speed_ramp_secs: 30.0,
            ..Default::default()
        };
        let ramp = DifficultyRamp::from(&tuning);
        assert_eq!(ramp.multiplier(30.0), 3.0);
        assert!((ramp.multiplier(15.0) - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_degenerate_ramp_lengths() {
        for ramp_secs in [0.0, -1.0, -0.0, f32::NAN, f32::NEG_INFINITY] {
            let ramp = DifficultyRamp {
                ramp_secs,
                ..Default::default()
            };
            for elapsed in [0.0, 5.0, -2.0] {
                assert_eq!(ramp.multiplier(elapsed), MAX_SPEED_MULT, "ramp {ramp_secs}");
            }
        }
    }

    #[test]
    fn test_nan_elapsed_is_start_of_ramp() {
        let ramp = DifficultyRamp::default();
        assert_eq!(ramp.multiplier(f32::NAN), 1.0);
        assert!(ramp.spawn_interval(f32::NAN) >= MIN_SPAWN_INTERVAL);
    }

    proptest! {
        #[test]
        fn prop_multiplier_bounded_and_monotonic(a in 0.0f32..500.0, b in 0.0f32..500.0) {
            let ramp = DifficultyRamp::default();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let (m_lo, m_hi) = (ramp.multiplier(lo), ramp.multiplier(hi));
            prop_assert!(m_lo >= 1.0 && m_hi <= MAX_SPEED_MULT);
            prop_assert!(m_lo <= m_hi);
        }

        #[test]
        fn prop_multiplier_saturates(extra in 0.0f32..10_000.0) {
            let ramp = DifficultyRamp::default();
            prop_assert_eq!(ramp.multiplier(SPEED_RAMP_SECS + extra), MAX_SPEED_MULT);
        }

        #[test]
        fn prop_interval_non_increasing_with_floor(a in 1.0f32..10.0, b in 1.0f32..10.0) {
            let ramp = DifficultyRamp::default();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let (i_lo, i_hi) = (ramp.spawn_interval(lo), ramp.spawn_interval(hi));
            prop_assert!(i_hi <= i_lo);
            prop_assert!(i_hi >= MIN_SPAWN_INTERVAL);
        }
    }
}
