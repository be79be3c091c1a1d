//! Game balance parameters
//!
//! Read from the optional `tuning` object of the level config. Every field has
//! a default, so a partial object only overrides what it names.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Data-driven game balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Lives at round start
    pub start_lives: u8,

    // === Difficulty ===
    /// Speed multiplier reached at the end of the ramp
    pub max_speed_mult: f32,
    /// Seconds from round start until `max_speed_mult` is reached
    pub speed_ramp_secs: f32,
    /// Spawn interval at multiplier 1.0 (seconds)
    pub base_spawn_interval: f32,
    /// Spawn interval floor (seconds)
    pub min_spawn_interval: f32,

    // === Pucks ===
    /// Base speed range before the multiplier (pixels/s)
    pub puck_speed_min: f32,
    pub puck_speed_max: f32,

    // === Play-field ===
    pub field_width: f32,
    pub field_height: f32,

    /// Session seed; each round derives its own from this
    pub seed: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            start_lives: START_LIVES,

            max_speed_mult: MAX_SPEED_MULT,
            speed_ramp_secs: SPEED_RAMP_SECS,
            base_spawn_interval: BASE_SPAWN_INTERVAL,
            min_spawn_interval: MIN_SPAWN_INTERVAL,

            puck_speed_min: PUCK_SPEED_MIN,
            puck_speed_max: PUCK_SPEED_MAX,

            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            seed: 42,
        }
    }
}

impl Tuning {
    /// Play-field size in pixels
    pub fn field_size(&self) -> Vec2 {
        Vec2::new(self.field_width, self.field_height)
    }

    /// Reject values that would break the ramp or the spawner
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("speed_ramp_secs", self.speed_ramp_secs),
            ("base_spawn_interval", self.base_spawn_interval),
            ("min_spawn_interval", self.min_spawn_interval),
            ("puck_speed_min", self.puck_speed_min),
            ("field_width", self.field_width),
            ("field_height", self.field_height),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidTuning(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if self.start_lives == 0 {
            return Err(ConfigError::InvalidTuning(
                "start_lives must be at least 1".into(),
            ));
        }
        if !self.max_speed_mult.is_finite() || self.max_speed_mult < 1.0 {
            return Err(ConfigError::InvalidTuning(format!(
                "max_speed_mult must be >= 1, got {}",
                self.max_speed_mult
            )));
        }
        if !self.puck_speed_max.is_finite() || self.puck_speed_max < self.puck_speed_min {
            return Err(ConfigError::InvalidTuning(format!(
                "puck speed range [{}, {}] is empty",
                self.puck_speed_min, self.puck_speed_max
            )));
        }
        Ok(())
    }
}
