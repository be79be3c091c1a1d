//! Goalie Clicker - a single-screen arcade goalie game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (pucks, spawning, difficulty, scoring)
//! - `layout`: Level configuration and play-field geometry
//! - `tuning`: Data-driven game balance
//! - `input`: Raw pointer/key events to abstract commands
//! - `session`: Round lifecycle and the host command/event contract

pub mod error;
pub mod highscores;
pub mod input;
pub mod layout;
pub mod session;
pub mod sim;
pub mod tuning;

pub use error::ConfigError;
pub use highscores::{RoundResult, SessionScores};
pub use layout::{FieldGeometry, LevelConfig, RelPoint, SceneLayout};
pub use session::{Command, Session};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz host tick)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Logical play-field size (16:9)
    pub const FIELD_WIDTH: f32 = 1600.0;
    pub const FIELD_HEIGHT: f32 = 900.0;

    /// Lives at round start
    pub const START_LIVES: u8 = 3;

    /// Difficulty ramp: multiplier reaches MAX_SPEED_MULT after SPEED_RAMP_SECS
    pub const MAX_SPEED_MULT: f32 = 10.0;
    pub const SPEED_RAMP_SECS: f32 = 120.0;

    /// Spawn interval at multiplier 1.0 (seconds)
    pub const BASE_SPAWN_INTERVAL: f32 = 0.9;
    /// Spawn interval floor (seconds)
    pub const MIN_SPAWN_INTERVAL: f32 = 0.35;

    /// Base puck speed range before the multiplier (pixels/s)
    pub const PUCK_SPEED_MIN: f32 = 260.0;
    pub const PUCK_SPEED_MAX: f32 = 360.0;
}
