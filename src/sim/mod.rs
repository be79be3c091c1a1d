//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering, audio or platform dependencies

pub mod difficulty;
pub mod puck;
pub mod spawner;
pub mod state;
pub mod tick;

pub use difficulty::DifficultyRamp;
pub use puck::{FALLBACK_DIRECTION, Puck, Side, crosses_line, direction};
pub use spawner::SpawnScheduler;
pub use state::{RoundEvent, RoundPhase, RoundState};
pub use tick::{GoalieCommand, TickInput, autopilot_side, tick};
