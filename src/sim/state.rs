//! Round state and core simulation types
//!
//! One `RoundState` per round. It owns every active puck; hosts observe it
//! through the events it emits.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::difficulty::DifficultyRamp;
use super::puck::{Puck, Side};
use super::spawner::SpawnScheduler;
use crate::layout::{FieldGeometry, SceneLayout};
use crate::tuning::Tuning;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Active gameplay
    Playing,
    /// Lives ran out (terminal)
    GameOver,
}

/// Something the host should react to (audio, score UI, effects)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RoundEvent {
    PuckSpawned {
        id: u32,
        spawn: Vec2,
        target: Vec2,
        velocity: Vec2,
    },
    Saved {
        puck_id: u32,
        score: u64,
    },
    Missed {
        puck_id: u32,
        lives: u8,
    },
    RoundEnded {
        final_score: u64,
    },
}

/// Complete state of one round
#[derive(Debug, Clone)]
pub struct RoundState {
    /// Seed the spawner was built from
    pub seed: u64,
    pub phase: RoundPhase,
    pub goalie_side: Side,
    pub score: u64,
    pub lives: u8,
    /// Seconds since the round started
    pub elapsed: f32,
    /// Derived from `elapsed` each tick
    pub speed_mult: f32,
    /// Debug override: misses never cost a life
    pub infinite_lives: bool,
    /// Active pucks (sorted by id)
    pub pucks: Vec<Puck>,
    pub geometry: FieldGeometry,
    pub ramp: DifficultyRamp,
    pub spawner: SpawnScheduler,
    events: Vec<RoundEvent>,
    /// Next entity ID
    next_id: u32,
}

impl RoundState {
    /// Start a round with default tuning
    pub fn new(layout: &SceneLayout, seed: u64) -> Self {
        Self::with_tuning(layout, &Tuning::default(), seed)
    }

    pub fn with_tuning(layout: &SceneLayout, tuning: &Tuning, seed: u64) -> Self {
        Self {
            seed,
            phase: RoundPhase::Playing,
            goalie_side: Side::Left,
            score: 0,
            lives: tuning.start_lives,
            elapsed: 0.0,
            speed_mult: 1.0,
            infinite_lives: false,
            pucks: Vec::new(),
            geometry: layout.resolve(tuning.field_size()),
            ramp: DifficultyRamp::from(tuning),
            spawner: SpawnScheduler::with_speed_range(
                seed,
                tuning.puck_speed_min,
                tuning.puck_speed_max,
            ),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// ID the next allocation will return
    pub(crate) fn peek_next_id(&self) -> u32 {
        self.next_id
    }

    /// Add a puck flying from `spawn` to `target` (pixel space)
    pub fn launch_puck(&mut self, spawn: Vec2, target: Vec2, speed: f32) -> u32 {
        let id = self.next_entity_id();
        let puck = Puck::new(id, spawn, target, speed, self.geometry.midline_x);
        self.insert_puck(puck);
        id
    }

    pub(crate) fn insert_puck(&mut self, puck: Puck) {
        self.emit(RoundEvent::PuckSpawned {
            id: puck.id,
            spawn: puck.spawn,
            target: puck.target,
            velocity: puck.vel,
        });
        self.pucks.push(puck);
    }

    pub fn is_over(&self) -> bool {
        self.phase == RoundPhase::GameOver
    }

    pub(crate) fn emit(&mut self, event: RoundEvent) {
        self.events.push(event);
    }

    /// Pending events since the last drain
    pub fn events(&self) -> &[RoundEvent] {
        &self.events
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<RoundEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn toggle_goalie(&mut self) {
        self.goalie_side = self.goalie_side.toggled();
    }

    pub fn set_goalie(&mut self, side: Side) {
        self.goalie_side = side;
    }
}
