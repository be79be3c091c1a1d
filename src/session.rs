//! Round lifecycle and the host command/event contract
//!
//! The host feeds `Command`s in and renders the `RoundEvent`s that come back.
//! A new round never inherits score or lives from the previous one.

use crate::highscores::{RoundResult, SessionScores};
use crate::layout::{LevelConfig, SceneLayout};
use crate::sim::{GoalieCommand, RoundEvent, RoundPhase, RoundState, Side, TickInput, tick};
use crate::tuning::Tuning;

/// Commands the host can send
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    StartRound,
    ToggleGoalieSide,
    SetGoalieSide(Side),
    /// Debug override: misses stop costing lives
    SetInfiniteLives(bool),
    /// Advance by `dt` seconds
    Tick(f32),
}

/// One play session: a fixed level, any number of rounds
#[derive(Debug, Clone)]
pub struct Session {
    layout: SceneLayout,
    tuning: Tuning,
    round: Option<RoundState>,
    /// Goalie commands waiting for the next tick
    pending: TickInput,
    infinite_lives: bool,
    rounds_started: u32,
    pub scores: SessionScores,
}

impl Session {
    pub fn new(level: &LevelConfig) -> Self {
        Self::with_layout(level.layout.clone(), level.tuning.clone())
    }

    /// A layout or tuning that fails validation is replaced by the defaults
    pub fn with_layout(layout: SceneLayout, tuning: Tuning) -> Self {
        let layout = match layout.validate() {
            Ok(()) => layout,
            Err(e) => {
                log::warn!("{e}, using default layout");
                SceneLayout::default()
            }
        };
        let tuning = match tuning.validate() {
            Ok(()) => tuning,
            Err(e) => {
                log::warn!("{e}, using default tuning");
                Tuning::default()
            }
        };
        Self {
            layout,
            tuning,
            round: None,
            pending: TickInput::default(),
            infinite_lives: false,
            rounds_started: 0,
            scores: SessionScores::new(),
        }
    }

    /// Current round, if one has been started
    pub fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    /// True while a round is in progress (not on start or game-over screens)
    pub fn is_playing(&self) -> bool {
        self.round
            .as_ref()
            .is_some_and(|r| r.phase == RoundPhase::Playing)
    }

    pub fn rounds_started(&self) -> u32 {
        self.rounds_started
    }

    /// Run the autopilot instead of waiting for goalie commands
    pub fn set_idle_mode(&mut self, idle: bool) {
        self.pending.idle_mode = idle;
    }

    /// Apply one command and return the events it produced
    pub fn handle(&mut self, command: Command) -> Vec<RoundEvent> {
        match command {
            Command::StartRound => {
                self.start_round();
                Vec::new()
            }
            Command::ToggleGoalieSide => {
                self.queue(GoalieCommand::Toggle);
                Vec::new()
            }
            Command::SetGoalieSide(side) => {
                self.queue(GoalieCommand::Set(side));
                Vec::new()
            }
            Command::SetInfiniteLives(on) => {
                self.infinite_lives = on;
                if let Some(round) = self.round.as_mut() {
                    round.infinite_lives = on;
                }
                log::info!("Infinite lives {}", if on { "on" } else { "off" });
                Vec::new()
            }
            Command::Tick(dt) => self.advance(dt),
        }
    }

    fn start_round(&mut self) {
        self.rounds_started += 1;
        let seed = self
            .tuning
            .seed
            .wrapping_add(u64::from(self.rounds_started).wrapping_mul(0x9E37_79B9_7F4A_7C15));
        let mut round = RoundState::with_tuning(&self.layout, &self.tuning, seed);
        round.infinite_lives = self.infinite_lives;
        self.round = Some(round);
        self.pending.commands.clear();
        log::info!("Round {} started (seed {seed})", self.rounds_started);
    }

    fn queue(&mut self, command: GoalieCommand) {
        if self.is_playing() {
            self.pending.commands.push(command);
        }
    }

    fn advance(&mut self, dt: f32) -> Vec<RoundEvent> {
        let Some(round) = self.round.as_mut() else {
            return Vec::new();
        };
        if round.phase != RoundPhase::Playing {
            return Vec::new();
        }

        tick(round, &self.pending, dt);
        if dt.is_finite() && dt > 0.0 {
            self.pending.commands.clear();
        }
        let events = round.drain_events();

        if round.phase == RoundPhase::GameOver {
            let rank = self.scores.record(RoundResult {
                round: self.rounds_started,
                score: round.score,
                elapsed: round.elapsed,
            });
            log::info!(
                "Score {} ranks #{rank} of {} this session",
                round.score,
                self.scores.rounds_played()
            );
        }
        events
    }
}
