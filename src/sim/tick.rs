//! Fixed timestep simulation tick
//!
//! Advances a round deterministically: goalie commands, clock, spawning,
//! puck motion, then save/miss resolution.

use super::puck::{Side, crosses_line};
use super::state::{RoundEvent, RoundPhase, RoundState};

/// A goalkeeper command, applied before the tick advances
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalieCommand {
    Toggle,
    Set(Side),
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Goalie commands in arrival order
    pub commands: Vec<GoalieCommand>,
    /// Idle/demo mode - autopilot picks the goalie side
    pub idle_mode: bool,
}

/// Advance the round by `dt` seconds.
///
/// Ticks with a non-positive or non-finite `dt` are ignored entirely, as is
/// every tick once the round is over.
pub fn tick(state: &mut RoundState, input: &TickInput, dt: f32) {
    if !dt.is_finite() || dt <= 0.0 {
        log::warn!("Ignoring tick with invalid dt {dt}");
        return;
    }
    if state.phase == RoundPhase::GameOver {
        return;
    }

    for command in &input.commands {
        match *command {
            GoalieCommand::Toggle => state.toggle_goalie(),
            GoalieCommand::Set(side) => state.set_goalie(side),
        }
    }
    if input.idle_mode {
        if let Some(side) = autopilot_side(state) {
            state.set_goalie(side);
        }
    }

    state.elapsed += dt;
    state.speed_mult = state.ramp.multiplier(state.elapsed);

    // Spawn
    let id = state.peek_next_id();
    if let Some(puck) = state
        .spawner
        .step(dt, state.speed_mult, &state.ramp, &state.geometry, id)
    {
        state.next_entity_id();
        log::debug!(
            "Spawned puck {} toward ({:.0}, {:.0}) side {} at {:.0} px/s",
            puck.id,
            puck.target.x,
            puck.target.y,
            puck.target_side.as_str(),
            puck.vel.length()
        );
        state.insert_puck(puck);
    }

    // Move and resolve, in id order
    let line_y = state.geometry.line_y;
    for i in 0..state.pucks.len() {
        let puck = &mut state.pucks[i];
        let prev_y = puck.advance(dt);
        if puck.resolved || !crosses_line(prev_y, puck.pos.y, line_y) {
            continue;
        }
        puck.resolved = true;
        let (puck_id, target_side) = (puck.id, puck.target_side);

        if state.goalie_side == target_side {
            state.score += 1;
            state.emit(RoundEvent::Saved {
                puck_id,
                score: state.score,
            });
        } else {
            if !state.infinite_lives {
                state.lives = state.lives.saturating_sub(1);
            }
            state.emit(RoundEvent::Missed {
                puck_id,
                lives: state.lives,
            });
            if state.lives == 0 && !state.infinite_lives {
                state.phase = RoundPhase::GameOver;
                state.emit(RoundEvent::RoundEnded {
                    final_score: state.score,
                });
                log::info!(
                    "Round over after {:.1}s, final score {}",
                    state.elapsed,
                    state.score
                );
                // Later pucks are not resolved this tick
                break;
            }
        }
    }

    state.pucks.retain(|p| !p.resolved);
}

/// Side of the puck that will reach the scoring line soonest
pub fn autopilot_side(state: &RoundState) -> Option<Side> {
    let line_y = state.geometry.line_y;
    state
        .pucks
        .iter()
        .filter(|p| !p.resolved)
        .filter_map(|p| p.time_to_line(line_y).map(|t| (t, p.target_side)))
        .min_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(_, side)| side)
}
