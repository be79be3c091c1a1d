//! Goalie Clicker entry point
//!
//! Headless runner: loads a level, plays one round on autopilot at the fixed
//! tick rate and logs what happens. Rendering and audio belong to a host.
//!
//! Usage: `goalie-clicker [level_config.json] [seconds] [--seed N]`

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use goalie_clicker::consts::SIM_DT;
use goalie_clicker::sim::RoundEvent;
use goalie_clicker::{Command, LevelConfig, Session};

const DEFAULT_LEVEL: &str = "assets/level_config.json";
const DEFAULT_SECONDS: f32 = 60.0;

#[derive(Parser)]
#[command(name = "goalie-clicker")]
#[command(about = "Play one autopilot round of Goalie Clicker headlessly", long_about = None)]
struct Args {
    /// Level config JSON (built-in level if the file does not exist)
    #[arg(default_value = DEFAULT_LEVEL)]
    level: PathBuf,

    /// Seconds of play before stopping
    #[arg(default_value_t = DEFAULT_SECONDS, value_parser = parse_seconds)]
    seconds: f32,

    /// Override the session seed from the level's tuning
    #[arg(long)]
    seed: Option<u64>,
}

fn parse_seconds(s: &str) -> Result<f32, String> {
    let secs: f32 = s.parse().map_err(|e| format!("{e}"))?;
    if secs.is_finite() && secs > 0.0 {
        Ok(secs)
    } else {
        Err(format!("{secs} is not a positive number of seconds"))
    }
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Goalie Clicker (headless) starting...");

    let args = Args::parse();
    let seconds = args.seconds;

    let mut level = match LevelConfig::load(&args.level) {
        Ok(level) => level,
        Err(e) => {
            log::error!("Failed to load level: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(seed) = args.seed {
        level.tuning.seed = seed;
    }

    let mut session = Session::new(&level);
    session.set_idle_mode(true);
    session.handle(Command::StartRound);

    let ticks = (seconds / SIM_DT).ceil() as u64;
    let (mut saves, mut misses) = (0u32, 0u32);
    for _ in 0..ticks {
        for event in session.handle(Command::Tick(SIM_DT)) {
            match event {
                RoundEvent::PuckSpawned { id, velocity, .. } => {
                    log::debug!("puck {id} spawned at {:.0} px/s", velocity.length());
                }
                RoundEvent::Saved { puck_id, score } => {
                    saves += 1;
                    log::info!("SAVE puck {puck_id} -> score {score}");
                }
                RoundEvent::Missed { puck_id, lives } => {
                    misses += 1;
                    log::info!("GOAL puck {puck_id} -> lives {lives}");
                }
                RoundEvent::RoundEnded { final_score } => {
                    log::info!("Round ended with score {final_score}");
                }
            }
        }
        if !session.is_playing() {
            break;
        }
    }

    if let Some(round) = session.round() {
        println!(
            "{:.1}s played: {saves} saves, {misses} goals conceded, score {}, lives {}, speed x{:.2}",
            round.elapsed, round.score, round.lives, round.speed_mult
        );
    }
    ExitCode::SUCCESS
}
