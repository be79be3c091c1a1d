//! Configuration errors
//!
//! The simulation itself never fails; only loading a level can.

use std::path::PathBuf;

/// Errors produced while loading or validating a level configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid level JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field}[{index}] = ({x}, {y}) is outside the unit square")]
    InvalidPoint {
        field: &'static str,
        index: usize,
        x: f32,
        y: f32,
    },
    #[error("line y_rel {0} is outside [0, 1]")]
    InvalidLine(f32),
    #[error("pucks from spawns[{spawn}] to targets[{target}] never reach the line")]
    UnreachableLine { spawn: usize, target: usize },
    #[error("invalid tuning: {0}")]
    InvalidTuning(String),
}
