//! Level layout: spawn points, targets and the scoring line
//!
//! Everything is stored as fractions of the play-field so a level works at any
//! resolution. `SceneLayout::resolve` turns it into pixel space for one round.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::tuning::Tuning;

/// Default scoring line position (fraction of field height)
pub const DEFAULT_LINE_Y_REL: f32 = 0.78;

/// A point relative to the play-field, both coordinates in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RelPoint {
    pub x_rel: f32,
    pub y_rel: f32,
}

impl RelPoint {
    pub const fn new(x_rel: f32, y_rel: f32) -> Self {
        Self { x_rel, y_rel }
    }

    /// Scale into play-field pixels
    #[inline]
    pub fn to_field(self, field: Vec2) -> Vec2 {
        Vec2::new(self.x_rel * field.x, self.y_rel * field.y)
    }

    fn in_unit_square(self) -> bool {
        unit(self.x_rel) && unit(self.y_rel)
    }
}

#[inline]
fn unit(v: f32) -> bool {
    v.is_finite() && (0.0..=1.0).contains(&v)
}

/// Whether a puck launched from `spawn` toward `target` eventually crosses the
/// line. A coincident pair falls back to straight down.
fn reaches_line(spawn: RelPoint, target: RelPoint, line_y_rel: f32) -> bool {
    let dy = if spawn == target {
        1.0
    } else {
        target.y_rel - spawn.y_rel
    };
    (spawn.y_rel < line_y_rel && dy > 0.0) || (spawn.y_rel > line_y_rel && dy < 0.0)
}

/// Built-in spawns: two symmetric points high on the field
pub fn default_spawns() -> Vec<RelPoint> {
    vec![RelPoint::new(0.08, 0.25), RelPoint::new(0.92, 0.25)]
}

/// Built-in targets: one on each side of the midline
pub fn default_targets() -> Vec<RelPoint> {
    vec![RelPoint::new(0.35, 0.45), RelPoint::new(0.65, 0.45)]
}

/// Static geometry for a round. Immutable once the round starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneLayout {
    pub spawns: Vec<RelPoint>,
    pub targets: Vec<RelPoint>,
    pub line_y_rel: f32,
}

impl Default for SceneLayout {
    fn default() -> Self {
        Self {
            spawns: default_spawns(),
            targets: default_targets(),
            line_y_rel: DEFAULT_LINE_Y_REL,
        }
    }
}

impl SceneLayout {
    /// Build a layout, substituting defaults for empty sequences
    pub fn new(spawns: Vec<RelPoint>, targets: Vec<RelPoint>, line_y_rel: f32) -> Self {
        let mut layout = Self {
            spawns,
            targets,
            line_y_rel,
        };
        layout.fill_defaults();
        layout
    }

    fn fill_defaults(&mut self) {
        if self.spawns.is_empty() {
            log::warn!("Level has no spawns, using built-in defaults");
            self.spawns = default_spawns();
        }
        if self.targets.is_empty() {
            log::warn!("Level has no targets, using built-in defaults");
            self.targets = default_targets();
        }
    }

    /// Check every coordinate lies in the unit square and every spawn/target
    /// pair heads toward the line
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, points) in [("spawns", &self.spawns), ("targets", &self.targets)] {
            if let Some((index, p)) = points.iter().enumerate().find(|(_, p)| !p.in_unit_square()) {
                return Err(ConfigError::InvalidPoint {
                    field,
                    index,
                    x: p.x_rel,
                    y: p.y_rel,
                });
            }
        }
        if !unit(self.line_y_rel) {
            return Err(ConfigError::InvalidLine(self.line_y_rel));
        }
        for (spawn, s) in self.spawns.iter().enumerate() {
            for (target, t) in self.targets.iter().enumerate() {
                if !reaches_line(*s, *t, self.line_y_rel) {
                    return Err(ConfigError::UnreachableLine { spawn, target });
                }
            }
        }
        Ok(())
    }

    /// Convert to pixel space for a play-field of the given size
    pub fn resolve(&self, field: Vec2) -> FieldGeometry {
        FieldGeometry {
            size: field,
            spawns: self.spawns.iter().map(|p| p.to_field(field)).collect(),
            targets: self.targets.iter().map(|p| p.to_field(field)).collect(),
            line_y: self.line_y_rel * field.y,
            midline_x: field.x * 0.5,
        }
    }
}

/// Round geometry in play-field pixels
#[derive(Debug, Clone, PartialEq)]
pub struct FieldGeometry {
    pub size: Vec2,
    pub spawns: Vec<Vec2>,
    pub targets: Vec<Vec2>,
    /// Scoring line (y grows downward)
    pub line_y: f32,
    /// Targets left of this x belong to the left goalie
    pub midline_x: f32,
}

/// Goalkeeper sprite placement, passed through to the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalieMarker {
    #[serde(default)]
    pub img: Option<String>,
    pub x_rel: f32,
    pub y_rel: f32,
    #[serde(default = "one")]
    pub scale: f32,
}

impl GoalieMarker {
    fn at(x_rel: f32, y_rel: f32) -> Self {
        Self {
            img: None,
            x_rel,
            y_rel,
            scale: 1.0,
        }
    }
}

/// Background image placement, passed through to the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Background {
    pub path: Option<String>,
    #[serde(default)]
    pub x_rel: f32,
    #[serde(default)]
    pub y_rel: f32,
    #[serde(default = "one")]
    pub scale: f32,
}

fn one() -> f32 {
    1.0
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct LineConfig {
    #[serde(default = "default_line")]
    y_rel: f32,
}

fn default_line() -> f32 {
    DEFAULT_LINE_Y_REL
}

/// On-disk shape of `level_config.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct RawLevel {
    spawns: Vec<RelPoint>,
    targets: Vec<RelPoint>,
    line: Option<LineConfig>,
    #[serde(rename = "goalieL")]
    goalie_l: Option<GoalieMarker>,
    #[serde(rename = "goalieR")]
    goalie_r: Option<GoalieMarker>,
    bg: Option<Background>,
    tuning: Tuning,
}

/// A fully loaded level: layout for the core plus host-only extras
#[derive(Debug, Clone, PartialEq)]
pub struct LevelConfig {
    pub layout: SceneLayout,
    pub tuning: Tuning,
    pub goalie_left: GoalieMarker,
    pub goalie_right: GoalieMarker,
    pub background: Option<Background>,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            layout: SceneLayout::default(),
            tuning: Tuning::default(),
            goalie_left: GoalieMarker::at(0.22, 0.55),
            goalie_right: GoalieMarker::at(0.62, 0.55),
            background: None,
        }
    }
}

impl LevelConfig {
    /// Parse and validate a level from JSON text
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawLevel = serde_json::from_str(json)?;
        let defaults = Self::default();

        let line_y_rel = raw.line.map_or(DEFAULT_LINE_Y_REL, |l| l.y_rel);
        let layout = SceneLayout::new(raw.spawns, raw.targets, line_y_rel);
        layout.validate()?;
        raw.tuning.validate()?;

        Ok(Self {
            layout,
            tuning: raw.tuning,
            goalie_left: raw.goalie_l.unwrap_or(defaults.goalie_left),
            goalie_right: raw.goalie_r.unwrap_or(defaults.goalie_right),
            background: raw.bg,
        })
    }

    /// Load a level file; a missing file yields the built-in level
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No level config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let level = Self::from_json(&json)?;
        log::info!(
            "Loaded level from {}: {} spawns, {} targets, line at {:.3}",
            path.display(),
            level.layout.spawns.len(),
            level.layout.targets.len(),
            level.layout.line_y_rel
        );
        Ok(level)
    }
}
