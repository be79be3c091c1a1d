//! Puck spawn timing
//!
//! Owns its own seeded RNG so a round replays identically from its seed.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::difficulty::DifficultyRamp;
use super::puck::Puck;
use crate::consts::*;
use crate::layout::FieldGeometry;

/// Accumulates time and emits a puck whenever the spawn interval elapses
#[derive(Debug, Clone)]
pub struct SpawnScheduler {
    pub timer: f32,
    /// Base speed range before the multiplier (pixels/s)
    pub speed_min: f32,
    pub speed_max: f32,
    rng: Pcg32,
}

impl SpawnScheduler {
    pub fn new(seed: u64) -> Self {
        Self::with_speed_range(seed, PUCK_SPEED_MIN, PUCK_SPEED_MAX)
    }

    pub fn with_speed_range(seed: u64, speed_min: f32, speed_max: f32) -> Self {
        let (speed_min, speed_max) = if speed_min <= speed_max {
            (speed_min, speed_max)
        } else {
            (speed_max, speed_min)
        };
        Self {
            timer: 0.0,
            speed_min,
            speed_max,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Advance the timer by `dt`; returns a new puck if one is due.
    ///
    /// Spawn and target are independent uniform draws with replacement.
    pub fn step(
        &mut self,
        dt: f32,
        mult: f32,
        ramp: &DifficultyRamp,
        geometry: &FieldGeometry,
        id: u32,
    ) -> Option<Puck> {
        self.timer += dt;
        if self.timer < ramp.spawn_interval(mult) {
            return None;
        }
        if geometry.spawns.is_empty() || geometry.targets.is_empty() {
            return None;
        }
        self.timer = 0.0;

        let spawn = geometry.spawns[self.rng.random_range(0..geometry.spawns.len())];
        let target = geometry.targets[self.rng.random_range(0..geometry.targets.len())];
        let speed = self.rng.random_range(self.speed_min..=self.speed_max) * mult;

        Some(Puck::new(id, spawn, target, speed, geometry.midline_x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    use crate::layout::SceneLayout;

    fn geometry() -> FieldGeometry {
        SceneLayout::default().resolve(Vec2::new(FIELD_WIDTH, FIELD_HEIGHT))
    }

    #[test]
    fn test_spawns_on_interval() {
        let ramp = DifficultyRamp::default();
        let geometry = geometry();
        let mut spawner = SpawnScheduler::new(7);

        // 0.9 s interval at multiplier 1: nothing for 53 ticks, one puck within a second
        for tick in 0..53 {
            assert!(spawner.step(SIM_DT, 1.0, &ramp, &geometry, tick).is_none());
        }
        let spawned = (53..60)
            .filter(|&tick| spawner.step(SIM_DT, 1.0, &ramp, &geometry, tick).is_some())
            .count();
        assert_eq!(spawned, 1);
        assert!(spawner.timer < 0.1);
    }

    #[test]
    fn test_speed_and_points_in_range() {
        let ramp = DifficultyRamp::default();
        let geometry = geometry();
        let mut spawner = SpawnScheduler::new(99);

        for id in 0..200 {
            let puck = spawner.step(1.0, 2.0, &ramp, &geometry, id).unwrap();
            let speed = puck.vel.length();
            assert!((2.0 * PUCK_SPEED_MIN - 0.1..=2.0 * PUCK_SPEED_MAX + 0.1).contains(&speed));
            assert!(geometry.spawns.contains(&puck.spawn));
            assert!(geometry.targets.contains(&puck.target));
        }
    }

    #[test]
    fn test_all_pairs_reachable() {
        let ramp = DifficultyRamp::default();
        let geometry = geometry();
        let mut spawner = SpawnScheduler::new(3);
        let mut seen = [[false; 2]; 2];

        for id in 0..200 {
            let puck = spawner.step(1.0, 1.0, &ramp, &geometry, id).unwrap();
            let s = geometry.spawns.iter().position(|p| *p == puck.spawn).unwrap();
            let t = geometry.targets.iter().position(|p| *p == puck.target).unwrap();
            seen[s][t] = true;
        }
        assert!(seen.iter().flatten().all(|&hit| hit));
    }

    #[test]
    fn test_empty_geometry_never_spawns() {
        let ramp = DifficultyRamp::default();
        let mut geometry = geometry();
        geometry.targets.clear();
        let mut spawner = SpawnScheduler::new(1);
        assert!(spawner.step(10.0, 1.0, &ramp, &geometry, 1).is_none());
    }

    #[test]
    fn test_same_seed_same_pucks() {
        let ramp = DifficultyRamp::default();
        let geometry = geometry();
        let mut a = SpawnScheduler::new(1234);
        let mut b = SpawnScheduler::new(1234);
        for id in 0..20 {
            let pa = a.step(1.0, 1.0, &ramp, &geometry, id).unwrap();
            let pb = b.step(1.0, 1.0, &ramp, &geometry, id).unwrap();
            assert_eq!(pa.vel, pb.vel);
            assert_eq!(pa.target, pb.target);
        }
    }
}
