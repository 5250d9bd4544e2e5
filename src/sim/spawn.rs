//! Enemy spawn cadence and placement

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::clock::Timestamp;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH, SPAWN_INTERVAL};

/// A point on one of the four screen edges
pub type SpawnPoint = DVec2;

/// Spawns at most one enemy per `SPAWN_INTERVAL`, always on a screen edge
#[derive(Debug, Clone)]
pub struct SpawnScheduler {
    last_spawn: Timestamp,
    rng: Pcg32,
}

impl SpawnScheduler {
    /// `now` starts the first interval; nothing spawns before it elapses
    pub fn new(seed: u64, now: Timestamp) -> Self {
        Self {
            last_spawn: now,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn last_spawn(&self) -> Timestamp {
        self.last_spawn
    }

    /// Returns a spawn point if strictly more than `SPAWN_INTERVAL` has passed
    /// since the last spawn, and restarts the interval at `now`.
    pub fn maybe_spawn(&mut self, now: Timestamp) -> Option<SpawnPoint> {
        if now.saturating_sub(self.last_spawn) <= SPAWN_INTERVAL {
            return None;
        }
        self.last_spawn = now;
        Some(self.edge_point())
    }

    fn edge_point(&mut self) -> SpawnPoint {
        let on_vertical_edge = self.rng.random_bool(0.5);
        let (x, y) = if on_vertical_edge {
            let x = if self.rng.random_bool(0.5) { 0 } else { SCREEN_WIDTH };
            (x, self.rng.random_range(0..=SCREEN_HEIGHT))
        } else {
            let y = if self.rng.random_bool(0.5) { 0 } else { SCREEN_HEIGHT };
            (self.rng.random_range(0..=SCREEN_WIDTH), y)
        };
        DVec2::new(x as f64, y as f64)
    }
}
