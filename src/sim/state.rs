//! Simulation entities and the store that owns them

use glam::DVec2;

use super::clock::Timestamp;
use super::movement::homing_step;
use super::spawn::SpawnScheduler;
use crate::on_screen;

/// The defended point. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub pos: DVec2,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: crate::screen_center(),
        }
    }
}

/// An enemy homing toward the player
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Enemy {
    pub pos: DVec2,
}

/// A projectile moving at a constant velocity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    pub pos: DVec2,
    pub vel: DVec2,
}

impl Projectile {
    pub fn is_off_screen(&self) -> bool {
        !on_screen(self.pos)
    }
}

/// Owns all live enemies and projectiles.
///
/// Enemies are never removed: there is no despawn rule, so the enemy list
/// grows by one per spawn for the lifetime of the simulation.
#[derive(Debug, Clone)]
pub struct EntityStore {
    enemies: Vec<Enemy>,
    projectiles: Vec<Projectile>,
    spawner: SpawnScheduler,
}

impl EntityStore {
    pub fn new(spawner: SpawnScheduler) -> Self {
        Self {
            enemies: Vec::new(),
            projectiles: Vec::new(),
            spawner,
        }
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn spawner(&self) -> &SpawnScheduler {
        &self.spawner
    }

    /// Full entity update without player input: spawn, home, integrate, cull
    pub fn update(&mut self, player_pos: DVec2, now: Timestamp) {
        self.spawn_due(now);
        self.advance_enemies(player_pos);
        self.advance_projectiles();
        self.cull_projectiles();
    }

    /// Add an enemy if the spawn interval has elapsed
    pub fn spawn_due(&mut self, now: Timestamp) -> Option<Enemy> {
        let pos = self.spawner.maybe_spawn(now)?;
        let enemy = Enemy { pos };
        self.enemies.push(enemy);
        log::debug!(
            "enemy spawned at ({}, {}), {} alive",
            pos.x,
            pos.y,
            self.enemies.len()
        );
        Some(enemy)
    }

    /// Homing step for every enemy
    pub fn advance_enemies(&mut self, player_pos: DVec2) {
        for enemy in &mut self.enemies {
            enemy.pos = homing_step(enemy.pos, player_pos);
        }
    }

    pub fn fire(&mut self, from: DVec2, vel: DVec2) {
        self.projectiles.push(Projectile { pos: from, vel });
    }

    pub fn advance_projectiles(&mut self) {
        for projectile in &mut self.projectiles {
            projectile.pos += projectile.vel;
        }
    }

    /// Drop every projectile outside the screen rectangle
    pub fn cull_projectiles(&mut self) {
        self.projectiles.retain(|p| !p.is_off_screen());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn store() -> EntityStore {
        EntityStore::new(SpawnScheduler::new(12345, Duration::ZERO))
    }

    #[test]
    fn test_cull_boundary() {
        let mut store = store();
        store.fire(DVec2::new(641.0, 100.0), DVec2::ZERO);
        store.fire(DVec2::new(640.0, 100.0), DVec2::ZERO);
        store.fire(DVec2::new(0.0, 480.0), DVec2::ZERO);
        store.fire(DVec2::new(-0.001, 100.0), DVec2::ZERO);
        store.fire(DVec2::new(100.0, 480.5), DVec2::ZERO);
        store.cull_projectiles();

        let survivors: Vec<DVec2> = store.projectiles().iter().map(|p| p.pos).collect();
        assert_eq!(survivors.len(), 2);
        assert!(survivors.contains(&DVec2::new(640.0, 100.0)));
        assert!(survivors.contains(&DVec2::new(0.0, 480.0)));
    }

    #[test]
    fn test_cull_ignores_velocity() {
        let mut store = store();
        store.fire(DVec2::new(641.0, 100.0), DVec2::new(-5.0, 0.0));
        store.cull_projectiles();
        assert!(store.projectiles().is_empty());
    }

    #[test]
    fn test_projectile_leaves_on_the_tick_it_crosses() {
        let mut store = store();
        store.fire(DVec2::new(639.5, 240.0), DVec2::new(0.5, 0.0));

        store.update(Player::default().pos, Duration::ZERO);
        assert_eq!(store.projectiles().len(), 1);
        assert_eq!(store.projectiles()[0].pos.x, 640.0);

        store.update(Player::default().pos, Duration::ZERO);
        assert!(store.projectiles().is_empty());
    }

    #[test]
    fn test_update_spawns_and_homes() {
        let mut store = store();
        let player = Player::default().pos;

        store.update(player, Duration::from_secs(1));
        assert!(store.enemies().is_empty());

        store.update(player, Duration::from_secs(6));
        assert_eq!(store.enemies().len(), 1);

        // Spawned on an edge, then moved one step inward on each axis
        let pos = store.enemies()[0].pos;
        let start_x = pos.x - if pos.x < player.x { 0.1 } else { -0.1 };
        let start_y = pos.y - if pos.y < player.y { 0.1 } else { -0.1 };
        let on_edge = start_x.abs() < 1e-9
            || (start_x - 640.0).abs() < 1e-9
            || start_y.abs() < 1e-9
            || (start_y - 480.0).abs() < 1e-9;
        assert!(on_edge, "enemy did not start on an edge: {pos:?}");
    }

    #[test]
    fn test_enemies_are_never_removed() {
        let mut store = store();
        let player = Player::default().pos;
        for i in 1..=10u64 {
            store.update(player, Duration::from_secs(6 * i));
        }
        assert_eq!(store.enemies().len(), 10);

        // Enemies reaching the player stay alive
        for _ in 0..10_000 {
            store.advance_enemies(player);
        }
        assert_eq!(store.enemies().len(), 10);
        for enemy in store.enemies() {
            assert!(enemy.pos.distance(player) < 0.5);
        }
    }
}
