//! Frame composition
//!
//! Simulation entities carry no drawable resources; this module decides how
//! each one looks and emits vertices in logical screen coordinates.

use glam::{DVec2, Vec2};

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::consts::{ENEMY_SIZE, PLAYER_HALO_SIZE, PLAYER_SIZE, PROJECTILE_SIZE};
use crate::sim::SimState;

/// Top-left corner of the debug text
const DEBUG_TEXT_ORIGIN: Vec2 = Vec2::new(2.0, 2.0);

/// Collects draw calls for one frame
#[derive(Debug, Default)]
pub struct FrameBuilder {
    vertices: Vec<Vertex>,
}

impl FrameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Square sprite with its top-left corner at `position`
    pub fn draw_sprite(&mut self, position: DVec2, size: f32, color: [f32; 4]) {
        self.vertices
            .extend_from_slice(&shapes::square(position.as_vec2(), size, color));
    }

    pub fn draw_debug_text(&mut self, text: &str) {
        self.vertices
            .extend(shapes::text(DEBUG_TEXT_ORIGIN, text, colors::DEBUG_TEXT));
    }

    pub fn finish(self) -> Vec<Vertex> {
        self.vertices
    }
}

/// Build the full frame: enemies, player halo and body, projectiles, status line
pub fn build_frame(state: &SimState, tps: f64) -> Vec<Vertex> {
    let mut frame = FrameBuilder::new();

    for enemy in state.entities.enemies() {
        frame.draw_sprite(enemy.pos, ENEMY_SIZE, colors::ENEMY);
    }

    let player = state.player.pos;
    let halo_offset = DVec2::splat(PLAYER_HALO_SIZE as f64 / 2.0);
    let body_offset = DVec2::splat(PLAYER_SIZE as f64 / 2.0);
    frame.draw_sprite(player - halo_offset, PLAYER_HALO_SIZE, colors::PLAYER_HALO);
    frame.draw_sprite(player - body_offset, PLAYER_SIZE, colors::PLAYER);

    for projectile in state.entities.projectiles() {
        frame.draw_sprite(projectile.pos, PROJECTILE_SIZE, colors::PROJECTILE);
    }

    frame.draw_debug_text(&state.status_line(tps));
    frame.finish()
}
