//! Per-frame simulation tick
//!
//! One call to [`tick`] is one synchronous pass over the game state. The step
//! order is part of the contract: later steps see the effects of earlier ones
//! within the same tick.

use super::clock::Timestamp;
use super::input_buffer::InputBuffer;
use super::movement::projectile_velocity;
use super::spawn::SpawnScheduler;
use super::state::{EntityStore, Player};
use crate::consts::{CENTER_X, CENTER_Y};

/// Source of player input, polled once per tick
pub trait InputDevice {
    /// Pointer position in logical screen coordinates
    fn cursor_position(&self) -> (i32, i32);
    /// True once per physical press of the delete key
    fn is_backspace_just_pressed(&mut self) -> bool;
    /// True on every tick the fire button is down
    fn is_fire_held(&self) -> bool;
    /// Characters typed since the last drain
    fn drain_typed_chars(&mut self) -> Vec<char>;
}

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Characters typed since the previous tick
    pub typed: Vec<char>,
    /// Delete key went down since the previous tick
    pub backspace: bool,
    /// Pointer position in logical screen coordinates
    pub cursor: (i32, i32),
    /// Fire button currently held
    pub fire: bool,
}

impl TickInput {
    pub fn poll<D: InputDevice + ?Sized>(device: &mut D) -> Self {
        Self {
            typed: device.drain_typed_chars(),
            backspace: device.is_backspace_just_pressed(),
            cursor: device.cursor_position(),
            fire: device.is_fire_held(),
        }
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct SimState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Ticks processed so far
    pub frame_count: u64,
    /// Pointer position as of the last tick
    pub cursor: (i32, i32),
    pub player: Player,
    pub input: InputBuffer,
    pub entities: EntityStore,
}

impl SimState {
    /// New simulation. The first enemy can appear one spawn interval after `now`.
    pub fn new(seed: u64, now: Timestamp) -> Self {
        Self {
            seed,
            frame_count: 0,
            cursor: (0, 0),
            player: Player::default(),
            input: InputBuffer::new(),
            entities: EntityStore::new(SpawnScheduler::new(seed, now)),
        }
    }

    /// Debug status line shown at the top of the screen
    pub fn status_line(&self, tps: f64) -> String {
        format!(
            "Mx: {} My: {} Frame Count: {} TPS: {:.2} {}",
            self.cursor.0,
            self.cursor.1,
            self.frame_count,
            tps,
            self.input.as_string()
        )
    }
}

/// Advance the game state by one tick
pub fn tick(state: &mut SimState, input: &TickInput, now: Timestamp) {
    state.frame_count += 1;

    state.input.append(input.typed.iter().copied());

    state.entities.spawn_due(now);
    state.entities.advance_enemies(state.player.pos);

    if input.backspace {
        state.input.delete_last();
    }

    state.cursor = input.cursor;

    // Level-triggered: one projectile per tick while held
    if input.fire {
        match projectile_velocity(state.cursor, (CENTER_X, CENTER_Y)) {
            Ok(vel) => state.entities.fire(crate::screen_center(), vel),
            Err(err) => log::trace!("projectile suppressed: {err}"),
        }
    }

    state.entities.advance_projectiles();
    state.entities.cull_projectiles();
}
