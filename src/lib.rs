//! Point Defense - hold the center against homing enemies
//!
//! Core modules:
//! - `sim`: Per-tick simulation (spawning, homing, projectiles, text input)
//! - `renderer`: wgpu quad pipeline and debug text
//! - `platform`: winit input collection, system clock, tick-rate meter
//! - `settings`: Optional JSON configuration
//! - `app`: Native event loop

pub mod app;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// Logical screen dimensions
    pub const SCREEN_WIDTH: i32 = 640;
    pub const SCREEN_HEIGHT: i32 = 480;
    pub const CENTER_X: i32 = SCREEN_WIDTH / 2;
    pub const CENTER_Y: i32 = SCREEN_HEIGHT / 2;

    /// Static window title
    pub const WINDOW_TITLE: &str = "Point Defense";

    /// Maximum number of typed characters kept in the input buffer
    pub const INPUT_CAPACITY: usize = 9;

    /// Minimum time between two enemy spawns
    pub const SPAWN_INTERVAL: Duration = Duration::from_secs(5);

    /// Per-axis distance an enemy moves toward the player each tick
    pub const HOMING_STEP: f64 = 0.1;

    /// Sprite sizes in logical pixels
    pub const ENEMY_SIZE: f32 = 10.0;
    pub const PLAYER_SIZE: f32 = 10.0;
    pub const PLAYER_HALO_SIZE: f32 = 20.0;
    pub const PROJECTILE_SIZE: f32 = 2.0;
}

/// Screen center as a position
#[inline]
pub fn screen_center() -> glam::DVec2 {
    glam::DVec2::new(consts::CENTER_X as f64, consts::CENTER_Y as f64)
}

/// True if `pos` lies inside the closed screen rectangle
#[inline]
pub fn on_screen(pos: glam::DVec2) -> bool {
    pos.x >= 0.0
        && pos.x <= consts::SCREEN_WIDTH as f64
        && pos.y >= 0.0
        && pos.y <= consts::SCREEN_HEIGHT as f64
}
