//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering and
//! platform dependencies:
//! - Time comes in through the `Clock` abstraction
//! - Input comes in as a `TickInput` snapshot
//! - Seeded RNG only

pub mod clock;
pub mod input_buffer;
pub mod movement;
pub mod spawn;
pub mod state;
pub mod tick;

pub use clock::{Clock, ManualClock, Timestamp};
pub use input_buffer::InputBuffer;
pub use movement::{InvalidAimError, homing_step, projectile_velocity};
pub use spawn::{SpawnPoint, SpawnScheduler};
pub use state::{Enemy, EntityStore, Player, Projectile};
pub use tick::{InputDevice, SimState, TickInput, tick};
