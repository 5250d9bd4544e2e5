//! Platform abstraction layer
//!
//! Handles the native host for:
//! - Time/ticks
//! - Input events

pub mod input;
pub mod time;

pub use input::InputCollector;
pub use time::{SystemClock, TpsMeter};
