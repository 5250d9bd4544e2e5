//! System clock and tick-rate measurement

use std::time::{Duration, Instant};

use crate::sim::{Clock, Timestamp};

/// Number of tick timestamps in the rolling TPS window
const TPS_WINDOW: usize = 60;

/// Monotonic clock measured from its creation
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        self.origin.elapsed()
    }
}

/// Ticks per second over the last `TPS_WINDOW` ticks
#[derive(Debug, Clone)]
pub struct TpsMeter {
    tick_times: [Option<Timestamp>; TPS_WINDOW],
    index: usize,
    tps: f64,
}

impl Default for TpsMeter {
    fn default() -> Self {
        Self {
            tick_times: [None; TPS_WINDOW],
            index: 0,
            tps: 0.0,
        }
    }
}

impl TpsMeter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a tick at `now` and refresh the rate
    pub fn record(&mut self, now: Timestamp) {
        self.tick_times[self.index] = Some(now);
        self.index = (self.index + 1) % TPS_WINDOW;

        // Slot at `index` now holds the oldest sample once the ring is full
        let oldest = self.tick_times[self.index].or(self.tick_times[0]);
        let recorded = self.tick_times.iter().flatten().count();
        if let Some(oldest) = oldest {
            let elapsed = now.saturating_sub(oldest);
            if elapsed > Duration::ZERO {
                self.tps = (recorded - 1) as f64 / elapsed.as_secs_f64();
            }
        }
    }

    pub fn tps(&self) -> f64 {
        self.tps
    }
}
