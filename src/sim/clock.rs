//! Time source abstraction
//!
//! Timestamps are durations since the clock's own reference point, so the
//! simulation never touches wall-clock time directly.

use std::cell::Cell;
use std::time::Duration;

/// Monotonic time since a clock's reference point
pub type Timestamp = Duration;

/// A monotonic time source
pub trait Clock {
    /// Current time
    fn now(&self) -> Timestamp;

    /// Time elapsed since `reference` (zero if `reference` is in the future)
    fn elapsed_since(&self, reference: Timestamp) -> Duration {
        self.now().saturating_sub(reference)
    }
}

/// Hand-driven clock for tests and replays
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn new(start: Timestamp) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    pub fn set(&self, now: Timestamp) {
        self.now.set(now);
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_advances() {
        let clock = ManualClock::new(Duration::from_secs(1));
        clock.advance(Duration::from_millis(500));
        assert_eq!(clock.now(), Duration::from_millis(1500));
        assert_eq!(
            clock.elapsed_since(Duration::from_secs(1)),
            Duration::from_millis(500)
        );
    }

    #[test]
    fn test_elapsed_since_future_is_zero() {
        let clock = ManualClock::new(Duration::from_secs(2));
        assert_eq!(clock.elapsed_since(Duration::from_secs(3)), Duration::ZERO);
    }
}
