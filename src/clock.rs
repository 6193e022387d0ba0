//! Time sources for carousel timers.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of the current instant.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same elapsed time, so a test can keep one handle and
/// pass another into the carousel.
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Instant,
    elapsed: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            elapsed: Rc::new(Cell::new(Duration::ZERO)),
        }
    }

    /// Moves the clock forward.
    pub fn advance(&self, by: Duration) {
        self.elapsed.set(self.elapsed.get() + by);
    }

    /// Convenience for `advance(Duration::from_millis(ms))`.
    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }

    /// Time elapsed since the clock was created.
    pub fn elapsed(&self) -> Duration {
        self.elapsed.get()
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.elapsed.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_shared_between_clones() {
        let clock = ManualClock::new();
        let other = clock.clone();
        let start = other.now();

        clock.advance_ms(250);

        assert_eq!(other.now() - start, Duration::from_millis(250));
        assert_eq!(other.elapsed(), Duration::from_millis(250));
    }
}
