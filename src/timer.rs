//! Deadline-based timers owned by the carousel.
//!
//! A `Timer` is plain data: it never runs code on its own. The owner polls
//! it with the current instant and acts when it reports that it fired.
//! Dropping or cancelling a timer guarantees it never fires again.

use std::time::{Duration, Instant};

/// Whether a timer re-arms itself after firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerMode {
    Once,
    Repeating,
}

/// A cancellable, restartable timer.
#[derive(Debug, Clone)]
pub struct Timer {
    period: Duration,
    mode: TimerMode,
    deadline: Option<Instant>,
}

impl Timer {
    /// Creates a disarmed one-shot timer.
    pub fn once(delay: Duration) -> Self {
        Self {
            period: delay,
            mode: TimerMode::Once,
            deadline: None,
        }
    }

    /// Creates a disarmed repeating timer.
    pub fn repeating(period: Duration) -> Self {
        Self {
            period,
            mode: TimerMode::Repeating,
            deadline: None,
        }
    }

    /// Arms (or re-arms) the timer so it fires one period after `now`.
    ///
    /// Re-arming an armed timer supersedes the previous deadline.
    pub fn start(&mut self, now: Instant) {
        self.deadline = Some(now + self.period);
    }

    /// Disarms the timer.
    ///
    /// Returns true if the timer was armed, so callers can tell a real
    /// cancellation from a no-op.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    /// Changes the period. An armed timer keeps its current deadline.
    pub fn set_period(&mut self, period: Duration) {
        self.period = period;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Checks the timer against `now`.
    ///
    /// Returns true at most once per deadline. A repeating timer schedules
    /// its next deadline from `now`, so ticks missed while the host was not
    /// polling are skipped rather than replayed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = match self.mode {
                    TimerMode::Once => None,
                    TimerMode::Repeating => Some(now + self.period),
                };
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_once_fires_exactly_once() {
        let t0 = Instant::now();
        let mut timer = Timer::once(Duration::from_millis(100));
        timer.start(t0);

        assert!(!timer.poll(t0 + Duration::from_millis(99)));
        assert!(timer.poll(t0 + Duration::from_millis(100)));
        assert!(!timer.poll(t0 + Duration::from_millis(500)));
        assert!(!timer.is_armed());
    }

    #[test]
    fn test_repeating_skips_missed_ticks() {
        let t0 = Instant::now();
        let mut timer = Timer::repeating(Duration::from_millis(100));
        timer.start(t0);

        // Host stalled for several periods: only one tick is reported.
        assert!(timer.poll(t0 + Duration::from_millis(450)));
        assert!(!timer.poll(t0 + Duration::from_millis(500)));
        assert!(timer.poll(t0 + Duration::from_millis(550)));
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let t0 = Instant::now();
        let mut timer = Timer::repeating(Duration::from_millis(100));
        timer.start(t0);

        assert!(timer.cancel());
        assert!(!timer.cancel());
        assert!(!timer.poll(t0 + Duration::from_secs(10)));
    }

    #[test]
    fn test_restart_supersedes_deadline() {
        let t0 = Instant::now();
        let mut timer = Timer::once(Duration::from_millis(100));
        timer.start(t0);
        timer.start(t0 + Duration::from_millis(80));

        assert!(!timer.poll(t0 + Duration::from_millis(120)));
        assert!(timer.poll(t0 + Duration::from_millis(180)));
    }
}
