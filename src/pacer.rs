//! Self rate-limiting for code that runs on every loop pass.

use embassy_time::{Duration, Instant};

/// Fires at most once per `interval`.
///
/// A fresh pacer fires on the first check.
#[derive(Debug, Clone, Copy)]
pub struct Pacer {
    last: Option<Instant>,
    interval: Duration,
}

impl Pacer {
    pub const fn new(interval: Duration) -> Self {
        Self {
            last: None,
            interval,
        }
    }

    /// Returns `true` and records `now` if at least one interval has
    /// elapsed since the last time it fired
    pub fn ready(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last {
            if now.saturating_duration_since(last) < self.interval {
                return false;
            }
        }
        self.last = Some(now);
        true
    }

    /// Change the interval used for the next check
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    pub const fn interval(&self) -> Duration {
        self.interval
    }
}
