//! The repeating clock tick behind the live dashboard.

use std::time::{Duration, Instant};

/// Fixed-period tick source for the event loop.
///
/// A plain value owned by the runtime, so dropping the runtime stops the
/// tick with it. No background thread, nothing to cancel, no finalizer.
///
/// The event loop blocks on terminal input for at most `timeout()`, then
/// asks `tick()` whether the period elapsed. A late poll fires once and
/// rearms from the fire instant, so a stalled terminal never queues a
/// backlog of ticks.
#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    last: Instant,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            last: Instant::now(),
        }
    }

    /// Time the event loop may block before the next fire is due.
    pub fn timeout(&self) -> Duration {
        self.period.saturating_sub(self.last.elapsed())
    }

    /// Reports whether the period elapsed, rearming when it did.
    pub fn tick(&mut self) -> bool {
        if self.last.elapsed() >= self.period {
            self.last = Instant::now();
            true
        } else {
            false
        }
    }
}
