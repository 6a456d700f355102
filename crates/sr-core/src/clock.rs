//! Time sources for playback timing and auto-play ticks.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Monotonic time plus the ability to wait.
pub trait Clock {
    fn now(&self) -> Instant;

    /// Block until `period` has passed.
    fn sleep(&self, period: Duration);
}

/// Real time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&self, period: Duration) {
        std::thread::sleep(period);
    }
}

/// Virtual time that only moves when told to.
///
/// Clones share the same timeline, so a test can keep one handle and give
/// another to a controller. `sleep` advances the timeline instead of blocking.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }

    fn sleep(&self, period: Duration) {
        self.advance(period);
    }
}
