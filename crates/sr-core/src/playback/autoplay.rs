//! Fixed-period auto-advance.
//!
//! A cooperative repeating timer: each firing waits one speed period on the
//! controller's clock, then performs exactly one `tick`. Pausing the
//! controller, from the observer or by reaching the end, cancels all
//! further firings. A tick already applied is never rolled back.

use std::time::Duration;

use tracing::debug;

use crate::clock::Clock;
use crate::playback::{PlaybackController, TickOutcome};

/// Summary of one auto-play run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoPlayReport {
    /// Timer firings, including the final one that paused playback.
    pub ticks: usize,
    /// Steps actually advanced.
    pub advanced: usize,
    /// Whether playback ended by reaching the last step (vs. being paused).
    pub finished: bool,
    pub final_cursor: usize,
    pub elapsed: Duration,
}

/// Drives a controller from its own clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoPlay;

impl AutoPlay {
    /// Start playback and fire until the controller is paused.
    ///
    /// `on_tick` sees the controller after every firing and may pause it,
    /// change its speed, or inspect it. The speed is re-read before each
    /// wait.
    pub fn run<C, F>(controller: &mut PlaybackController<C>, mut on_tick: F) -> AutoPlayReport
    where
        C: Clock,
        F: FnMut(&mut PlaybackController<C>, TickOutcome),
    {
        controller.play();
        let mut ticks = 0;
        let mut advanced = 0;
        let mut finished = false;

        while controller.is_playing() {
            let period = controller.speed().period();
            controller.clock().sleep(period);
            let outcome = controller.tick();
            ticks += 1;
            match outcome {
                TickOutcome::Advanced => advanced += 1,
                TickOutcome::Finished => finished = true,
                TickOutcome::Idle => {}
            }
            on_tick(controller, outcome);
        }

        debug!(
            session = %controller.session_id(),
            ticks,
            advanced,
            finished,
            "auto-play stopped"
        );
        AutoPlayReport {
            ticks,
            advanced,
            finished,
            final_cursor: controller.cursor(),
            elapsed: controller.elapsed(),
        }
    }
}
