//! The playback state machine.
//!
//! ```text
//!            play / toggle
//!   Paused ─────────────────▶ Playing
//!     ▲  ◀─────────────────     │
//!     │   pause / toggle /      │ tick (advance one step)
//!     │   tick at last step     ▼
//!     │                       Playing
//!     │
//!     └── reset / reconfigure / set_algorithm / shuffle / resize
//!         (always Paused, cursor 0, trace discarded, timing cleared)
//! ```
//!
//! The trace is generated lazily on the first navigation request after a
//! reset and shared as `Arc<Trace>` so observers can hold it freely.

use std::borrow::Cow;
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::Rng;
use serde::Serialize;
use sr_common::{Result, SessionId};
use sr_config::{InputSize, PlaybackConfig, Speed};
use sr_trace::{AlgorithmKind, Step, Trace, TraceMetrics};
use tracing::{debug, info, trace};

use crate::clock::{Clock, SystemClock};
use crate::input::random_input;

/// Whether auto-play is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackMode {
    Playing,
    Paused,
}

/// What a single auto-play tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not playing; nothing happened.
    Idle,
    /// Cursor moved forward by one.
    Advanced,
    /// Cursor was already on the last step; playback paused itself.
    Finished,
}

/// Serializable view of the controller for presentation layers.
#[derive(Debug, Clone, Serialize)]
pub struct PlaybackSnapshot {
    pub cursor: usize,
    /// `None` until a trace has been generated.
    pub trace_len: Option<usize>,
    pub mode: PlaybackMode,
    pub algorithm: AlgorithmKind,
    pub step: Step,
    pub totals: TraceMetrics,
    pub progress: TraceMetrics,
    pub elapsed_ms: u64,
}

/// Owns one trace and a cursor into it.
///
/// Every instance keeps its own timing state; nothing is global.
#[derive(Debug)]
pub struct PlaybackController<C: Clock = SystemClock> {
    session: SessionId,
    input: Vec<i32>,
    algorithm: AlgorithmKind,
    speed: Speed,
    trace: Option<Arc<Trace>>,
    cursor: usize,
    mode: PlaybackMode,
    elapsed: Duration,
    play_started: Option<Instant>,
    clock: C,
}

impl PlaybackController<SystemClock> {
    pub fn new(input: Vec<i32>, algorithm: AlgorithmKind) -> Result<Self> {
        Self::with_clock(input, algorithm, SystemClock)
    }
}

impl<C: Clock> PlaybackController<C> {
    /// Fails if `input` is longer than the configured maximum.
    pub fn with_clock(input: Vec<i32>, algorithm: AlgorithmKind, clock: C) -> Result<Self> {
        InputSize::new(input.len())?;
        Ok(Self {
            session: SessionId::new(),
            input,
            algorithm,
            speed: Speed::default(),
            trace: None,
            cursor: 0,
            mode: PlaybackMode::Paused,
            elapsed: Duration::ZERO,
            play_started: None,
            clock,
        })
    }

    /// Build from resolved configuration; `input` is used as given.
    pub fn from_config(config: &PlaybackConfig, input: Vec<i32>, clock: C) -> Result<Self> {
        let mut controller = Self::with_clock(input, config.algorithm, clock)?;
        controller.speed = config.speed()?;
        Ok(controller)
    }

    // ── navigation ─────────────────────────────────────────────────────

    /// Generate the trace if none is held. A held trace is returned as is.
    pub fn ensure_trace(&mut self) -> &Arc<Trace> {
        if self.trace.is_none() {
            self.cursor = 0;
        }
        let input = &self.input;
        let algorithm = self.algorithm;
        let session = &self.session;
        self.trace.get_or_insert_with(|| {
            let generated = algorithm.generate(input);
            debug!(
                session = %session,
                %algorithm,
                input_len = input.len(),
                steps = generated.len(),
                "trace generated"
            );
            Arc::new(generated)
        })
    }

    pub fn play(&mut self) {
        self.ensure_trace();
        if self.mode == PlaybackMode::Playing {
            return;
        }
        self.mode = PlaybackMode::Playing;
        self.play_started = Some(self.clock.now());
        debug!(session = %self.session, cursor = self.cursor, "playback started");
    }

    /// Bank the running interval and stop. No-op when already paused.
    pub fn pause(&mut self) {
        if self.mode != PlaybackMode::Playing {
            return;
        }
        if let Some(started) = self.play_started.take() {
            self.elapsed += self.clock.now().saturating_duration_since(started);
        }
        self.mode = PlaybackMode::Paused;
        debug!(
            session = %self.session,
            cursor = self.cursor,
            elapsed_ms = self.elapsed.as_millis() as u64,
            "playback paused"
        );
    }

    pub fn toggle(&mut self) {
        match self.mode {
            PlaybackMode::Playing => self.pause(),
            PlaybackMode::Paused => self.play(),
        }
    }

    /// Advance one step, saturating at the last one.
    pub fn step_forward(&mut self) {
        let last = self.ensure_trace().last_index();
        if self.cursor < last {
            self.cursor += 1;
        }
        trace!(session = %self.session, cursor = self.cursor, "step forward");
    }

    /// Go back one step, saturating at zero.
    pub fn step_backward(&mut self) {
        self.ensure_trace();
        self.cursor = self.cursor.saturating_sub(1);
        trace!(session = %self.session, cursor = self.cursor, "step backward");
    }

    /// One firing of the auto-play clock.
    ///
    /// The tick that lands on the last step leaves playback running; the
    /// next one finds nothing left and pauses.
    pub fn tick(&mut self) -> TickOutcome {
        if self.mode != PlaybackMode::Playing {
            return TickOutcome::Idle;
        }
        let last = self.ensure_trace().last_index();
        if self.cursor >= last {
            self.pause();
            info!(session = %self.session, steps = last + 1, "auto-play reached end of trace");
            return TickOutcome::Finished;
        }
        self.step_forward();
        TickOutcome::Advanced
    }

    // ── configuration ──────────────────────────────────────────────────

    /// Return to the initial state for the current input and algorithm.
    pub fn reset(&mut self) {
        self.mode = PlaybackMode::Paused;
        self.cursor = 0;
        self.trace = None;
        self.elapsed = Duration::ZERO;
        self.play_started = None;
        debug!(session = %self.session, "playback reset");
    }

    /// Adopt a new input (and optionally algorithm), discarding the trace.
    ///
    /// On error nothing changes.
    pub fn reconfigure(&mut self, input: Vec<i32>, algorithm: Option<AlgorithmKind>) -> Result<()> {
        InputSize::new(input.len())?;
        self.reset();
        self.input = input;
        if let Some(algorithm) = algorithm {
            self.algorithm = algorithm;
        }
        debug!(
            session = %self.session,
            algorithm = %self.algorithm,
            input_len = self.input.len(),
            "reconfigured"
        );
        Ok(())
    }

    pub fn set_algorithm(&mut self, algorithm: AlgorithmKind) {
        self.reset();
        self.algorithm = algorithm;
        debug!(session = %self.session, %algorithm, "algorithm changed");
    }

    /// Replace the input with fresh random values of the same length.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let size = InputSize::new(self.input.len()).unwrap_or_default();
        self.reset();
        self.input = random_input(size, rng);
    }

    /// Replace the input with `size` fresh random values.
    pub fn resize<R: Rng + ?Sized>(&mut self, size: InputSize, rng: &mut R) {
        self.reset();
        self.input = random_input(size, rng);
        debug!(session = %self.session, size = size.get(), "resized");
    }

    /// Takes effect from the next auto-play tick.
    pub fn set_speed(&mut self, speed_ms: u64) -> Result<()> {
        self.speed = Speed::from_millis(speed_ms)?;
        Ok(())
    }

    // ── accessors ──────────────────────────────────────────────────────

    pub fn session_id(&self) -> &SessionId {
        &self.session
    }

    pub fn input(&self) -> &[i32] {
        &self.input
    }

    pub fn algorithm(&self) -> AlgorithmKind {
        self.algorithm
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    pub fn is_playing(&self) -> bool {
        self.mode == PlaybackMode::Playing
    }

    pub fn trace(&self) -> Option<&Arc<Trace>> {
        self.trace.as_ref()
    }

    pub fn trace_len(&self) -> Option<usize> {
        self.trace.as_ref().map(|t| t.len())
    }

    /// Step under the cursor, or an idle step over the input when no trace
    /// exists yet.
    pub fn current_step(&self) -> Cow<'_, Step> {
        match &self.trace {
            Some(trace) => Cow::Borrowed(trace.at_clamped(self.cursor)),
            None => Cow::Owned(Step::idle(self.input.clone())),
        }
    }

    /// Whole-trace counts; zero before a trace exists.
    pub fn totals(&self) -> TraceMetrics {
        self.trace.as_ref().map(|t| t.totals()).unwrap_or_default()
    }

    /// Counts over steps up to and including the cursor.
    pub fn progress(&self) -> TraceMetrics {
        self.trace
            .as_ref()
            .map(|t| t.progress(self.cursor))
            .unwrap_or_default()
    }

    /// Time spent playing, including the interval in progress.
    pub fn elapsed(&self) -> Duration {
        match self.play_started {
            Some(started) => self.elapsed + self.clock.now().saturating_duration_since(started),
            None => self.elapsed,
        }
    }

    /// Time banked by `pause` only.
    pub fn elapsed_accumulated(&self) -> Duration {
        self.elapsed
    }

    /// `"{cursor + 1}/{len}"`, or `"—"` without a trace.
    pub fn progress_label(&self) -> String {
        match &self.trace {
            Some(trace) => format!("{}/{}", self.cursor + 1, trace.len()),
            None => "—".to_string(),
        }
    }

    pub fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            cursor: self.cursor,
            trace_len: self.trace_len(),
            mode: self.mode,
            algorithm: self.algorithm,
            step: self.current_step().into_owned(),
            totals: self.totals(),
            progress: self.progress(),
            elapsed_ms: self.elapsed().as_millis() as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use sr_trace::StepKind;

    fn controller(input: &[i32], algorithm: AlgorithmKind) -> (PlaybackController<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let ctl = PlaybackController::with_clock(input.to_vec(), algorithm, clock.clone()).unwrap();
        (ctl, clock)
    }

    #[test]
    fn starts_idle_without_trace() {
        let (ctl, _) = controller(&[5, 3, 1], AlgorithmKind::Bubble);
        assert!(ctl.trace().is_none());
        assert_eq!(ctl.cursor(), 0);
        assert_eq!(ctl.mode(), PlaybackMode::Paused);
        assert!(ctl.current_step().is_sentinel());
        assert_eq!(ctl.current_step().arr, vec![5, 3, 1]);
        assert_eq!(ctl.totals(), TraceMetrics::default());
        assert_eq!(ctl.progress_label(), "—");
    }

    #[test]
    fn ensure_trace_is_idempotent() {
        let (mut ctl, _) = controller(&[4, 2, 3], AlgorithmKind::Quick);
        let first = Arc::clone(ctl.ensure_trace());
        ctl.step_forward();
        let second = Arc::clone(ctl.ensure_trace());
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(ctl.cursor(), 1);
    }

    #[test]
    fn step_forward_generates_and_clamps() {
        let (mut ctl, _) = controller(&[5, 3, 1], AlgorithmKind::Bubble);
        ctl.step_forward();
        assert_eq!(ctl.trace_len(), Some(8));
        assert_eq!(ctl.cursor(), 1);
        assert_eq!(ctl.current_step().kind, StepKind::Compare);

        for _ in 0..20 {
            ctl.step_forward();
        }
        assert_eq!(ctl.cursor(), 7);
        assert_eq!(ctl.current_step().arr, vec![1, 3, 5]);
        assert_eq!(ctl.progress(), ctl.totals());
        assert_eq!(ctl.progress_label(), "8/8");
    }

    #[test]
    fn step_backward_clamps_at_zero() {
        let (mut ctl, _) = controller(&[2, 1], AlgorithmKind::Insertion);
        ctl.step_backward();
        assert!(ctl.trace().is_some());
        assert_eq!(ctl.cursor(), 0);
        ctl.step_forward();
        ctl.step_backward();
        ctl.step_backward();
        assert_eq!(ctl.cursor(), 0);
    }

    #[test]
    fn pause_banks_elapsed_time() {
        let (mut ctl, clock) = controller(&[3, 2, 1], AlgorithmKind::Selection);
        ctl.play();
        clock.advance(Duration::from_millis(120));
        assert_eq!(ctl.elapsed(), Duration::from_millis(120));
        assert_eq!(ctl.elapsed_accumulated(), Duration::ZERO);

        ctl.pause();
        clock.advance(Duration::from_millis(500));
        assert_eq!(ctl.elapsed_accumulated(), Duration::from_millis(120));
        assert_eq!(ctl.elapsed(), Duration::from_millis(120));

        ctl.play();
        clock.advance(Duration::from_millis(30));
        ctl.pause();
        assert_eq!(ctl.elapsed_accumulated(), Duration::from_millis(150));
    }

    #[test]
    fn pause_when_paused_is_noop() {
        let (mut ctl, clock) = controller(&[1], AlgorithmKind::Merge);
        clock.advance(Duration::from_millis(10));
        ctl.pause();
        assert_eq!(ctl.elapsed_accumulated(), Duration::ZERO);
        assert!(ctl.trace().is_none());
    }

    #[test]
    fn play_twice_keeps_original_start() {
        let (mut ctl, clock) = controller(&[3, 1, 2], AlgorithmKind::Bubble);
        ctl.play();
        clock.advance(Duration::from_millis(40));
        ctl.play();
        clock.advance(Duration::from_millis(40));
        ctl.pause();
        assert_eq!(ctl.elapsed_accumulated(), Duration::from_millis(80));
    }

    #[test]
    fn toggle_flips_mode() {
        let (mut ctl, _) = controller(&[3, 1, 2], AlgorithmKind::Bubble);
        ctl.toggle();
        assert!(ctl.is_playing());
        ctl.toggle();
        assert!(!ctl.is_playing());
    }

    #[test]
    fn tick_pauses_on_the_tick_after_the_end() {
        let (mut ctl, _) = controller(&[2, 1], AlgorithmKind::Bubble);
        // sentinel, compare, mutate, sentinel
        ctl.play();
        assert_eq!(ctl.tick(), TickOutcome::Advanced);
        assert_eq!(ctl.tick(), TickOutcome::Advanced);
        assert_eq!(ctl.tick(), TickOutcome::Advanced);
        assert_eq!(ctl.cursor(), 3);
        assert!(ctl.is_playing());
        assert_eq!(ctl.tick(), TickOutcome::Finished);
        assert!(!ctl.is_playing());
        assert_eq!(ctl.cursor(), 3);
        assert_eq!(ctl.tick(), TickOutcome::Idle);
    }

    #[test]
    fn tick_while_paused_is_idle() {
        let (mut ctl, _) = controller(&[2, 1], AlgorithmKind::Bubble);
        assert_eq!(ctl.tick(), TickOutcome::Idle);
        assert!(ctl.trace().is_none());
    }

    #[test]
    fn reset_discards_everything() {
        let (mut ctl, clock) = controller(&[3, 1, 2], AlgorithmKind::Merge);
        ctl.play();
        ctl.tick();
        clock.advance(Duration::from_millis(90));
        ctl.reset();
        assert!(ctl.trace().is_none());
        assert_eq!(ctl.cursor(), 0);
        assert_eq!(ctl.mode(), PlaybackMode::Paused);
        assert_eq!(ctl.elapsed(), Duration::ZERO);
        assert_eq!(ctl.input(), &[3, 1, 2]);
        assert_eq!(ctl.algorithm(), AlgorithmKind::Merge);
    }

    #[test]
    fn reconfigure_replaces_trace() {
        let (mut ctl, _) = controller(&[3, 1, 2], AlgorithmKind::Bubble);
        let before = Arc::clone(ctl.ensure_trace());
        ctl.reconfigure(vec![9, 8], Some(AlgorithmKind::Quick)).unwrap();
        assert!(ctl.trace().is_none());
        let after = Arc::clone(ctl.ensure_trace());
        assert!(!Arc::ptr_eq(&before, &after));
        assert_eq!(after.algorithm(), AlgorithmKind::Quick);
        assert_eq!(after.final_array(), &[8, 9]);
    }

    #[test]
    fn reconfigure_keeps_algorithm_when_omitted() {
        let (mut ctl, _) = controller(&[1, 2], AlgorithmKind::Selection);
        ctl.reconfigure(vec![2, 1], None).unwrap();
        assert_eq!(ctl.algorithm(), AlgorithmKind::Selection);
    }

    #[test]
    fn reconfigure_rejects_oversized_input_without_side_effects() {
        let (mut ctl, _) = controller(&[3, 1, 2], AlgorithmKind::Bubble);
        ctl.step_forward();
        let huge = vec![1; sr_config::MAX_SIZE + 1];
        assert!(ctl.reconfigure(huge, None).is_err());
        assert_eq!(ctl.cursor(), 1);
        assert_eq!(ctl.input(), &[3, 1, 2]);
    }

    #[test]
    fn set_algorithm_resets() {
        let (mut ctl, _) = controller(&[3, 1, 2], AlgorithmKind::Bubble);
        ctl.play();
        ctl.set_algorithm(AlgorithmKind::Insertion);
        assert!(ctl.trace().is_none());
        assert!(!ctl.is_playing());
        assert_eq!(ctl.algorithm(), AlgorithmKind::Insertion);
    }

    #[test]
    fn shuffle_keeps_length() {
        let (mut ctl, _) = controller(&[1, 2, 3, 4, 5, 6], AlgorithmKind::Bubble);
        ctl.ensure_trace();
        let mut rng = StdRng::seed_from_u64(7);
        ctl.shuffle(&mut rng);
        assert_eq!(ctl.input().len(), 6);
        assert!(ctl.trace().is_none());
        assert!(ctl.input().iter().all(|v| (5..=100).contains(v)));
    }

    #[test]
    fn resize_changes_length() {
        let (mut ctl, _) = controller(&[1, 2, 3], AlgorithmKind::Bubble);
        let mut rng = StdRng::seed_from_u64(1);
        ctl.resize(InputSize::new(25).unwrap(), &mut rng);
        assert_eq!(ctl.input().len(), 25);
    }

    #[test]
    fn speed_is_validated() {
        let (mut ctl, _) = controller(&[1], AlgorithmKind::Bubble);
        assert!(ctl.set_speed(200).is_ok());
        assert_eq!(ctl.speed().as_millis(), 200);
        assert!(ctl.set_speed(201).is_err());
        assert_eq!(ctl.speed().as_millis(), 200);
    }

    #[test]
    fn from_config_applies_speed() {
        let config = PlaybackConfig {
            algorithm: AlgorithmKind::Merge,
            speed_ms: 25,
            ..PlaybackConfig::default()
        };
        let ctl = PlaybackController::from_config(&config, vec![2, 1], ManualClock::new()).unwrap();
        assert_eq!(ctl.speed().as_millis(), 25);
        assert_eq!(ctl.algorithm(), AlgorithmKind::Merge);
    }

    #[test]
    fn snapshot_reflects_state() {
        let (mut ctl, _) = controller(&[5, 3, 1], AlgorithmKind::Bubble);
        ctl.step_forward();
        ctl.step_forward();
        let snap = ctl.snapshot();
        assert_eq!(snap.cursor, 2);
        assert_eq!(snap.trace_len, Some(8));
        assert_eq!(snap.step.arr, vec![3, 5, 1]);
        assert_eq!(snap.progress.compares, 1);
        assert_eq!(snap.progress.swaps, 1);
        assert_eq!(snap.totals.compares, 3);
        assert_eq!(snap.totals.swaps, 3);
    }

    #[test]
    fn controllers_keep_independent_timing() {
        let clock = ManualClock::new();
        let mut a = PlaybackController::with_clock(vec![2, 1], AlgorithmKind::Bubble, clock.clone()).unwrap();
        let mut b = PlaybackController::with_clock(vec![2, 1], AlgorithmKind::Bubble, clock.clone()).unwrap();
        a.play();
        clock.advance(Duration::from_millis(50));
        b.play();
        clock.advance(Duration::from_millis(50));
        a.pause();
        b.pause();
        assert_eq!(a.elapsed_accumulated(), Duration::from_millis(100));
        assert_eq!(b.elapsed_accumulated(), Duration::from_millis(50));
        assert_ne!(a.session_id(), b.session_id());
    }
}
