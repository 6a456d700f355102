//! sortreplay core: playback over recorded sorting traces.
//!
//! - `playback`: the controller state machine and its auto-play driver
//! - `clock`: wall-clock abstraction so timing is testable
//! - `input`: random and parsed input arrays
//! - `export` / `report`: machine- and human-readable trace output
//! - `cli`: the `sortreplay` command line

pub mod cli;
pub mod clock;
pub mod exit_codes;
pub mod export;
pub mod input;
pub mod logging;
pub mod playback;
pub mod render;
pub mod report;

pub use clock::{Clock, ManualClock, SystemClock};
pub use exit_codes::ExitCode;
pub use playback::{AutoPlay, AutoPlayReport, PlaybackController, PlaybackMode, PlaybackSnapshot, TickOutcome};
