//! Playback over a recorded trace.

mod autoplay;
mod controller;

pub use autoplay::{AutoPlay, AutoPlayReport};
pub use controller::{PlaybackController, PlaybackMode, PlaybackSnapshot, TickOutcome};
