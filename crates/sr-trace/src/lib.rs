//! sortreplay trace generation.
//!
//! This crate turns a sorting run into a replayable log:
//! - `Step` records one comparison or mutation plus a full array snapshot
//! - `Trace` is the complete, immutable sequence of steps for one run
//! - `AlgorithmKind` selects one of the five step-recording sorts
//!
//! Generation is pure and deterministic: the same input and algorithm
//! always produce an identical trace.

pub mod algorithm;
pub mod sort;
pub mod step;
pub mod trace;

pub use algorithm::{AlgorithmKind, ParseAlgorithmError};
pub use sort::generate;
pub use step::{Step, StepKind};
pub use trace::{Trace, TraceMetrics};
