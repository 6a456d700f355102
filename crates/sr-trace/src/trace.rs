//! Immutable step sequences and the metrics derived from them.

use serde::{Deserialize, Serialize};

use crate::algorithm::AlgorithmKind;
use crate::step::Step;

/// Comparison and mutation counts over some prefix of a trace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceMetrics {
    /// Number of steps inspected.
    pub steps: usize,
    pub compares: usize,
    pub swaps: usize,
}

impl TraceMetrics {
    fn tally<'a>(steps: impl Iterator<Item = &'a Step>) -> Self {
        steps.fold(Self::default(), |mut acc, step| {
            acc.steps += 1;
            if step.is_mutate() {
                acc.swaps += 1;
            } else if step.is_compare() {
                acc.compares += 1;
            }
            acc
        })
    }
}

/// The complete recording of one sorting run.
///
/// Always starts and ends with an idle sentinel, and the final snapshot is
/// the ascending permutation of the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trace {
    algorithm: AlgorithmKind,
    steps: Vec<Step>,
}

impl Trace {
    pub(crate) fn from_steps(algorithm: AlgorithmKind, steps: Vec<Step>) -> Self {
        debug_assert!(steps.len() >= 2, "trace must be framed by sentinels");
        Self { algorithm, steps }
    }

    pub fn algorithm(&self) -> AlgorithmKind {
        self.algorithm
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false for generated traces; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Index of the closing sentinel.
    pub fn last_index(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Step at `index`, saturating to the last step.
    pub fn at_clamped(&self, index: usize) -> &Step {
        &self.steps[index.min(self.last_index())]
    }

    /// Sorted output of the run.
    pub fn final_array(&self) -> &[i32] {
        self.steps.last().map(|s| s.arr.as_slice()).unwrap_or(&[])
    }

    /// Input the run started from.
    pub fn initial_array(&self) -> &[i32] {
        self.steps.first().map(|s| s.arr.as_slice()).unwrap_or(&[])
    }

    /// Counts over the whole trace.
    pub fn totals(&self) -> TraceMetrics {
        TraceMetrics::tally(self.steps.iter())
    }

    /// Counts over steps `0..=cursor`. A cursor past the end counts everything.
    pub fn progress(&self, cursor: usize) -> TraceMetrics {
        let end = cursor.saturating_add(1).min(self.steps.len());
        TraceMetrics::tally(self.steps[..end].iter())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
