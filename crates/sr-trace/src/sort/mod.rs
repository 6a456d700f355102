//! Step-recording sorts.
//!
//! Each algorithm works on a private copy of the input held by a
//! [`Recorder`], and reports every comparison and write as it happens.
//! The recorder snapshots the whole array on each event.

mod bubble;
mod insertion;
mod merge;
mod quick;
mod selection;

use crate::algorithm::AlgorithmKind;
use crate::step::{Step, StepKind};
use crate::trace::Trace;

/// Generate the trace of `kind` sorting `input`. The input is not modified.
pub fn generate(input: &[i32], kind: AlgorithmKind) -> Trace {
    let mut rec = Recorder::new(input);
    if rec.len() > 1 {
        match kind {
            AlgorithmKind::Bubble => bubble::record(&mut rec),
            AlgorithmKind::Selection => selection::record(&mut rec),
            AlgorithmKind::Insertion => insertion::record(&mut rec),
            AlgorithmKind::Quick => quick::record(&mut rec),
            AlgorithmKind::Merge => merge::record(&mut rec),
        }
    }
    rec.finish(kind)
}

/// Working array plus the steps emitted so far.
pub(crate) struct Recorder {
    pub(crate) arr: Vec<i32>,
    steps: Vec<Step>,
}

impl Recorder {
    fn new(input: &[i32]) -> Self {
        let arr = input.to_vec();
        let steps = vec![Step::idle(arr.clone())];
        Self { arr, steps }
    }

    pub(crate) fn len(&self) -> usize {
        self.arr.len()
    }

    pub(crate) fn compare(&mut self, a: usize, b: usize) {
        self.push(Some(a), Some(b), StepKind::Compare);
    }

    pub(crate) fn mutate(&mut self, a: usize, b: Option<usize>) {
        self.push(Some(a), b, StepKind::Mutate);
    }

    /// Swap two positions and record the mutation.
    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        self.arr.swap(a, b);
        self.mutate(a, Some(b));
    }

    fn push(&mut self, a: Option<usize>, b: Option<usize>, kind: StepKind) {
        self.steps.push(Step {
            arr: self.arr.clone(),
            a,
            b,
            kind,
        });
    }

    fn finish(mut self, kind: AlgorithmKind) -> Trace {
        let closing = Step::idle(self.arr);
        self.steps.push(closing);
        Trace::from_steps(kind, self.steps)
    }
}
