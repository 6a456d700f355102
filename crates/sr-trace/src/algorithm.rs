//! The five supported sorting algorithms.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sort;
use crate::trace::Trace;

/// Which step-recording sort to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmKind {
    #[default]
    Bubble,
    Selection,
    Insertion,
    Quick,
    Merge,
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 5] = [
        AlgorithmKind::Bubble,
        AlgorithmKind::Selection,
        AlgorithmKind::Insertion,
        AlgorithmKind::Quick,
        AlgorithmKind::Merge,
    ];

    /// Short identifier used in config files and on the command line.
    pub fn key(self) -> &'static str {
        match self {
            AlgorithmKind::Bubble => "bubble",
            AlgorithmKind::Selection => "selection",
            AlgorithmKind::Insertion => "insertion",
            AlgorithmKind::Quick => "quick",
            AlgorithmKind::Merge => "merge",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AlgorithmKind::Bubble => "Bubble Sort",
            AlgorithmKind::Selection => "Selection Sort",
            AlgorithmKind::Insertion => "Insertion Sort",
            AlgorithmKind::Quick => "Quick Sort",
            AlgorithmKind::Merge => "Merge Sort",
        }
    }

    /// Whether equal values keep their relative order.
    ///
    /// Bubble, Insertion and Merge only move a value past a strictly
    /// greater one. Selection and Quick swap across equal keys and are
    /// recorded as they behave.
    pub fn is_stable(self) -> bool {
        matches!(
            self,
            AlgorithmKind::Bubble | AlgorithmKind::Insertion | AlgorithmKind::Merge
        )
    }

    /// Record a full trace of this algorithm sorting `input`.
    pub fn generate(self, input: &[i32]) -> Trace {
        sort::generate(input, self)
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Returned when an algorithm key is not one of the five known ones.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm '{0}' (expected one of: bubble, selection, insertion, quick, merge)")]
pub struct ParseAlgorithmError(pub String);

impl FromStr for AlgorithmKind {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        AlgorithmKind::ALL
            .into_iter()
            .find(|kind| kind.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseAlgorithmError(s.to_string()))
    }
}
