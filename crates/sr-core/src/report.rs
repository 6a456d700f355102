//! Human-readable summaries and cross-algorithm comparison.

use std::fmt::Write as _;

use serde::Serialize;
use sr_trace::{AlgorithmKind, Trace};

/// Whole-trace counts for one algorithm on a shared input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlgorithmComparison {
    pub algorithm: AlgorithmKind,
    pub name: &'static str,
    pub steps: usize,
    pub compares: usize,
    pub swaps: usize,
    pub stable: bool,
}

/// Run all five algorithms on `input`, in `AlgorithmKind::ALL` order.
pub fn compare_algorithms(input: &[i32]) -> Vec<AlgorithmComparison> {
    AlgorithmKind::ALL
        .into_iter()
        .map(|algorithm| {
            let totals = algorithm.generate(input).totals();
            AlgorithmComparison {
                algorithm,
                name: algorithm.name(),
                steps: totals.steps,
                compares: totals.compares,
                swaps: totals.swaps,
                stable: algorithm.is_stable(),
            }
        })
        .collect()
}

pub fn render_comparison(rows: &[AlgorithmComparison]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<16} {:>8} {:>10} {:>8}  stable",
        "algorithm", "steps", "compares", "swaps"
    );
    for row in rows {
        let _ = writeln!(
            out,
            "{:<16} {:>8} {:>10} {:>8}  {}",
            row.name,
            row.steps,
            row.compares,
            row.swaps,
            if row.stable { "yes" } else { "no" }
        );
    }
    out
}

/// Short multi-line description of a trace.
pub fn render_summary(trace: &Trace) -> String {
    let totals = trace.totals();
    let mut out = String::new();
    let _ = writeln!(out, "{} ({} values)", trace.algorithm().name(), trace.initial_array().len());
    let _ = writeln!(out, "  input:    {:?}", trace.initial_array());
    let _ = writeln!(out, "  sorted:   {:?}", trace.final_array());
    let _ = writeln!(out, "  steps:    {}", totals.steps);
    let _ = writeln!(out, "  compares: {}", totals.compares);
    let _ = writeln!(out, "  swaps:    {}", totals.swaps);
    out
}
