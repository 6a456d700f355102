//! Plain-text rendering of a single step for terminal playback.

use sr_trace::{Step, StepKind};

/// One line showing every value, with the active indices marked.
///
/// Compared values are wrapped in `[ ]`, written values in `< >`.
pub fn render_step(step: &Step) -> String {
    let (open, close) = match step.kind {
        StepKind::Compare => ('[', ']'),
        StepKind::Mutate => ('<', '>'),
    };
    step.arr
        .iter()
        .enumerate()
        .map(|(idx, value)| {
            if step.involves(idx) {
                format!("{open}{value}{close}")
            } else {
                format!(" {value} ")
            }
        })
        .collect::<Vec<_>>()
        .join("")
        .trim_end()
        .to_string()
}
