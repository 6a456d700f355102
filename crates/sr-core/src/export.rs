//! JSON export of recorded traces.

use std::io::Write;

use serde::Serialize;
use sr_common::{Result, SCHEMA_VERSION};
use sr_trace::{AlgorithmKind, Step, Trace, TraceMetrics};

/// Self-describing export of one trace.
#[derive(Debug, Serialize)]
pub struct TraceDocument<'a> {
    pub schema_version: &'static str,
    pub generated_at: String,
    pub algorithm: AlgorithmKind,
    pub algorithm_name: &'static str,
    pub stable: bool,
    pub input: &'a [i32],
    pub totals: TraceMetrics,
    pub steps: &'a [Step],
}

impl<'a> TraceDocument<'a> {
    pub fn new(trace: &'a Trace) -> Self {
        let algorithm = trace.algorithm();
        Self {
            schema_version: SCHEMA_VERSION,
            generated_at: chrono::Utc::now().to_rfc3339(),
            algorithm,
            algorithm_name: algorithm.name(),
            stable: algorithm.is_stable(),
            input: trace.initial_array(),
            totals: trace.totals(),
            steps: trace.steps(),
        }
    }
}

/// One line of JSON Lines output.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum JsonlRecord<'a> {
    Header {
        schema_version: &'static str,
        algorithm: AlgorithmKind,
        input: &'a [i32],
        totals: TraceMetrics,
    },
    Step {
        index: usize,
        #[serde(flatten)]
        step: &'a Step,
    },
}

/// Write the whole trace as one pretty-printed JSON document.
pub fn write_json<W: Write>(trace: &Trace, mut out: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, &TraceDocument::new(trace))?;
    writeln!(out)?;
    Ok(())
}

/// Write a header line followed by one line per step.
pub fn write_jsonl<W: Write>(trace: &Trace, mut out: W) -> Result<()> {
    let header = JsonlRecord::Header {
        schema_version: SCHEMA_VERSION,
        algorithm: trace.algorithm(),
        input: trace.initial_array(),
        totals: trace.totals(),
    };
    serde_json::to_writer(&mut out, &header)?;
    writeln!(out)?;
    for (index, step) in trace.iter().enumerate() {
        serde_json::to_writer(&mut out, &JsonlRecord::Step { index, step })?;
        writeln!(out)?;
    }
    Ok(())
}
