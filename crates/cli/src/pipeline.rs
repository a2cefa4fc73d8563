// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Invoker → extractor → gate pipeline.

use std::io::{self, BufRead};

use termcolor::WriteColor;

use crate::config::LinterConfig;
use crate::error::Result;
use crate::extract::{Score, ScoreExtractor};
use crate::gate::{self, Verdict};
use crate::invoker::{self, Invocation, Records};

/// Result of a completed gate run.
#[derive(Debug)]
pub struct Outcome {
    pub verdict: Verdict,
    /// Final captured score, if any summary line was seen.
    pub score: Option<Score>,
    /// Number of records read from the linter.
    pub lines: usize,
    /// Linter exit code, when it exited normally.
    pub linter_exit: Option<i32>,
}

/// Echo every record of `reader` to `out`, then run the gate.
///
/// The gate only runs after `reader` reaches end-of-stream. A trailing
/// record without a newline is terminated on output.
pub fn run_stream<R: BufRead>(reader: R, out: &mut impl WriteColor) -> Result<Outcome> {
    let mut extractor = ScoreExtractor::new();

    for record in Records::new(reader) {
        let record = record?;
        out.write_all(&record)?;
        if !record.ends_with(b"\n") {
            out.write_all(b"\n")?;
        }
        extractor.observe(&String::from_utf8_lossy(&record));
    }

    let lines = extractor.lines_seen();
    let score = extractor.finish();
    let verdict = gate::decide(score.as_ref().map(|s| s.rating.clone()), out)?;

    Ok(Outcome {
        verdict,
        score,
        lines,
        linter_exit: None,
    })
}

/// Spawn the linter and stream its output through the gate.
///
/// The linter's own exit status never affects the verdict.
pub fn run(
    config: &LinterConfig,
    invocation: &Invocation,
    out: &mut impl WriteColor,
) -> Result<Outcome> {
    let mut process = invoker::spawn(config, invocation)?;

    let result = match process.take_stdout() {
        Some(stdout) => run_stream(stdout, out),
        None => run_stream(io::empty(), out),
    };

    let linter_exit = match process.wait() {
        Ok(status) => status.code(),
        Err(e) => {
            tracing::warn!("failed to reap linter: {e}");
            None
        }
    };

    result.map(|outcome| Outcome {
        linter_exit,
        ..outcome
    })
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
