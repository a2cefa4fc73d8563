// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON gate report.
//!
//! Written after the gate decides, for CI systems that archive results.

use std::path::Path;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::gate::THRESHOLD;
use crate::pipeline::Outcome;

/// Serialized form of a gate run.
#[derive(Debug, Serialize)]
pub struct GateReport<'a> {
    pub score: Option<&'a str>,
    pub threshold: String,
    pub passed: bool,
    pub summary_line: Option<&'a str>,
    pub summary_line_number: Option<usize>,
    pub lines: usize,
    pub linter_exit: Option<i32>,
}

impl<'a> GateReport<'a> {
    pub fn from_outcome(outcome: &'a Outcome) -> Self {
        let score = outcome.score.as_ref();
        Self {
            score: score.map(|s| s.rating.as_str()),
            threshold: THRESHOLD.to_string(),
            passed: outcome.verdict.passed(),
            summary_line: score.map(|s| s.line.as_str()),
            summary_line_number: score.map(|s| s.line_number),
            lines: outcome.lines,
            linter_exit: outcome.linter_exit,
        }
    }
}

/// Render the report as pretty-printed JSON.
pub fn to_json(outcome: &Outcome) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&GateReport::from_outcome(outcome))
}

/// Write the report for `outcome` to `path`.
pub fn write(path: &Path, outcome: &Outcome) -> Result<()> {
    let report_err = |source: std::io::Error| Error::Report {
        path: path.to_path_buf(),
        source,
    };

    let mut json = to_json(outcome).map_err(|e| report_err(e.into()))?;
    json.push('\n');
    std::fs::write(path, json).map_err(report_err)?;
    tracing::debug!(path = %path.display(), "wrote gate report");
    Ok(())
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
