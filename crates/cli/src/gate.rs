// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Threshold gate.
//!
//! ```text
//! AwaitingEof --end_of_stream--> Evaluating --evaluate--> Passed | Failed
//! ```
//! `Passed` and `Failed` are terminal.

use std::io;

use termcolor::WriteColor;

use crate::color::scheme;
use crate::error::ExitCode;
use crate::rating::Rating;

/// Minimum passing rating (8.70).
pub const THRESHOLD: Rating = Rating::from_static(870, 2, "8.70");

/// Message written when the rating is below threshold.
pub const REGRESSION_MESSAGE: &str = "KO - rate regression";

/// Gate lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateState {
    AwaitingEof,
    Evaluating(Option<Rating>),
    Passed(Rating),
    Failed(Option<Rating>),
}

impl GateState {
    /// Stream closed; the extractor's final rating is handed over.
    ///
    /// Only `AwaitingEof` advances; other states are returned unchanged.
    pub fn end_of_stream(self, rating: Option<Rating>) -> Self {
        match self {
            GateState::AwaitingEof => GateState::Evaluating(rating),
            other => other,
        }
    }

    /// Compare the captured rating against [`THRESHOLD`].
    ///
    /// A missing rating fails. Only `Evaluating` advances.
    pub fn evaluate(self) -> Self {
        match self {
            GateState::Evaluating(Some(rating)) if rating >= THRESHOLD => GateState::Passed(rating),
            GateState::Evaluating(rating) => GateState::Failed(rating),
            other => other,
        }
    }

    pub fn verdict(&self) -> Option<Verdict> {
        match self {
            GateState::Passed(_) => Some(Verdict::Passed),
            GateState::Failed(_) => Some(Verdict::Failed),
            GateState::AwaitingEof | GateState::Evaluating(_) => None,
        }
    }
}

/// Terminal gate outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Passed,
    Failed,
}

impl Verdict {
    pub fn passed(self) -> bool {
        self == Verdict::Passed
    }
}

impl From<Verdict> for ExitCode {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Passed => ExitCode::Success,
            Verdict::Failed => ExitCode::GateFailed,
        }
    }
}

/// Run the gate on the final rating and write its output lines.
///
/// Writes `rate = <rating>` (empty when no rating was captured), then the
/// regression message if the gate fails.
pub fn decide(rating: Option<Rating>, out: &mut impl WriteColor) -> io::Result<Verdict> {
    let shown = rating.as_ref().map(Rating::as_str).unwrap_or_default().to_string();
    writeln!(out, "rate = {shown}")?;

    let state = GateState::AwaitingEof.end_of_stream(rating).evaluate();
    let verdict = state.verdict().unwrap_or(Verdict::Failed);

    if verdict == Verdict::Failed {
        out.set_color(&scheme::fail())?;
        write!(out, "{REGRESSION_MESSAGE}")?;
        out.reset()?;
        writeln!(out)?;
    }
    out.flush()?;

    tracing::debug!(?verdict, rating = %shown, threshold = %THRESHOLD, "gate decided");
    Ok(verdict)
}

#[cfg(test)]
#[path = "gate_tests.rs"]
mod tests;
