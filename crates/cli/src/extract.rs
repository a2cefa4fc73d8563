// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Summary line detection and score capture.
//!
//! Pylint ends its report with a line like:
//! ```text
//! Your code has been rated at 9.12/10 (previous run: 8.50/10, +0.62)
//! ```
//! Only the numerator of the seventh field is read.

use crate::rating::Rating;

// Whitespace-delimited field positions (1-based) of the summary line.
const CODE_FIELD: usize = 2;
const RATED_FIELD: usize = 5;
const FRACTION_FIELD: usize = 7;

/// Parse the rating out of a summary line.
///
/// Returns `None` for lines that are not summary lines, including lines
/// with fewer than seven fields and fractions whose numerator is not a
/// decimal number.
pub fn parse_summary(line: &str) -> Option<Rating> {
    let fields: Vec<&str> = line.split_ascii_whitespace().take(FRACTION_FIELD).collect();
    if fields.len() < FRACTION_FIELD
        || fields[CODE_FIELD - 1] != "code"
        || fields[RATED_FIELD - 1] != "rated"
    {
        return None;
    }

    let (numerator, _denominator) = fields[FRACTION_FIELD - 1].split_once('/')?;
    numerator.parse().ok()
}

/// A captured rating and the line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Score {
    pub rating: Rating,
    /// 1-based record number of the summary line.
    pub line_number: usize,
    /// Summary line text, without its terminator.
    pub line: String,
}

/// Tracks the most recent summary rating across a stream of lines.
#[derive(Debug, Default)]
pub struct ScoreExtractor {
    lines_seen: usize,
    current: Option<Score>,
}

impl ScoreExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inspect one line. A summary line replaces any earlier score.
    pub fn observe(&mut self, line: &str) {
        self.lines_seen += 1;

        if let Some(rating) = parse_summary(line) {
            tracing::debug!(line = self.lines_seen, rating = %rating, "captured rating");
            self.current = Some(Score {
                rating,
                line_number: self.lines_seen,
                line: line.trim_end_matches(['\r', '\n']).to_string(),
            });
        }
    }

    pub fn lines_seen(&self) -> usize {
        self.lines_seen
    }

    /// End of stream: hand the final score to the gate.
    pub fn finish(self) -> Option<Score> {
        self.current
    }
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
