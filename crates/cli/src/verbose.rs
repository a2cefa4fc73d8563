// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verbose output logger for diagnostic information.
//!
//! Writes `[verbose]` prefixed lines to stderr so that stdout stays an
//! exact copy of the linter output plus the gate lines. Enabled with
//! `--verbose` or `RATEGATE_DEBUG=1`.

use std::fmt::Display;

use crate::invoker::Invocation;
use crate::pipeline::Outcome;

/// Verbose output logger. Writes to stderr with a `[verbose]` prefix.
pub struct VerboseLogger {
    enabled: bool,
}

impl VerboseLogger {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Print a verbose line to stderr.
    pub fn log(&self, msg: &str) {
        if self.enabled {
            eprintln!("[verbose] {}", msg);
        }
    }

    /// Print a `label: value` line.
    pub fn field(&self, label: &str, value: impl Display) {
        if self.enabled {
            eprintln!("[verbose] {}: {}", label, value);
        }
    }

    /// Describe the linter about to run.
    pub fn invocation(&self, invocation: &Invocation, options: &[std::ffi::OsString]) {
        if !self.enabled {
            return;
        }
        self.field("linter", invocation.program.to_string_lossy());
        self.field("directory", invocation.dir.display());
        for option in options {
            self.field("option", option.to_string_lossy());
        }
    }

    /// Describe a finished run.
    pub fn outcome(&self, outcome: &Outcome) {
        if !self.enabled {
            return;
        }
        match outcome.linter_exit {
            Some(code) => self.field("linter exit", code),
            None => self.log("linter exit: terminated by signal"),
        }
        self.field("records", outcome.lines);
        match &outcome.score {
            Some(score) => self.field(
                "summary",
                format_args!("line {}: {}", score.line_number, score.line),
            ),
            None => self.log("summary: none"),
        }
    }
}

#[cfg(test)]
#[path = "verbose_tests.rs"]
mod tests;
