// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::color::ColorMode;
use crate::config::DEFAULT_LINTER;
use crate::env::{self, names};
use crate::invoker::Invocation;

/// Lint Python sources and fail when the pylint rating drops below 8.70
#[derive(Parser)]
#[command(name = "rategate")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory to lint (default: current directory)
    #[arg(short = 'C', long = "dir", value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Linter executable
    #[arg(long, value_name = "PROGRAM", env = "RATEGATE_LINTER", default_value = DEFAULT_LINTER)]
    pub linter: OsString,

    /// Also write a JSON gate report to FILE
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Linter program and working directory for this run.
    pub fn invocation(&self) -> Invocation {
        Invocation {
            program: self.linter.clone(),
            dir: self.dir.clone().unwrap_or_else(|| PathBuf::from(".")),
        }
    }

    pub fn color_mode(&self) -> ColorMode {
        ColorMode::from_flags(self.color, self.no_color)
    }

    /// Verbose via `--verbose` or `RATEGATE_DEBUG=1`.
    pub fn verbose_enabled(&self) -> bool {
        self.verbose || env::is_enabled(names::RATEGATE_DEBUG)
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
