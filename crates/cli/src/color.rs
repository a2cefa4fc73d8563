// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color detection and terminal styling.
//!
//! Only the gate's own verdict line is ever colored. Linter output is
//! echoed as raw bytes.
//!
//! Detection order:
//! 1. `--color` / `--no-color` flags
//! 2. NO_COLOR env var → no color
//! 3. COLOR env var → use color
//! 4. default:
//!    - If not stdout.is_tty() → no color
//!    - If CLAUDE_CODE, CODEX, CI, or CURSOR env var set → no color
//!    - Else → use color

use std::io::IsTerminal;
use termcolor::ColorChoice;

use crate::env::{self, names};

/// Color preference from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Build from the `--color` / `--no-color` flag pair. `--no-color` wins.
    pub fn from_flags(color: bool, no_color: bool) -> Self {
        match (color, no_color) {
            (_, true) => ColorMode::Never,
            (true, false) => ColorMode::Always,
            (false, false) => ColorMode::Auto,
        }
    }

    /// Resolve to a termcolor choice, consulting the environment for `Auto`.
    pub fn resolve(self) -> ColorChoice {
        match self {
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
            ColorMode::Auto => resolve_color(),
        }
    }
}

/// Resolve color choice from environment and TTY state.
///
/// Per [no-color.org](https://no-color.org/), `NO_COLOR` when set to any value
/// (including empty string) disables color. The `COLOR` env var follows a
/// similar convention for forcing color output.
pub fn resolve_color() -> ColorChoice {
    // NO_COLOR spec: any value (including empty) disables color
    if env::is_set(names::NO_COLOR) {
        return ColorChoice::Never;
    }
    // COLOR=1 forces color (non-standard but common)
    if env::is_set(names::COLOR) {
        return ColorChoice::Always;
    }
    if !std::io::stdout().is_terminal() {
        return ColorChoice::Never;
    }
    if is_agent_environment() {
        return ColorChoice::Never;
    }
    ColorChoice::Auto
}

/// Check if running in an AI agent or CI environment.
fn is_agent_environment() -> bool {
    [names::CLAUDE_CODE, names::CODEX, names::CURSOR, names::CI]
        .into_iter()
        .any(env::is_set)
}

/// Color scheme for gate output.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// Red "KO" verdict.
    pub fn fail() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
