// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Environment variables read by rategate.

/// Generated variable name constants.
pub mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

/// True when `name` is set, to any value.
pub fn is_set(name: &str) -> bool {
    std::env::var_os(name).is_some()
}

/// True when `name` is set to exactly `1`.
pub fn is_enabled(name: &str) -> bool {
    std::env::var(name).is_ok_and(|v| v == "1")
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
