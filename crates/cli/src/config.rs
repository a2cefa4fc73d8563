// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed linter configuration.
//!
//! The naming conventions, extension allow-list and suppressed rules are
//! compiled in. Nothing here is read from the environment or a file.

use std::ffi::OsString;
use std::fmt;

/// Identifier categories that pylint checks naming style for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    Module,
    Const,
    ClassConst,
    Class,
    Function,
    Method,
    Attr,
    Argument,
    Variable,
    ClassAttribute,
    InlineVar,
}

impl IdentifierKind {
    /// Option prefix as pylint spells it (e.g. `class-const`).
    pub fn option_name(self) -> &'static str {
        match self {
            IdentifierKind::Module => "module",
            IdentifierKind::Const => "const",
            IdentifierKind::ClassConst => "class-const",
            IdentifierKind::Class => "class",
            IdentifierKind::Function => "function",
            IdentifierKind::Method => "method",
            IdentifierKind::Attr => "attr",
            IdentifierKind::Argument => "argument",
            IdentifierKind::Variable => "variable",
            IdentifierKind::ClassAttribute => "class-attribute",
            IdentifierKind::InlineVar => "inlinevar",
        }
    }
}

/// Casing conventions understood by pylint's `--*-naming-style` options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamingStyle {
    CamelCase,
    UpperCase,
}

impl fmt::Display for NamingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NamingStyle::CamelCase => "camelCase",
            NamingStyle::UpperCase => "UPPER_CASE",
        })
    }
}

/// Complete linter configuration.
#[derive(Debug, Clone)]
pub struct LinterConfig {
    /// Naming style per identifier category, in argument order.
    pub naming: Vec<(IdentifierKind, NamingStyle)>,

    /// Extension packages pylint may import to inspect.
    pub extension_pkgs: Vec<&'static str>,

    /// Rule codes passed to `--disable`.
    pub disabled: Vec<&'static str>,

    /// Glob selecting files in the working directory.
    pub file_glob: &'static str,
}

/// Default linter executable.
pub const DEFAULT_LINTER: &str = "pylint";

impl LinterConfig {
    /// The project's pylint configuration.
    pub fn pylint() -> Self {
        use IdentifierKind::*;
        use NamingStyle::*;

        Self {
            naming: vec![
                (Module, CamelCase),
                (Const, UpperCase),
                (ClassConst, UpperCase),
                (Class, CamelCase),
                (Function, CamelCase),
                (Method, CamelCase),
                (Attr, CamelCase),
                (Argument, CamelCase),
                (Variable, CamelCase),
                (ClassAttribute, CamelCase),
                (InlineVar, CamelCase),
            ],
            extension_pkgs: vec!["cv2", "PyQt5"],
            disabled: vec!["R0902", "R0913"],
            file_glob: "*.py",
        }
    }

    /// Render the linter argument list, followed by `files`.
    pub fn args(&self, files: &[OsString]) -> Vec<OsString> {
        let mut args: Vec<OsString> = self
            .naming
            .iter()
            .map(|(kind, style)| format!("--{}-naming-style={}", kind.option_name(), style).into())
            .collect();

        if !self.extension_pkgs.is_empty() {
            args.push(format!("--extension-pkg-whitelist={}", self.extension_pkgs.join(",")).into());
        }
        if !self.disabled.is_empty() {
            args.push(format!("--disable={}", self.disabled.join(",")).into());
        }

        args.extend(files.iter().cloned());
        args
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
