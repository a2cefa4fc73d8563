// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Linter process invocation.
//!
//! Spawns the linter with the fixed argument list and exposes its stdout
//! as newline-delimited records, read as they are produced.

use std::ffi::OsString;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdout, Command, ExitStatus, Stdio};

use globset::Glob;

use crate::config::{DEFAULT_LINTER, LinterConfig};
use crate::error::{Error, Result};

/// Where and how to run the linter.
#[derive(Debug, Clone)]
pub struct Invocation {
    /// Linter executable, resolved through `PATH` when not a path.
    pub program: OsString,
    /// Directory the linter runs in and files are selected from.
    pub dir: PathBuf,
}

impl Default for Invocation {
    fn default() -> Self {
        Self {
            program: OsString::from(DEFAULT_LINTER),
            dir: PathBuf::from("."),
        }
    }
}

/// Select files in `dir` whose names match `pattern`, sorted by name.
///
/// With no matches the pattern itself is returned, as a shell would pass
/// an unmatched glob through.
pub fn select_files(dir: &Path, pattern: &str) -> Result<Vec<OsString>> {
    let matcher = Glob::new(pattern)?.compile_matcher();
    let io_err = |source: io::Error| Error::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        if entry.file_type().map_err(io_err)?.is_dir() {
            continue;
        }
        let name = entry.file_name();
        // Hidden files are skipped, matching shell glob expansion.
        if name.to_string_lossy().starts_with('.') {
            continue;
        }
        if matcher.is_match(&name) {
            files.push(name);
        }
    }

    if files.is_empty() {
        files.push(OsString::from(pattern));
    }
    files.sort();
    Ok(files)
}

/// A running linter process.
pub struct LintProcess {
    child: Child,
    stdout: Option<BufReader<ChildStdout>>,
}

/// Spawn the linter for `config` as described by `invocation`.
pub fn spawn(config: &LinterConfig, invocation: &Invocation) -> Result<LintProcess> {
    let files = select_files(&invocation.dir, config.file_glob)?;
    let args = config.args(&files);
    tracing::debug!(
        program = %invocation.program.to_string_lossy(),
        files = files.len(),
        args = ?args,
        "spawning linter"
    );

    let mut child = Command::new(&invocation.program)
        .args(&args)
        .current_dir(&invocation.dir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|source| Error::Spawn {
            program: invocation.program.clone(),
            source,
        })?;

    let stdout = child.stdout.take().map(BufReader::new);
    Ok(LintProcess { child, stdout })
}

impl LintProcess {
    /// The child's stdout, for streaming. Only available once.
    pub fn take_stdout(&mut self) -> Option<BufReader<ChildStdout>> {
        self.stdout.take()
    }

    /// Wait for the child to exit.
    ///
    /// Drops any unread stdout first so the child cannot block on a full pipe.
    pub fn wait(mut self) -> io::Result<ExitStatus> {
        self.stdout = None;
        let status = self.child.wait()?;
        tracing::debug!(code = ?status.code(), "linter exited");
        Ok(status)
    }
}

/// Iterator over newline-delimited records of a reader.
///
/// Each record keeps its terminator. A final unterminated segment is
/// yielded as-is.
pub struct Records<R> {
    reader: R,
}

impl<R: BufRead> Records<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Iterator for Records<R> {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut record = Vec::new();
        match self.reader.read_until(b'\n', &mut record) {
            Ok(0) => None,
            Ok(_) => Some(Ok(record)),
            Err(e) => Some(Err(e)),
        }
    }
}

#[cfg(test)]
#[path = "invoker_tests.rs"]
mod tests;
