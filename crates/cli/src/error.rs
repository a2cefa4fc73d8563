use std::ffi::OsString;
use std::path::PathBuf;

/// Rategate error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Linter could not be started
    #[error("failed to start linter {}: {source}", .program.to_string_lossy())]
    Spawn {
        program: OsString,
        #[source]
        source: std::io::Error,
    },

    /// File I/O error
    #[error("io error: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading linter output or echoing it failed
    #[error("stream error: {0}")]
    Stream(#[from] std::io::Error),

    /// Gate report could not be written
    #[error("failed to write report {}: {source}", .path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid file glob
    #[error("glob error: {0}")]
    Glob(#[from] globset::Error),
}

/// Result type using rategate Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Rating at or above threshold
    Success = 0,
    /// Rating below threshold, or no rating found
    GateFailed = 1,
    /// Linter could not be started
    StartupError = 2,
    /// Internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Spawn { .. } | Error::Io { .. } | Error::Glob(_) => ExitCode::StartupError,
            Error::Stream(_) => ExitCode::InternalError,
            Error::Report { .. } => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
