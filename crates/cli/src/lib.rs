pub mod cli;
pub mod color;
pub mod config;
pub mod env;
pub mod error;
pub mod extract;
pub mod gate;
pub mod invoker;
pub mod pipeline;
pub mod rating;
pub mod report;
pub mod verbose;

pub use cli::Cli;
pub use color::ColorMode;
pub use config::{IdentifierKind, LinterConfig, NamingStyle};
pub use error::{Error, ExitCode, Result};
pub use extract::{Score, ScoreExtractor, parse_summary};
pub use gate::{GateState, THRESHOLD, Verdict};
pub use invoker::{Invocation, LintProcess, Records};
pub use pipeline::{Outcome, run_stream};
pub use rating::Rating;
