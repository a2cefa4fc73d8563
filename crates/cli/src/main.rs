// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rategate CLI entry point.

use clap::Parser;
use termcolor::StandardStream;
use tracing_subscriber::{EnvFilter, fmt};

use rategate::cli::Cli;
use rategate::config::LinterConfig;
use rategate::env::names;
use rategate::error::ExitCode;
use rategate::verbose::VerboseLogger;
use rategate::{pipeline, report};

fn init_logging() {
    let filter =
        EnvFilter::try_from_env(names::RATEGATE_LOG).unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("rategate: {}", e);
            match e.downcast_ref::<rategate::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let verbose = VerboseLogger::new(cli.verbose_enabled());

    let config = LinterConfig::pylint();
    let invocation = cli.invocation();
    verbose.invocation(&invocation, &config.args(&[]));

    let mut stdout = StandardStream::stdout(cli.color_mode().resolve());
    let outcome = pipeline::run(&config, &invocation, &mut stdout)?;
    verbose.outcome(&outcome);

    if let Some(path) = &cli.report {
        report::write(path, &outcome)?;
    }

    Ok(outcome.verdict.into())
}
