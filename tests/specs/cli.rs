//! Behavioral specs for flags, environment, and the JSON report.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

#[test]
fn report_contains_verdict_and_provenance() {
    let out = tempfile::tempdir().unwrap();
    let report = out.path().join("gate.json");

    gate()
        .linter_output("junk\nYour code has been rated at 7.50/10\n")
        .linter_exit(4)
        .args(&["--report", report.to_str().unwrap()])
        .run()
        .assert
        .code(1);

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(value["score"], "7.50");
    assert_eq!(value["threshold"], "8.70");
    assert_eq!(value["passed"], false);
    assert_eq!(value["summary_line_number"], 2);
    assert_eq!(value["lines"], 2);
    assert_eq!(value["linter_exit"], 4);
}

#[test]
fn unwritable_report_is_internal_error() {
    let out = tempfile::tempdir().unwrap();
    let report = out.path().join("missing").join("gate.json");

    gate()
        .linter_output("Your code has been rated at 9.12/10\n")
        .args(&["--report", report.to_str().unwrap()])
        .run()
        .assert
        .code(3)
        .stdout(predicates::str::contains("rate = 9.12"))
        .stderr(predicates::str::contains("failed to write report"));
}

#[test]
fn linter_env_var_selects_program() {
    let dir = tempfile::tempdir().unwrap();
    rategate_cmd()
        .env("RATEGATE_LINTER", "rategate-env-linter")
        .arg("--dir")
        .arg(dir.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("rategate-env-linter"));
}

#[test]
fn verbose_writes_diagnostics_to_stderr_only() {
    let run = gate()
        .linter_output("Your code has been rated at 9.12/10\n")
        .args(&["--verbose"])
        .run();

    assert_eq!(run.stdout_text(), "Your code has been rated at 9.12/10\nrate = 9.12\n");
    let stderr = run.stderr_text();
    assert!(stderr.contains("[verbose] option: --module-naming-style=camelCase"));
    assert!(stderr.contains("[verbose] linter exit: 0"));
    assert!(stderr.contains("[verbose] summary: line 1: Your code has been rated at 9.12/10"));
}

#[test]
fn debug_env_enables_verbose() {
    let run = gate()
        .linter_output("Your code has been rated at 9.12/10\n")
        .env("RATEGATE_DEBUG", "1")
        .run();

    assert!(run.stderr_text().contains("[verbose] records: 1"));
}

#[test]
fn no_color_keeps_verdict_plain() {
    gate()
        .linter_output("Your code has been rated at 1.00/10\n")
        .run()
        .assert
        .code(1)
        .stdout(predicates::str::contains("\x1b[").not());
}

#[test]
fn color_flag_colors_only_verdict_line() {
    let run = gate()
        .linter_output("Your code has been rated at 1.00/10\n")
        .args(&["--color"])
        .run();

    let stdout = run.stdout_text();
    assert!(stdout.starts_with("Your code has been rated at 1.00/10\nrate = 1.00\n"));
    assert!(stdout.contains("\x1b["));
    assert!(stdout.contains("KO - rate regression"));
}

#[test]
fn log_env_writes_tracing_to_stderr() {
    let run = gate()
        .linter_output("Your code has been rated at 9.12/10\n")
        .env("RATEGATE_LOG", "debug")
        .run();

    assert_eq!(run.code(), Some(0));
    assert!(run.stderr_text().contains("captured rating"));
    assert!(!run.stdout_text().contains("captured rating"));
}
