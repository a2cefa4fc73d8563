//! Behavioral specs for output pass-through and the threshold gate.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

const PYLINT_REPORT: &str = "\
************* Module capture
capture.py:27:0: R0914: Too many local variables (16/15) (too-many-locals)

------------------------------------------------------------------
Your code has been rated at 9.12/10 (previous run: 8.50/10, +0.62)

";

// =============================================================================
// Pass-through
// =============================================================================

/// Every linter line is echoed in order, followed by one rate line.
#[test]
fn linter_output_is_echoed_then_rate_line() {
    let run = gate().linter_output(PYLINT_REPORT).run();

    assert_eq!(run.code(), Some(0));
    assert_eq!(run.stdout_text(), format!("{PYLINT_REPORT}rate = 9.12\n"));
}

/// Lines reach stdout while the linter is still running.
#[test]
fn output_is_echoed_before_linter_exits() {
    use std::io::{BufRead, BufReader, Read};

    let mut running = gate()
        .linter_script(
            "echo first\n\
             i=0\n\
             while [ ! -f release ] && [ $i -lt 600 ]; do sleep 0.05; i=$((i+1)); done\n\
             echo 'Your code has been rated at 9.00/10'",
        )
        .spawn();
    let mut stdout = BufReader::new(running.child.stdout.take().unwrap());

    let mut first = String::new();
    stdout.read_line(&mut first).unwrap();
    assert_eq!(first, "first\n");
    assert!(running.child.try_wait().unwrap().is_none());

    std::fs::write(running.project_path("release"), "").unwrap();
    let mut rest = String::new();
    stdout.read_to_string(&mut rest).unwrap();
    let status = running.child.wait().unwrap();

    assert_eq!(rest, "Your code has been rated at 9.00/10\nrate = 9.00\n");
    assert_eq!(status.code(), Some(0));
}

#[test]
fn non_utf8_output_is_echoed_byte_for_byte() {
    let mut output = b"vid\xe9o.py:1:0: C0114: Missing module docstring\n".to_vec();
    output.extend_from_slice(b"Your code has been rated at 9.00/10\n");

    let run = gate().linter_output(&output).run();

    let stdout = run.stdout();
    assert!(stdout.starts_with(&output));
    assert_eq!(&stdout[output.len()..], b"rate = 9.00\n");
}

#[test]
fn unterminated_last_line_is_terminated_before_rate() {
    gate()
        .linter_output("Your code has been rated at 9.50/10")
        .run()
        .assert
        .success()
        .stdout("Your code has been rated at 9.50/10\nrate = 9.50\n");
}

#[test]
fn short_lines_pass_through_without_changing_score() {
    gate()
        .linter_output("Your code has been rated at 9.00/10\nrated at\n\nx y z\n")
        .run()
        .assert
        .success()
        .stdout("Your code has been rated at 9.00/10\nrated at\n\nx y z\nrate = 9.00\n");
}

// =============================================================================
// Gate
// =============================================================================

#[test]
fn rating_below_threshold_fails() {
    gate()
        .linter_output("Your code has been rated at 7.01/10 (previous run: 7.50/10, -0.49)\n")
        .run()
        .assert
        .code(1)
        .stdout(predicates::str::ends_with(
            "rate = 7.01\nKO - rate regression\n",
        ));
}

#[test]
fn rating_at_threshold_passes() {
    gate()
        .linter_output("Your code has been rated at 8.70/10\n")
        .run()
        .assert
        .success()
        .stdout(predicates::str::contains("KO").not());
}

#[test]
fn rating_just_below_threshold_fails() {
    gate()
        .linter_output("Your code has been rated at 8.69999/10\n")
        .run()
        .assert
        .code(1)
        .stdout(predicates::str::contains("KO - rate regression"));
}

#[test]
fn last_rating_wins() {
    gate()
        .linter_output(
            "Your code has been rated at 9.90/10\n\
             Your code has been rated at 4.20/10\n",
        )
        .run()
        .assert
        .code(1)
        .stdout(predicates::str::contains("rate = 4.20\n"));
}

#[test]
fn empty_linter_output_fails_with_empty_rate() {
    gate()
        .run()
        .assert
        .code(1)
        .stdout("rate = \nKO - rate regression\n");
}

#[test]
fn unparsable_rating_is_ignored() {
    gate()
        .linter_output("Your code has been rated at n.a/10\n")
        .run()
        .assert
        .code(1)
        .stdout(predicates::str::contains("rate = \n"));
}

#[test]
fn negative_rating_fails() {
    gate()
        .linter_output("Your code has been rated at -2.50/10\n")
        .run()
        .assert
        .code(1)
        .stdout(predicates::str::contains("rate = -2.50\n"));
}

/// The linter's exit status never decides the verdict.
#[test]
fn linter_exit_status_is_ignored() {
    gate()
        .linter_output("Your code has been rated at 9.00/10\n")
        .linter_exit(28)
        .run()
        .assert
        .success();

    gate()
        .linter_output("Your code has been rated at 5.00/10\n")
        .linter_exit(0)
        .run()
        .assert
        .code(1);
}

#[test]
fn linter_stderr_is_not_captured() {
    let run = gate()
        .linter_script("echo 'pylint: warning' >&2\necho 'Your code has been rated at 9.00/10'")
        .run();

    assert_eq!(run.code(), Some(0));
    assert_eq!(run.stdout_text(), "Your code has been rated at 9.00/10\nrate = 9.00\n");
    assert!(run.stderr_text().contains("pylint: warning"));
}

// =============================================================================
// Invocation
// =============================================================================

#[test]
fn linter_receives_python_files_of_project() {
    let run = gate()
        .file("vision2D.py", "")
        .file("capture.py", "")
        .file("README.md", "")
        .linter_script(r#"for a in "$@"; do case "$a" in --*) ;; *) echo "$a";; esac; done"#)
        .run();

    assert_eq!(run.stdout_text(), "capture.py\nvision2D.py\nrate = \nKO - rate regression\n");
}

#[test]
fn linter_receives_naming_options() {
    gate()
        .linter_script(r#"printf '%s\n' "$@""#)
        .run()
        .assert
        .stdout(
            predicates::str::contains("--const-naming-style=UPPER_CASE\n")
                .and(predicates::str::contains("--class-naming-style=camelCase\n"))
                .and(predicates::str::contains("--extension-pkg-whitelist=cv2,PyQt5\n"))
                .and(predicates::str::contains("--disable=R0902,R0913\n")),
        );
}

#[test]
fn missing_linter_is_startup_error() {
    let dir = tempfile::tempdir().unwrap();
    rategate_cmd()
        .args(["--linter", "rategate-missing-linter", "--dir"])
        .arg(dir.path())
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicates::str::contains("failed to start linter rategate-missing-linter"));
}

#[test]
fn missing_directory_is_startup_error() {
    let dir = tempfile::tempdir().unwrap();
    rategate_cmd()
        .arg("--dir")
        .arg(dir.path().join("absent"))
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicates::str::contains("rategate: io error"));
}
