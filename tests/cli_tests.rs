//! Integration tests for the mutantscan binary
#![allow(deprecated)] // suppress assert_cmd::Command::cargo_bin deprecation in tests

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

const MUTANT_ROWS: [&str; 6] = ["ATGCGA", "CAGTGC", "TTATGT", "AGAAGG", "CCCCTA", "TCACTG"];
const CLEAN_ROWS: [&str; 6] = ["ATGCGA", "CAGTGC", "TTATTT", "AGACGG", "GCGTCA", "TCACTG"];

#[test]
fn test_mutant_grid_text_output() {
    let mut cmd = Command::cargo_bin("mutantscan").unwrap();
    cmd.args(MUTANT_ROWS);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Mutant detected!"));
}

#[test]
fn test_clean_grid_text_output() {
    let mut cmd = Command::cargo_bin("mutantscan").unwrap();
    cmd.args(CLEAN_ROWS);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("No mutant detected"));
}

#[test]
fn test_json_output_parses() {
    let mut cmd = Command::cargo_bin("mutantscan").unwrap();
    cmd.arg("--format").arg("json").args(MUTANT_ROWS);

    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["format"], "mutantscan-json-v1");
    assert_eq!(parsed["size"], 6);
    assert_eq!(parsed["mutant"], true);
}

#[test]
fn test_json_output_clean_grid() {
    let mut cmd = Command::cargo_bin("mutantscan").unwrap();
    cmd.arg("--format").arg("json").args(CLEAN_ROWS);

    let output = cmd.output().unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["mutant"], false);
}

#[test]
fn test_lowercase_rows_are_normalized() {
    let mut cmd = Command::cargo_bin("mutantscan").unwrap();
    cmd.args(["atgcga", "cagtgc", "ttatgt", "agaagg", "ccccta", "tcactg"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Mutant detected!"));
}

#[test]
fn test_invalid_symbol_fails_with_named_offender() {
    let mut cmd = Command::cargo_bin("mutantscan").unwrap();
    cmd.args(["ATGCGA", "CAGTGC", "TTATZT", "AGAAGG", "CCCCTA", "TCACTG"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid characters"))
        .stderr(predicate::str::contains('Z'));
}

#[test]
fn test_non_square_grid_fails() {
    let mut cmd = Command::cargo_bin("mutantscan").unwrap();
    cmd.args(["ATGCGA", "CAGTGC", "TTATGT", "AGAAGG", "CCCCTA"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("square"));
}

#[test]
fn test_empty_stdin_fails() {
    let mut cmd = Command::cargo_bin("mutantscan").unwrap();
    cmd.write_stdin("");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("empty"));
}

#[test]
fn test_stdin_grid() {
    let mut cmd = Command::cargo_bin("mutantscan").unwrap();
    cmd.write_stdin(format!("{}\n\n", MUTANT_ROWS.join("\n")));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Mutant detected!"));
}

#[test]
fn test_file_input() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "{}", CLEAN_ROWS.join("\n")).unwrap();

    let mut cmd = Command::cargo_bin("mutantscan").unwrap();
    cmd.arg("--file").arg(file.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("No mutant detected"));
}

#[test]
fn test_missing_file_fails() {
    let mut cmd = Command::cargo_bin("mutantscan").unwrap();
    cmd.arg("--file").arg("/nonexistent/grid.txt");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to read grid"));
}

#[test]
fn test_threshold_override() {
    // With threshold 0, a single finding is enough.
    let mut cmd = Command::cargo_bin("mutantscan").unwrap();
    cmd.arg("--threshold")
        .arg("0")
        .args(["ATGCGA", "CAGTGC", "TTTTTT", "AGACGG", "GCGTCA", "TCACTG"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Mutant detected!"));
}
