//! Integration tests for the carteiro binary.
//!
//! These drive the collection phase over piped stdin/stdout. The chart
//! view itself needs a tty, so only the paths that terminate before the
//! terminal is set up are exercised here; rendering is covered by unit
//! tests against an in-memory backend.

use assert_cmd::Command;
use predicates::prelude::*;

fn carteiro() -> Command {
    Command::cargo_bin("carteiro").expect("binary builds")
}

#[test]
fn non_numeric_parameter_aborts_with_a_parse_error() {
    carteiro()
        .write_stdin("abc\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Informe o número de vértices ímpares do grafo: ",
        ))
        .stderr(predicate::str::contains("abc"));
}

#[test]
fn float_reply_at_the_vertex_prompt_aborts() {
    carteiro()
        .write_stdin("3\n12.7\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Informe a quantidade de vértices do grafo (ou -1 para terminar): ",
        ))
        .stderr(predicate::str::contains("12.7"));
}

#[test]
fn non_numeric_time_aborts_after_prompting_for_it() {
    carteiro()
        .write_stdin("3\n4\nfast\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Informe o tempo de execução para 4 vértices (em ms): ",
        ))
        .stderr(predicate::str::contains("fast"));
}

#[test]
fn closed_stdin_aborts_instead_of_looping() {
    carteiro().write_stdin("").assert().failure();
}

#[test]
fn help_describes_the_tool() {
    carteiro()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Chinese Postman"))
        .stdout(predicate::str::contains("--log"));
}

#[test]
fn log_file_is_written_when_requested() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("carteiro.log");

    carteiro()
        .arg("--log")
        .arg(&log_path)
        .write_stdin("oops\n")
        .assert()
        .failure();

    let contents = std::fs::read_to_string(&log_path).unwrap();
    assert!(contents.contains("Starting Carteiro"));
}
