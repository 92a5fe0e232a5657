use std::fs;

use assert_cmd::Command;
use predicates::prelude::predicate;
use tempfile::{tempdir, TempDir};

fn bin(cwd: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("csv-generator").unwrap();
    cmd.current_dir(cwd.path());
    cmd
}

#[test]
fn test_generate_from_args() {
    let cwd = tempdir().unwrap();
    let path = cwd.path().join("csv-generator_output").join("out.csv");

    bin(&cwd)
        .args(["out.csv", "2", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Creating out.csv to contain 2 columns and 2 rows...",
        ))
        .stdout(predicate::str::contains("Writing columns...\nWriting rows...\n"))
        .stdout(predicate::str::contains(format!(
            "File has been generated here: {}",
            path.display()
        )));

    assert_eq!(
        fs::read_to_string(path).unwrap(),
        ",0_Column,1_Column\n,data,data\n,data,data\n"
    );
}

#[test]
fn test_generate_into_given_directory() {
    let cwd = tempdir().unwrap();
    fs::create_dir(cwd.path().join("fixtures")).unwrap();

    bin(&cwd).args(["fixtures/one.csv", "1", "1"]).assert().success();

    assert_eq!(
        fs::read_to_string(cwd.path().join("fixtures").join("one.csv")).unwrap(),
        ",0_Column\n,data\n"
    );
    assert!(!cwd.path().join("csv-generator_output").exists());
}

#[test]
fn test_generate_appends() {
    let cwd = tempdir().unwrap();
    let path = cwd.path().join("csv-generator_output").join("out.csv");

    bin(&cwd).args(["out.csv", "3", "5"]).assert().success();
    let first = fs::metadata(&path).unwrap().len();
    bin(&cwd).args(["out.csv", "3", "5"]).assert().success();

    assert_eq!(fs::metadata(&path).unwrap().len(), 2 * first);
}

#[test]
fn test_generate_from_prompts() {
    let cwd = tempdir().unwrap();

    bin(&cwd)
        .write_stdin("out.csv\n1\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Proceeding with prompted questions..."))
        .stdout(predicate::str::contains("How many rows?"));

    assert_eq!(
        fs::read_to_string(cwd.path().join("csv-generator_output").join("out.csv")).unwrap(),
        ",0_Column\n,data\n,data\n,data\n"
    );
}

#[test]
fn test_usage_no_input() {
    let cwd = tempdir().unwrap();

    bin(&cwd)
        .write_stdin("")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Missing arguments: output_file, number_of_columns, number_of_rows",
        ))
        .stdout(predicate::str::contains(
            "Usage: csv-generator <output_file> <number_of_columns> <number_of_rows>",
        ));

    assert!(!cwd.path().join("csv-generator_output").exists());
}

#[test]
fn test_reject_invalid_counts() {
    let cwd = tempdir().unwrap();

    for (columns, rows, message) in [
        ("0", "1", "Missing argument: number_of_columns"),
        ("-1", "1", "Missing argument: number_of_columns"),
        ("two", "1", "Missing argument: number_of_columns"),
        ("1", "x", "Missing argument: number_of_rows"),
        ("0", "0", "Missing arguments: number_of_columns, number_of_rows"),
    ] {
        bin(&cwd)
            .args(["out.csv", columns, rows])
            .assert()
            .code(1)
            .stdout(predicate::str::contains(message))
            .stdout(predicate::str::contains("Usage: "));
    }

    assert!(!cwd.path().join("csv-generator_output").exists());
}

#[test]
fn test_reject_empty_output_file() {
    let cwd = tempdir().unwrap();

    bin(&cwd)
        .args(["", "1", "1"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Missing argument: output_file"));

    assert!(!cwd.path().join("csv-generator_output").exists());
}

#[test]
fn test_directory_collision() {
    let cwd = tempdir().unwrap();
    fs::write(cwd.path().join("csv-generator_output"), "").unwrap();

    bin(&cwd)
        .args(["out.csv", "1", "1"])
        .assert()
        .failure()
        .code(exitcode::IOERR)
        .stderr(predicate::str::contains("Error: "));
}

#[test]
fn test_generate_through_missing_directory() {
    let cwd = tempdir().unwrap();

    bin(&cwd)
        .args(["missing/../out.csv", "1", "1"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(cwd.path().join("out.csv")).unwrap(),
        ",0_Column\n,data\n"
    );
    assert!(!cwd.path().join("missing").exists());
}

#[cfg(unix)]
#[test]
fn test_generate_non_utf8_file_name() {
    use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

    let cwd = tempdir().unwrap();
    let name = OsStr::from_bytes(b"o\xffut.csv");

    bin(&cwd).arg(name).args(["1", "1"]).assert().success();

    assert_eq!(
        fs::read(cwd.path().join("csv-generator_output").join(name)).unwrap(),
        b",0_Column\n,data\n"
    );
}

#[test]
fn test_unreadable_prompt_answer() {
    let cwd = tempdir().unwrap();

    bin(&cwd)
        .write_stdin(&b"o\xffut.csv\n1\n1\n"[..])
        .assert()
        .code(exitcode::IOERR)
        .stderr(predicate::str::contains("Error: "));

    assert!(!cwd.path().join("csv-generator_output").exists());
}
