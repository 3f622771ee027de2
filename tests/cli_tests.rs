//! End-to-end tests that drive the `nether` binary over stdin.

use std::fs;
use assert_cmd::cargo;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn nether(data_file: &std::path::Path) -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("nether"));
    cmd.arg("--data-file").arg(data_file);
    cmd
}

#[test]
fn test_help() {
    Command::new(cargo::cargo_bin!("nether"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--data-file"));
}

#[test]
fn test_session_adds_and_persists() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("data").join("nether.txt");

    nether(&data)
        .write_stdin("todo buy milk\ndeadline submit report /by 2024-03-15 1800\nmark 2\nlist\nbye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello sir! I'm Nether"))
        .stdout(predicate::str::contains("1. [T][ ] buy milk"))
        .stdout(predicate::str::contains("2. [D][X] submit report (by: Mar 15 2024, 6:00PM)"))
        .stdout(predicate::str::contains("Bye."));

    assert_eq!(
        fs::read_to_string(&data).unwrap(),
        "T|0|buy milk\nD|1|submit report|2024-03-15 1800\n"
    );

    // a second session picks up where the first left off
    nether(&data)
        .write_stdin("list\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("2. [D][X] submit report"));
}

#[test]
fn test_errors_do_not_end_the_session() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("nether.txt");

    nether(&data)
        .write_stdin("foobar\ntodo   \nmark 9\nevent standup /from 2024-03-15 0900\ntodo still here\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sir, the command: 'foobar' is not in our database."))
        .stdout(predicate::str::contains("Sir, the description of a todo cannot be empty."))
        .stdout(predicate::str::contains("Sir, you inputted an invalid task index (9)."))
        .stdout(predicate::str::contains("Sir, the description, start time, or end time of an event cannot be empty."))
        .stdout(predicate::str::contains("Now you have 1 task in the list."));

    assert_eq!(fs::read_to_string(&data).unwrap(), "T|0|still here\n");
}

#[test]
fn test_corrupt_lines_are_reported_at_startup() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("nether.txt");
    fs::write(&data, "T|0|fine\nnot a task\n").unwrap();

    nether(&data)
        .write_stdin("list\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("line 2 of the task file is corrupted"))
        .stdout(predicate::str::contains("1. [T][ ] fine"));
}

#[test]
fn test_save_failure_ends_the_session() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();
    let data = blocker.join("nether.txt");

    nether(&data)
        .write_stdin("todo never saved\nlist\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Hello sir! I'm Nether"))
        .stdout(predicate::str::contains("Sir,").not())
        .stdout(predicate::str::contains("Here are the tasks").not())
        .stderr(predicate::str::contains("storage I/O failed"));
}

#[test]
fn test_completions() {
    Command::new(cargo::cargo_bin!("nether"))
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nether"));
}
