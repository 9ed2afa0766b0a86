// Integration tests for the demo command, run against the built binary

use std::process::Command;

fn run_demo(extra_args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_rollbook"))
        .arg("demo")
        .args(extra_args)
        .output()
        .expect("failed to run rollbook")
}

#[test]
fn test_demo_in_memory_prints_roster() {
    let output = run_demo(&[]);

    assert!(output.status.success(), "demo should exit cleanly");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("New student ID is 1."));
    assert!(stdout.contains("Student 1: Albert Einstein, Grade 6"));
    assert!(stdout.contains("Student 2: Alan Turing, Grade 11"));
}

#[test]
fn test_demo_with_db_path_creates_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("roster.db");

    let output = run_demo(&["--db", db_path.to_str().unwrap()]);

    assert!(output.status.success());
    assert!(db_path.exists());
}

#[test]
fn test_demo_over_existing_db_fails() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("roster.db");

    let first = run_demo(&["--db", db_path.to_str().unwrap()]);
    assert!(first.status.success());

    // Second run hits the already-materialized file and must fail loudly
    let second = run_demo(&["--db", db_path.to_str().unwrap()]);
    assert!(!second.status.success());
    let stderr = String::from_utf8_lossy(&second.stderr);
    assert!(stderr.contains("Error"));
}
