//! Integration tests for the `unscramble` binary.

mod fixtures;

use fixtures::utils::{scratch_dir, write_dictionary};
use std::path::Path;
use std::process::Command;

/// Run the binary with an isolated data directory (no user config)
fn run(args: &[&str], data_dir: &Path) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_unscramble"))
        .args(args)
        .env("XDG_DATA_HOME", data_dir)
        .env("NO_COLOR", "1")
        .env("TERM", "dumb")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run unscramble");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.success(),
    )
}

#[test]
fn test_index_then_lookup() {
    let dir = scratch_dir("cli_lookup");
    let dict = write_dictionary(&dir, &["Stop", "pots", "test", "tops", "stop"]);
    let index = dir.join("sparse_index");

    let (stdout, stderr, ok) = run(
        &["index", "-q", "-d", dict.to_str().unwrap(), "-i", index.to_str().unwrap()],
        &dir,
    );
    assert!(ok, "index failed: {stderr}");
    assert!(stdout.is_empty());
    assert!(index.exists());

    let (stdout, stderr, ok) = run(
        &["lookup", "--exact", "--color", "never", "-i", index.to_str().unwrap(), "SPOT"],
        &dir,
    );
    assert!(ok, "lookup failed: {stderr}");
    assert_eq!(stdout, "  stop\n  pots\n  tops\n");
}

#[test]
fn test_lookup_with_window_marks_fuzzy() {
    let dir = scratch_dir("cli_fuzzy");
    let dict = write_dictionary(&dir, &["stop", "test", "apple"]);
    let index = dir.join("sparse_index");
    let (_, stderr, ok) = run(
        &["index", "-q", "-d", dict.to_str().unwrap(), "-i", index.to_str().unwrap()],
        &dir,
    );
    assert!(ok, "index failed: {stderr}");

    let (stdout, _, ok) = run(
        &["lookup", "-w", "5", "--color", "never", "-i", index.to_str().unwrap(), "tset"],
        &dir,
    );
    assert!(ok);
    assert!(stdout.contains("  test\n"));
    assert!(stdout.contains("~ stop\n"));
    assert!(stdout.contains("~ apple\n"));
}

#[test]
fn test_lookup_missing_index_fails() {
    let dir = scratch_dir("cli_missing");
    let missing = dir.join("nope");
    let (_, stderr, ok) = run(&["lookup", "-i", missing.to_str().unwrap(), "abc"], &dir);
    assert!(!ok);
    assert!(stderr.contains("index file not found"), "{stderr}");
}

#[test]
fn test_sig_command() {
    let dir = scratch_dir("cli_sig");
    let (stdout, _, ok) = run(&["sig", "test"], &dir);
    assert!(ok);
    assert!(stdout.contains("0x6001b6cf7bf4 (105560478284788)"), "{stdout}");
}

#[test]
fn test_stats_command() {
    let dir = scratch_dir("cli_stats");
    let dict = write_dictionary(&dir, &["stop", "pots", "test"]);
    let index = dir.join("sparse_index");
    run(
        &["index", "-q", "-d", dict.to_str().unwrap(), "-i", index.to_str().unwrap()],
        &dir,
    );

    let (stdout, _, ok) = run(&["stats", "-i", index.to_str().unwrap()], &dir);
    assert!(ok);
    assert!(stdout.contains("Signatures:       2"), "{stdout}");
    assert!(stdout.contains("Words:            3"), "{stdout}");
}
