//! Common test utilities for vih integration tests.
//!
//! This module provides shared helper functions used across all
//! integration test files.

// Each test file is compiled as a separate crate, so not all functions
// are used in every test file. This is expected behavior.
#![allow(dead_code)]

use std::io::Write;
use std::process::{Command, Output, Stdio};

use tempfile::tempdir;

/// Returns the path of the built `vih` binary.
pub fn vih_binary() -> String {
    env!("CARGO_BIN_EXE_vih").to_string()
}

/// Writes `source` to a temp file and runs the binary on it with the
/// given extra arguments.
pub fn run_source(source: &str, extra_args: &[&str]) -> Output {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("input.vih");
    std::fs::write(&path, source).expect("Failed to write source file");

    Command::new(vih_binary())
        .arg(&path)
        .args(extra_args)
        .output()
        .expect("Failed to run vih")
}

/// Runs the binary with raw arguments (no temp file).
pub fn run_args(args: &[&str]) -> Output {
    Command::new(vih_binary())
        .args(args)
        .output()
        .expect("Failed to run vih")
}

/// Spawns the REPL and feeds it `input` on stdin, returning the captured
/// output once it exits.
pub fn run_repl_session(input: &str) -> Output {
    let mut child = Command::new(vih_binary())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn vih");

    child
        .stdin
        .as_mut()
        .expect("Child has no stdin")
        .write_all(input.as_bytes())
        .expect("Failed to write to stdin");

    child.wait_with_output().expect("Failed to wait for vih")
}

/// Returns the captured stdout as a string.
pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Returns the captured stderr as a string.
pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
