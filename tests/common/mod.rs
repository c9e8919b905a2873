//! Common test utilities for Mica end-to-end tests.
//!
//! This module provides shared helpers used across the binary-level test
//! files.

// Each test file is compiled as a separate crate, so not all helpers are
// used in every test file.
#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

/// Returns the path to the `mica` binary built for this test run.
pub fn mica_binary() -> &'static str {
    env!("CARGO_BIN_EXE_mica")
}

/// Writes `source` into `dir` under `name` and returns the file path.
pub fn write_script(dir: &std::path::Path, name: &str, source: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, source).expect("write script file");
    path
}

/// Runs `mica run <script>` and returns the captured output.
pub fn run_script(script: &std::path::Path) -> Output {
    Command::new(mica_binary())
        .args(["run", script.to_str().expect("utf-8 path")])
        .output()
        .expect("run mica binary")
}

/// Pipes `input` into a bare `mica` invocation (the REPL) and returns the
/// captured output.
pub fn run_repl(input: &str) -> Output {
    use std::io::Write;

    let mut child = Command::new(mica_binary())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn mica binary");

    child
        .stdin
        .take()
        .expect("child stdin")
        .write_all(input.as_bytes())
        .expect("write repl input");

    child.wait_with_output().expect("wait for mica binary")
}
