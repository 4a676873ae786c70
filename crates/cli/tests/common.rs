// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub fn cram() -> Command {
    cargo_bin_cmd!("cram")
}

/// Helper to create an initialized temp directory (local-only mode:
/// the placeholder endpoint is never contacted)
pub fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    cram()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .success();
    temp
}

/// Two multiple-choice questions; option 2 then option 1 are correct.
pub const QUESTIONS_JSON: &str = r#"[
  {"question": "What is 2+2?", "options": ["3", "4"], "answer": "4"},
  {"question": "Capital of France?", "options": ["Paris", "Rome"], "answer": "Paris"}
]"#;

/// Write a question file into the temp directory.
pub fn write_questions(temp: &TempDir, name: &str, json: &str) -> PathBuf {
    let path = temp.path().join(name);
    std::fs::write(&path, json).unwrap();
    path
}

/// Helper to init and select the standard two-question file.
pub fn init_and_select() -> TempDir {
    let temp = init_temp();
    write_questions(&temp, "questions.json", QUESTIONS_JSON);
    cram()
        .arg("select")
        .arg("questions.json")
        .current_dir(temp.path())
        .assert()
        .success();
    temp
}
