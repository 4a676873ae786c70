// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for sync module tests.

#![allow(clippy::unwrap_used)]

use cram_core::progress::ProgressRecord;
use cram_core::protocol::{StudyMode, UpdateRequest};

/// Create a test update for the given 0-based row index.
pub fn make_update(row_index: usize) -> UpdateRequest {
    UpdateRequest::new(row_index, true, StudyMode::Quiz)
}

/// Create a progress record with the given counts.
pub fn make_record(correct: u32, wrong: u32, last: Option<&str>) -> ProgressRecord {
    ProgressRecord {
        correct_count: correct,
        wrong_count: wrong,
        last_studied: last.map(String::from),
    }
}
