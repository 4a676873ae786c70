// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-question progress records and recommendation helpers.
//!
//! A [`ProgressRecord`] mirrors one row of the remote sheet. The
//! remote store owns these records; the local copy is a read-only
//! cache. The helpers here are pure scans used to recommend where to
//! resume studying.

use serde::{Deserialize, Serialize};

/// Study progress for a single question, keyed by its row position.
///
/// Counts only ever grow; `last_studied` is the timestamp of the most
/// recent update. The timestamp stays a raw ISO-8601 string: for ISO
/// values lexicographic order equals temporal order, and a malformed
/// value from the remote degrades to "present but never latest"
/// instead of failing the whole decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    #[serde(default)]
    pub correct_count: u32,
    #[serde(default)]
    pub wrong_count: u32,
    #[serde(default)]
    pub last_studied: Option<String>,
}

impl ProgressRecord {
    /// True if this question has never been answered in any mode.
    pub fn is_unstudied(&self) -> bool {
        self.correct_count == 0 && self.wrong_count == 0
    }
}

/// Index of the most recently studied question, or `None` when no
/// record carries a timestamp.
///
/// The scan uses strict `>`, so among equal timestamps the earliest
/// index wins. That tie-break is deliberate and relied on by callers.
pub fn find_last_studied(records: &[ProgressRecord]) -> Option<usize> {
    let mut best: Option<(usize, &str)> = None;
    for (index, record) in records.iter().enumerate() {
        if let Some(ts) = record.last_studied.as_deref() {
            if best.map_or(true, |(_, latest)| ts > latest) {
                best = Some((index, ts));
            }
        }
    }
    best.map(|(index, _)| index)
}

/// Indices of questions that were never answered, in original order.
pub fn unstudied(records: &[ProgressRecord]) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.is_unstudied())
        .map(|(i, _)| i)
        .collect()
}

/// Indices of the most missed questions: `wrong_count > 0`, sorted
/// descending by wrong count, truncated to `limit`.
///
/// The sort is stable, so ties keep their original relative order.
pub fn most_wrong(records: &[ProgressRecord], limit: usize) -> Vec<usize> {
    let mut ranked: Vec<usize> = (0..records.len())
        .filter(|&i| records[i].wrong_count > 0)
        .collect();
    ranked.sort_by(|&a, &b| records[b].wrong_count.cmp(&records[a].wrong_count));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
