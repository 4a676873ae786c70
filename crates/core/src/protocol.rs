// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON wire types for the spreadsheet web app.
//!
//! The remote service is a single endpoint that dispatches on an
//! `action` field:
//!
//! - `GET ?action=getProgress` -> [`ProgressResponse`]
//! - `POST {action: "updateProgress", row, isCorrect, mode}` -> [`UpdateAck`]
//! - `POST {action: "getWrongAnswers"}` -> [`WrongAnswersResponse`]
//!
//! Row numbers on the wire are 1-based sheet rows; row 1 is the
//! header, so a 0-based question index maps to `index + 2`.

use serde::{Deserialize, Serialize};

use crate::progress::ProgressRecord;

/// Offset from a 0-based question index to its 1-based sheet row.
pub const HEADER_ROW_OFFSET: u32 = 2;

/// Which kind of study session produced an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudyMode {
    Quiz,
    Flashcard,
}

impl StudyMode {
    pub fn as_str(self) -> &'static str {
        match self {
            StudyMode::Quiz => "quiz",
            StudyMode::Flashcard => "flashcard",
        }
    }
}

impl std::fmt::Display for StudyMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single progress update destined for the remote sheet.
///
/// This is also the pending-mutation record persisted by the offline
/// queue, so an enqueued update replays byte-for-byte identically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    /// 1-based sheet row (header offset already applied).
    pub row: u32,
    pub is_correct: bool,
    pub mode: StudyMode,
}

impl UpdateRequest {
    /// Build an update for the question at a 0-based row index.
    pub fn new(row_index: usize, is_correct: bool, mode: StudyMode) -> Self {
        UpdateRequest {
            row: row_index as u32 + HEADER_ROW_OFFSET,
            is_correct,
            mode,
        }
    }
}

/// Request bodies sent to the web app, tagged by `action`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action")]
pub enum ClientRequest {
    #[serde(rename = "updateProgress")]
    UpdateProgress(UpdateRequest),
    #[serde(rename = "getWrongAnswers")]
    GetWrongAnswers,
}

/// Response to `getProgress`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressResponse {
    pub success: bool,
    #[serde(default)]
    pub progress: Vec<ProgressRecord>,
}

/// Response to `updateProgress`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateAck {
    pub success: bool,
}

/// Response to `getWrongAnswers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WrongAnswersResponse {
    pub success: bool,
    #[serde(default)]
    pub wrong_questions: Vec<ProgressRecord>,
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod tests;
