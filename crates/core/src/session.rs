// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Study session state machine.
//!
//! A [`Session`] tracks "where the learner currently is" in one quiz
//! or flashcard run: the immutable question sequence, the cursor, and
//! the per-question answer history. Score and the missed list are
//! derived from the answer history, so going back and re-answering a
//! question overwrites its slot without double-counting.
//!
//! Sessions resume through [`SessionSnapshot`]: a snapshot is only
//! honored when its fingerprint matches the fingerprint of the newly
//! loaded question sequence; anything else silently starts fresh.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::protocol::StudyMode;

/// How many leading characters of the first question feed the
/// session fingerprint.
const FINGERPRINT_PREFIX_LEN: usize = 20;

/// One study item. Flashcards leave `options` empty and show `answer`
/// on the back of the card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    pub answer: String,
}

/// A wrong answer, kept for the end-of-session review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Missed {
    pub question: String,
    pub given: String,
    pub expected: String,
}

/// Durable form of a session, written after every mutation so a crash
/// loses at most the in-flight operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub fingerprint: String,
    pub current: usize,
    pub score: u32,
    pub answers: Vec<Option<String>>,
    #[serde(default)]
    pub missed: Vec<Missed>,
    pub saved_at: DateTime<Utc>,
}

/// Outcome of recording one answer, handed to the synchronizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    /// 0-based index within the session.
    pub index: usize,
    pub is_correct: bool,
}

/// Fingerprint identifying a question sequence: item count plus the
/// first 20 characters of the first question's text.
pub fn fingerprint(items: &[Question]) -> String {
    let head: String = items
        .first()
        .map(|q| q.question.chars().take(FINGERPRINT_PREFIX_LEN).collect())
        .unwrap_or_default();
    format!("{}_{}", items.len(), head)
}

/// An active study session.
#[derive(Debug, Clone)]
pub struct Session {
    items: Vec<Question>,
    mode: StudyMode,
    current: usize,
    answers: Vec<Option<String>>,
    fingerprint: String,
}

impl Session {
    /// Start a session over `items`, resuming from `previous` when its
    /// fingerprint matches the new sequence.
    ///
    /// A snapshot with the wrong fingerprint, an out-of-range cursor,
    /// or a mismatched answer count is discarded and the session
    /// begins at index 0. That is not an error: stale snapshots are
    /// expected whenever the selection changes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyDeck`] when `items` is empty.
    pub fn start(
        items: Vec<Question>,
        mode: StudyMode,
        previous: Option<&SessionSnapshot>,
    ) -> Result<Session> {
        if items.is_empty() {
            return Err(Error::EmptyDeck);
        }

        let fingerprint = fingerprint(&items);
        let mut session = Session {
            answers: vec![None; items.len()],
            current: 0,
            items,
            mode,
            fingerprint,
        };

        if let Some(snap) = previous {
            let resumable = snap.fingerprint == session.fingerprint
                && snap.current <= session.items.len()
                && snap.answers.len() == session.items.len();
            if resumable {
                session.current = snap.current;
                session.answers = snap.answers.clone();
            }
        }

        Ok(session)
    }

    /// Record the answer for the question at `index`.
    ///
    /// `index` must equal the current cursor; answers arriving out of
    /// order are rejected without mutating the session. On success the
    /// slot is (over)written and the cursor advances by one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIndex`] when `index` is not the current
    /// question (including when the session is already complete).
    pub fn record_answer(&mut self, index: usize, answer: &str) -> Result<AnswerOutcome> {
        if index != self.current {
            return Err(Error::InvalidIndex {
                index,
                expected: self.current,
            });
        }
        let item = self.items.get(index).ok_or(Error::InvalidIndex {
            index,
            expected: self.current,
        })?;

        let is_correct = answer == item.answer;
        self.answers[index] = Some(answer.to_string());
        self.current += 1;

        Ok(AnswerOutcome { index, is_correct })
    }

    /// Step to the next card without recording an answer (flashcards).
    /// No-op once the session is complete.
    pub fn advance(&mut self) {
        if self.current < self.items.len() {
            self.current += 1;
        }
    }

    /// Step back one question. No-op at index 0.
    pub fn go_back(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    /// True once every question has been passed.
    pub fn is_complete(&self) -> bool {
        self.current == self.items.len()
    }

    /// Serialize the durable record for this session.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            fingerprint: self.fingerprint.clone(),
            current: self.current,
            score: self.score(),
            answers: self.answers.clone(),
            missed: self.missed(),
            saved_at: Utc::now(),
        }
    }

    /// Number of recorded answers matching the expected answer.
    pub fn score(&self) -> u32 {
        self.items
            .iter()
            .zip(&self.answers)
            .filter(|(q, a)| a.as_deref() == Some(q.answer.as_str()))
            .count() as u32
    }

    /// Wrong answers in question order, derived from the history.
    pub fn missed(&self) -> Vec<Missed> {
        self.items
            .iter()
            .zip(&self.answers)
            .filter_map(|(q, a)| match a.as_deref() {
                Some(given) if given != q.answer => Some(Missed {
                    question: q.question.clone(),
                    given: given.to_string(),
                    expected: q.answer.clone(),
                }),
                _ => None,
            })
            .collect()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// The question at the cursor, or `None` when complete.
    pub fn current_question(&self) -> Option<&Question> {
        self.items.get(self.current)
    }

    pub fn answer_at(&self, index: usize) -> Option<&str> {
        self.answers.get(index).and_then(|a| a.as_deref())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn mode(&self) -> StudyMode {
        self.mode
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
