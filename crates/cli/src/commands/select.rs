// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fs;
use std::path::Path;

use cram_core::progress::{self, ProgressRecord};
use cram_core::session::Question;

use crate::error::{Error, Result};
use crate::store::keys;

use super::open_context;

/// How many of the most-missed questions the summary lists.
const MOST_WRONG_LIMIT: usize = 5;

pub fn run(file: &str, start: Option<usize>, end: Option<usize>, from_last: bool) -> Result<()> {
    let ctx = open_context()?;

    let questions = load_questions(Path::new(file))?;
    let total = questions.len();
    if total == 0 {
        return Err(cram_core::Error::EmptyDeck.into());
    }

    // Remote progress (or its cache) drives the range recommendation.
    let records = match ctx.client()? {
        Some(client) => client.pull(),
        None => None,
    };

    let start = match (start, from_last) {
        (Some(s), _) => s,
        // Resume one past the most recently studied row, wrapping to
        // the top when that was the last question.
        (None, true) => records
            .as_deref()
            .and_then(progress::find_last_studied)
            .map(|i| if i + 1 < total { i + 2 } else { 1 })
            .unwrap_or(1),
        (None, false) => 1,
    };
    let end = end.unwrap_or(total);

    if start < 1 || end > total || start > end {
        return Err(Error::InvalidRange { start, end, total });
    }

    let selected: Vec<Question> = questions[start - 1..end].to_vec();

    // A new selection invalidates any in-flight sessions; their
    // fingerprints would no longer match anyway.
    ctx.store.put_json(keys::SELECTED, &selected)?;
    ctx.store.put_json(keys::START_QUESTION, &(start - 1))?;
    ctx.store.put_json(keys::END_QUESTION, &end)?;
    ctx.store.delete(keys::QUIZ_SESSION)?;
    ctx.store.delete(keys::FLASHCARD_SESSION)?;

    println!(
        "Selected questions {}-{} of {} from {}",
        start, end, total, file
    );

    if let Some(records) = records {
        print_recommendation(&records);
    }

    Ok(())
}

fn load_questions(path: &Path) -> Result<Vec<Question>> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| Error::MalformedData {
        key: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Summarize the sheet's progress: where the learner left off, what
/// was never touched, and what keeps going wrong.
fn print_recommendation(records: &[ProgressRecord]) {
    if records.is_empty() {
        return;
    }

    if let Some(last) = progress::find_last_studied(records) {
        println!("Last studied: question {}", last + 1);
    }

    let fresh = progress::unstudied(records);
    if !fresh.is_empty() {
        println!("Never studied: {} question(s)", fresh.len());
    }

    let wrong = progress::most_wrong(records, MOST_WRONG_LIMIT);
    if !wrong.is_empty() {
        let positions: Vec<String> = wrong.iter().map(|i| (i + 1).to_string()).collect();
        println!("Most missed: question(s) {}", positions.join(", "));
    }
}
