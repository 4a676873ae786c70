// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The interactive quiz and flashcard loops.
//!
//! Both loops snapshot the session after every mutation, so quitting
//! (or crashing) mid-run loses nothing: the next invocation resumes
//! from the snapshot as long as the selection is unchanged. Quiz
//! answers are pushed to the remote as they happen; flashcard flips
//! are purely local.

use std::io::{self, BufRead, Write};

use tracing::debug;

use cram_core::protocol::StudyMode;
use cram_core::session::{Question, Session, SessionSnapshot};

use crate::error::{Error, Result};
use crate::store::keys;
use crate::sync::ProgressClient;

use super::{open_context, Context};

pub fn quiz() -> Result<()> {
    let ctx = open_context()?;
    let questions = ctx.selected_questions()?;
    let start_offset = ctx.start_offset()?;

    let mut client = ctx.client()?;
    if let Some(client) = client.as_mut() {
        // Best effort: deliver whatever queued up since the last run.
        match client.sync_offline_queue() {
            Ok(outcome) if outcome.delivered > 0 => {
                println!("Synced {} queued update(s)", outcome.delivered);
            }
            Ok(_) => {}
            Err(e) => debug!("queue sync skipped: {}", e),
        }
    }

    let snapshot = load_snapshot(&ctx, keys::QUIZ_SESSION)?;
    let mut session = Session::start(questions, StudyMode::Quiz, snapshot.as_ref())?;
    if session.current() > 0 && !session.is_complete() {
        println!(
            "Resuming quiz at question {}/{}",
            session.current() + 1,
            session.len()
        );
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();

    while !session.is_complete() {
        let question = match session.current_question() {
            Some(q) => q.clone(),
            None => break,
        };
        print_question(&question, session.current(), session.len());

        let line = match read_line(&mut input)? {
            Some(line) => line,
            // EOF: keep the snapshot for next time.
            None => {
                ctx.store.put_json(keys::QUIZ_SESSION, &session.snapshot())?;
                return Ok(());
            }
        };

        match line.as_str() {
            "q" => {
                ctx.store.put_json(keys::QUIZ_SESSION, &session.snapshot())?;
                println!(
                    "Saved at question {}/{}",
                    session.current() + 1,
                    session.len()
                );
                return Ok(());
            }
            "b" => {
                session.go_back();
                ctx.store.put_json(keys::QUIZ_SESSION, &session.snapshot())?;
            }
            answer => {
                let answer = resolve_answer(&question, answer);
                let outcome = session.record_answer(session.current(), &answer)?;
                ctx.store.put_json(keys::QUIZ_SESSION, &session.snapshot())?;

                if outcome.is_correct {
                    println!("Correct!");
                } else {
                    println!("Wrong - the answer is: {}", question.answer);
                }

                if let Some(client) = client.as_mut() {
                    push_answer(client, start_offset + outcome.index, outcome.is_correct);
                }
            }
        }
    }

    finish_quiz(&ctx, &session)?;
    Ok(())
}

pub fn flashcard() -> Result<()> {
    let ctx = open_context()?;
    let questions = ctx.selected_questions()?;

    let snapshot = load_snapshot(&ctx, keys::FLASHCARD_SESSION)?;
    let mut session = Session::start(questions, StudyMode::Flashcard, snapshot.as_ref())?;
    if session.current() > 0 && !session.is_complete() {
        println!(
            "Resuming at card {}/{}",
            session.current() + 1,
            session.len()
        );
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();

    while !session.is_complete() {
        let question = match session.current_question() {
            Some(q) => q.clone(),
            None => break,
        };

        println!();
        println!("Card {}/{}: {}", session.current() + 1, session.len(), question.question);
        print!("[enter to flip] ");
        io::stdout().flush()?;
        match read_line(&mut input)? {
            Some(line) if line == "q" => {
                ctx.store
                    .put_json(keys::FLASHCARD_SESSION, &session.snapshot())?;
                return Ok(());
            }
            Some(line) if line == "b" => {
                session.go_back();
                ctx.store
                    .put_json(keys::FLASHCARD_SESSION, &session.snapshot())?;
                continue;
            }
            Some(_) => {}
            None => {
                ctx.store
                    .put_json(keys::FLASHCARD_SESSION, &session.snapshot())?;
                return Ok(());
            }
        }

        println!("  -> {}", question.answer);
        print!("[enter next, b back, q quit] ");
        io::stdout().flush()?;
        match read_line(&mut input)? {
            Some(line) if line == "q" => {
                ctx.store
                    .put_json(keys::FLASHCARD_SESSION, &session.snapshot())?;
                return Ok(());
            }
            Some(line) if line == "b" => session.go_back(),
            Some(_) => session.advance(),
            None => {
                ctx.store
                    .put_json(keys::FLASHCARD_SESSION, &session.snapshot())?;
                return Ok(());
            }
        }
        ctx.store
            .put_json(keys::FLASHCARD_SESSION, &session.snapshot())?;
    }

    println!();
    println!("Done - {} card(s) reviewed", session.len());
    ctx.store.delete(keys::FLASHCARD_SESSION)?;
    Ok(())
}

/// Read a stale-tolerant snapshot: a snapshot that no longer decodes
/// means "start fresh", not "fail the command".
fn load_snapshot(ctx: &Context, key: &str) -> Result<Option<SessionSnapshot>> {
    match ctx.store.get_json(key) {
        Ok(snapshot) => Ok(snapshot),
        Err(Error::MalformedData { .. }) => {
            debug!(key, "discarding undecodable session snapshot");
            ctx.store.delete(key)?;
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

fn print_question(question: &Question, index: usize, total: usize) {
    println!();
    println!("Question {}/{}: {}", index + 1, total, question.question);
    for (i, option) in question.options.iter().enumerate() {
        println!("  {}. {}", i + 1, option);
    }
    print!("> ");
    let _ = io::stdout().flush();
}

/// Map a numeric choice onto its option text; anything else is taken
/// as a literal answer.
fn resolve_answer(question: &Question, raw: &str) -> String {
    if let Ok(n) = raw.parse::<usize>() {
        if n >= 1 && n <= question.options.len() {
            return question.options[n - 1].clone();
        }
    }
    raw.to_string()
}

fn push_answer(client: &mut ProgressClient<'_>, row_index: usize, is_correct: bool) {
    // `None` means queued for later, which is not worth interrupting
    // the quiz over.
    if client.push(row_index, is_correct, StudyMode::Quiz).is_none() {
        debug!(row_index, "update queued for later delivery");
    }
}

fn finish_quiz(ctx: &Context, session: &Session) -> Result<()> {
    println!();
    println!("Score: {}/{}", session.score(), session.len());

    let missed = session.missed();
    if !missed.is_empty() {
        println!("Missed:");
        for miss in &missed {
            println!("  {} (you said: {}, answer: {})", miss.question, miss.given, miss.expected);
        }
    }

    ctx.store.delete(keys::QUIZ_SESSION)?;
    Ok(())
}

fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
