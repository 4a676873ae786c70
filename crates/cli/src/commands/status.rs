// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use cram_core::progress::ProgressRecord;
use cram_core::session::{Question, SessionSnapshot};

use crate::config::get_queue_path;
use crate::error::Result;
use crate::store::keys;
use crate::sync::OfflineQueue;

use super::open_context;

pub fn run() -> Result<()> {
    let ctx = open_context()?;

    println!("Study directory: {}", ctx.work_dir.display());
    match ctx.config.remote() {
        Some(remote) => println!("Remote: {} (sheet: {})", remote.endpoint, remote.sheet),
        None => println!("Remote: not configured (local-only)"),
    }

    let selected: Option<Vec<Question>> = ctx.store.get_json(keys::SELECTED)?;
    match &selected {
        Some(questions) => {
            let start = ctx.start_offset()?;
            println!(
                "Selection: {} question(s) (sheet rows {}-{})",
                questions.len(),
                start + 1,
                start + questions.len()
            );
        }
        None => println!("Selection: none"),
    }

    print_session(&ctx.store, keys::QUIZ_SESSION, "Quiz")?;
    print_session(&ctx.store, keys::FLASHCARD_SESSION, "Flashcard")?;

    if let Some(remote) = ctx.config.remote() {
        let cache: Option<Vec<ProgressRecord>> =
            ctx.store.get_json(&keys::progress_cache(&remote.sheet))?;
        match cache {
            Some(records) => println!("Progress cache: {} record(s)", records.len()),
            None => println!("Progress cache: empty"),
        }

        let queue = OfflineQueue::open(&get_queue_path(&ctx.work_dir))?;
        let pending = queue.len()?;
        if pending > 0 {
            println!("Pending updates: {} (run 'cram sync')", pending);
        } else {
            println!("Pending updates: none");
        }
    }

    Ok(())
}

fn print_session(store: &crate::store::Store, key: &str, label: &str) -> Result<()> {
    // A snapshot that no longer decodes is as good as absent here.
    let snapshot: Option<SessionSnapshot> = store.get_json(key).unwrap_or(None);
    match snapshot {
        Some(snap) => println!(
            "{} session: at question {}/{} (saved {})",
            label,
            snap.current + 1,
            snap.answers.len(),
            snap.saved_at.format("%Y-%m-%d %H:%M")
        ),
        None => println!("{} session: none", label),
    }
    Ok(())
}
