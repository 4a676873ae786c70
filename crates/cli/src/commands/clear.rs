// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::config::get_queue_path;
use crate::error::Result;
use crate::sync::OfflineQueue;

use super::open_context;

pub fn run() -> Result<()> {
    let ctx = open_context()?;

    ctx.store.clear_all()?;
    let mut queue = OfflineQueue::open(&get_queue_path(&ctx.work_dir))?;
    queue.clear()?;

    println!("Cleared selection, sessions, progress cache, and queue");
    Ok(())
}
