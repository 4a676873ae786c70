// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use crate::bundle::Bundle;
use crate::config::get_queue_path;
use crate::error::Result;
use crate::sync::OfflineQueue;

use super::open_context;

pub fn run(filepath: &str) -> Result<()> {
    let ctx = open_context()?;
    let queue = OfflineQueue::open(&get_queue_path(&ctx.work_dir))?;
    let sheet = ctx.config.remote.as_ref().map(|r| r.sheet.as_str());

    let bundle = Bundle::collect(&ctx.store, &queue, sheet)?;
    bundle.save(Path::new(filepath))?;

    println!("Exported study state to {}", filepath);
    Ok(())
}
