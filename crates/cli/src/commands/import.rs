// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use crate::bundle::Bundle;
use crate::config::get_queue_path;
use crate::error::Result;
use crate::sync::OfflineQueue;

use super::open_context;

pub fn run(file: &str) -> Result<()> {
    let ctx = open_context()?;
    let mut queue = OfflineQueue::open(&get_queue_path(&ctx.work_dir))?;

    let bundle = Bundle::load(Path::new(file))?;
    let applied = bundle.apply(&ctx.store, &mut queue)?;

    println!("Imported {} field(s) from {}", applied, file);
    Ok(())
}
