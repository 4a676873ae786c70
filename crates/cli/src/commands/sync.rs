// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::error::{Error, Result};

use super::open_context;

pub fn run() -> Result<()> {
    let ctx = open_context()?;
    let mut client = ctx.client()?.ok_or(Error::NoRemote)?;

    let outcome = client.sync_offline_queue()?;
    match (outcome.delivered, outcome.remaining) {
        (0, 0) => println!("Queue empty, nothing to deliver"),
        (delivered, 0) => println!("Delivered {} queued update(s)", delivered),
        (delivered, remaining) => println!(
            "Delivered {} queued update(s); {} still pending",
            delivered, remaining
        ),
    }

    // Refresh the cache while we're talking to the remote anyway.
    match client.pull() {
        Some(records) => println!("Progress cache refreshed ({} record(s))", records.len()),
        None => println!("Could not fetch progress and no cache exists yet"),
    }

    Ok(())
}
