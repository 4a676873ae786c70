// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use crate::config::{init_work_dir, RemoteConfig, PLACEHOLDER_ENDPOINT};
use crate::error::Result;

pub fn run(path: Option<String>, endpoint: Option<String>, sheet: Option<String>) -> Result<()> {
    let target_path = match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir()?,
    };

    // Without --endpoint we still write a [remote] table with the
    // placeholder URL so the user only has to paste theirs in.
    let remote = Some(RemoteConfig {
        endpoint: endpoint
            .clone()
            .unwrap_or_else(|| PLACEHOLDER_ENDPOINT.to_string()),
        sheet: sheet.unwrap_or_else(|| "Sheet1".to_string()),
        timeout_secs: 10,
    });

    let work_dir = init_work_dir(&target_path, remote)?;

    println!("Initialized study directory at {}", work_dir.display());
    match endpoint {
        Some(url) => println!("Remote: {}", url),
        None => println!(
            "Local-only mode; set [remote] endpoint in {} to enable sync",
            work_dir.join("config.toml").display()
        ),
    }

    Ok(())
}
