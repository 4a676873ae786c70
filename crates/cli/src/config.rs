// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration management.
//!
//! Configuration is stored in `.cram/config.toml`. The `[remote]`
//! table is optional: without it (or with the placeholder endpoint
//! left in place) cram runs in local-only mode and never touches the
//! network.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

const WORK_DIR_NAME: &str = ".cram";
const CONFIG_FILE_NAME: &str = "config.toml";
const DB_FILE_NAME: &str = "state.db";
const QUEUE_FILE_NAME: &str = "offline-queue.jsonl";

/// Endpoint value written by `cram init` before the user pastes in
/// their deployed web app URL. Treated as "no remote".
pub const PLACEHOLDER_ENDPOINT: &str =
    "https://script.google.com/macros/s/YOUR_SCRIPT_ID/exec";

/// Project configuration stored in `.cram/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Remote sync configuration (optional - if absent, runs in
    /// local-only mode).
    pub remote: Option<RemoteConfig>,
}

/// Remote sync configuration for the spreadsheet web app.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Deployed web app URL (single endpoint, action-dispatched).
    pub endpoint: String,
    /// Sheet name; keys the local progress cache.
    pub sheet: String,
    /// HTTP timeout in seconds (default: 10).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    10
}

impl Config {
    /// Loads configuration from the given `.cram/` directory.
    pub fn load(work_dir: &Path) -> Result<Self> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Saves configuration to the given `.cram/` directory.
    pub fn save(&self, work_dir: &Path) -> Result<()> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&config_path, content)?;
        Ok(())
    }

    /// Returns the remote config when a usable endpoint is set.
    pub fn remote(&self) -> Option<&RemoteConfig> {
        self.remote
            .as_ref()
            .filter(|r| !r.endpoint.is_empty() && r.endpoint != PLACEHOLDER_ENDPOINT)
    }

    /// True when remote sync is configured.
    pub fn is_remote_mode(&self) -> bool {
        self.remote().is_some()
    }
}

/// Find the .cram directory by walking up from the current directory.
pub fn find_work_dir() -> Result<PathBuf> {
    let mut current = std::env::current_dir()?;
    loop {
        let work_dir = current.join(WORK_DIR_NAME);
        if work_dir.is_dir() {
            return Ok(work_dir);
        }
        if !current.pop() {
            return Err(Error::NotInitialized);
        }
    }
}

/// Path of the key-value store inside the work directory.
pub fn get_db_path(work_dir: &Path) -> PathBuf {
    work_dir.join(DB_FILE_NAME)
}

/// Path of the offline queue file inside the work directory.
pub fn get_queue_path(work_dir: &Path) -> PathBuf {
    work_dir.join(QUEUE_FILE_NAME)
}

/// Initialize a new .cram directory at the given path.
pub fn init_work_dir(path: &Path, remote: Option<RemoteConfig>) -> Result<PathBuf> {
    let work_dir = path.join(WORK_DIR_NAME);

    if work_dir.exists() {
        return Err(Error::AlreadyInitialized(work_dir.display().to_string()));
    }

    fs::create_dir_all(&work_dir)?;

    let config = Config { remote };
    config.save(&work_dir)?;

    Ok(work_dir)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
