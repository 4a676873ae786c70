// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod clear;
pub mod export;
pub mod import;
pub mod init;
pub mod select;
pub mod status;
pub mod study;
pub mod sync;

use std::path::PathBuf;

use cram_core::session::Question;

use crate::config::{find_work_dir, get_db_path, get_queue_path, Config};
use crate::error::{Error, Result};
use crate::store::{keys, Store};
use crate::sync::ProgressClient;

/// Everything a command needs from an initialized study directory.
pub struct Context {
    pub config: Config,
    pub store: Store,
    pub work_dir: PathBuf,
}

/// Helper to open the store and config from the current directory.
pub fn open_context() -> Result<Context> {
    let work_dir = find_work_dir()?;
    let config = Config::load(&work_dir)?;
    let store = Store::open(&get_db_path(&work_dir))?;
    Ok(Context {
        config,
        store,
        work_dir,
    })
}

impl Context {
    /// Build the synchronizer when remote sync is configured.
    /// `None` means local-only mode; commands skip their remote steps.
    pub fn client(&self) -> Result<Option<ProgressClient<'_>>> {
        match self.config.remote() {
            Some(remote) => {
                let queue_path = get_queue_path(&self.work_dir);
                Ok(Some(ProgressClient::new(remote, &self.store, &queue_path)?))
            }
            None => Ok(None),
        }
    }

    /// The selected question slice, or [`Error::NothingSelected`].
    pub fn selected_questions(&self) -> Result<Vec<Question>> {
        let selected: Option<Vec<Question>> = self.store.get_json(keys::SELECTED)?;
        match selected {
            Some(questions) if !questions.is_empty() => Ok(questions),
            _ => Err(Error::NothingSelected),
        }
    }

    /// 0-based offset of the selection into the sheet. Defaults to 0
    /// when no range was stored.
    pub fn start_offset(&self) -> Result<usize> {
        Ok(self.store.get_json(keys::START_QUESTION)?.unwrap_or(0))
    }
}
