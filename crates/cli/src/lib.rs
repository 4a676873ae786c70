// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! cramrs - an offline-first quiz and flashcard runner.
//!
//! This crate provides the functionality behind the `cram` CLI tool.
//! Questions are selected from a JSON file; per-question progress
//! lives in a spreadsheet web app and is mirrored into a local cache,
//! with answers given offline queued durably for later delivery.
//!
//! # Main Components
//!
//! - [`Store`] - SQLite-backed key-value store for sessions, the
//!   selection, and the progress cache
//! - [`Config`] - Project configuration (remote endpoint, sheet)
//! - [`sync`] - The synchronizer: transport, offline queue, and the
//!   pull/push/drain client
//! - [`Bundle`] - Export/import of all local study state
//! - [`Error`] - Error types for all operations
//!
//! # Initialization
//!
//! Use [`init_work_dir`] to create a new `.cram/` directory, then open
//! the store:
//!
//! ```rust,ignore
//! use cramrs::{init_work_dir, find_work_dir, get_db_path, Config, Store};
//!
//! // Initialize a new study directory
//! let work_dir = init_work_dir(Path::new("."), None)?;
//!
//! // Later, find and open an existing one
//! let work_dir = find_work_dir()?;
//! let config = Config::load(&work_dir)?;
//! let store = Store::open(&get_db_path(&work_dir))?;
//! ```

mod cli;
mod commands;

pub mod bundle;
pub mod config;
pub mod error;
pub mod store;
pub mod sync;

pub use bundle::Bundle;
pub use cli::{Cli, Command};
pub use config::{find_work_dir, get_db_path, get_queue_path, init_work_dir, Config, RemoteConfig};
pub use error::{Error, Result};
pub use store::Store;

/// Execute a CLI command. This is the main entry point for library
/// users and provides a testable way to run commands without process
/// execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Init {
            path,
            endpoint,
            sheet,
        } => commands::init::run(path, endpoint, sheet),
        Command::Select {
            file,
            start,
            end,
            from_last,
        } => commands::select::run(&file, start, end, from_last),
        Command::Quiz => commands::study::quiz(),
        Command::Flashcard => commands::study::flashcard(),
        Command::Status => commands::status::run(),
        Command::Sync => commands::sync::run(),
        Command::Export { filepath } => commands::export::run(&filepath),
        Command::Import { file } => commands::import::run(&file),
        Command::Clear => commands::clear::run(),
    }
}
