// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

use crate::sync::QueueError;

/// All possible errors that can occur in the cramrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
/// Remote I/O failures never appear here: the synchronizer absorbs
/// them into cache fallback or offline queueing.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not initialized: run 'cram init' first")]
    NotInitialized,

    #[error("already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("no remote configured\n  hint: set [remote] endpoint and sheet in .cram/config.toml")]
    NoRemote,

    #[error("no questions selected\n  hint: run 'cram select <file>' first")]
    NothingSelected,

    #[error("invalid range {start}..{end}: the deck has {total} questions")]
    InvalidRange {
        start: usize,
        end: usize,
        total: usize,
    },

    #[error("export path cannot be empty")]
    ExportPathEmpty,

    #[error("malformed data for '{key}': {reason}")]
    MalformedData { key: String, reason: String },

    #[error("unsupported bundle version '{0}'")]
    UnsupportedBundleVersion(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("{0}")]
    Session(#[from] cram_core::Error),

    #[error("queue error: {0}")]
    Queue(#[from] QueueError),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for cramrs operations.
pub type Result<T> = std::result::Result<T, Error>;
