// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Durable key-value store backing session snapshots, the selected
//! question set, range markers, and the per-sheet progress cache.
//!
//! A single SQLite table keyed by logical name. Each key has exactly
//! one writing component; reads are unrestricted. The offline queue
//! is deliberately not in here - it lives in its own append-only
//! JSONL file (see `sync::queue`).

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Error, Result};

/// Logical key names. Kept in one place so write ownership stays
/// auditable.
pub mod keys {
    /// Selected question slice (owner: `select`).
    pub const SELECTED: &str = "selected_questions";
    /// Quiz session snapshot (owner: `quiz`).
    pub const QUIZ_SESSION: &str = "quiz_session";
    /// Flashcard session snapshot (owner: `flashcard`).
    pub const FLASHCARD_SESSION: &str = "flashcard_session";
    /// 0-based offset of the selection into the sheet (owner: `select`).
    pub const START_QUESTION: &str = "start_question";
    /// Exclusive end of the selection (owner: `select`).
    pub const END_QUESTION: &str = "end_question";

    /// Progress cache for one sheet (owner: the synchronizer).
    pub fn progress_cache(sheet: &str) -> String {
        format!("progress_cache:{}", sheet)
    }
}

/// SQLite-backed store for the logical keys above.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open (creating if needed) the store at the given path.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                k TEXT PRIMARY KEY,
                v TEXT NOT NULL
            );",
        )?;
        Ok(Store { conn })
    }

    /// In-memory store for tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                k TEXT PRIMARY KEY,
                v TEXT NOT NULL
            );",
        )?;
        Ok(Store { conn })
    }

    pub fn get_raw(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT v FROM kv WHERE k = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    pub fn put_raw(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO kv (k, v) VALUES (?1, ?2)
             ON CONFLICT(k) DO UPDATE SET v = excluded.v",
            params![key, value],
        )?;
        Ok(())
    }

    pub fn delete(&self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM kv WHERE k = ?1", params![key])?;
        Ok(())
    }

    /// Read and decode a JSON value.
    ///
    /// A stored value that fails to decode is a
    /// [`Error::MalformedData`] - callers decide whether that is fatal
    /// (bundle import) or means "treat as absent" (stale snapshots).
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get_raw(key)? {
            Some(raw) => {
                let value = serde_json::from_str(&raw).map_err(|e| Error::MalformedData {
                    key: key.to_string(),
                    reason: e.to_string(),
                })?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Encode and write a JSON value.
    pub fn put_json<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.put_raw(key, &raw)
    }

    /// Remove every progress-related key (selection, snapshots,
    /// markers, caches). Used by `cram clear` and tests.
    pub fn clear_all(&self) -> Result<()> {
        self.conn.execute_batch("DELETE FROM kv;")?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
