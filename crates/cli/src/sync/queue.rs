// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Offline queue for progress updates that could not be delivered.
//!
//! Uses JSONL format for durability - each update is written as a
//! single line and fsynced immediately. Draining retries every entry
//! in enqueue order; failures stay queued in their original relative
//! order while successes are removed, so one unreachable row never
//! blocks the rest.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use cram_core::protocol::UpdateRequest;

/// Error type for queue operations.
#[derive(Debug, thiserror::Error)]
pub enum QueueError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for queue operations.
pub type QueueResult<T> = Result<T, QueueError>;

/// What one drain pass accomplished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrainOutcome {
    /// Updates confirmed delivered and removed from the queue.
    pub delivered: usize,
    /// Updates still queued afterwards (failures plus any appended
    /// mid-drain).
    pub remaining: usize,
}

/// Durable FIFO of undelivered progress updates.
///
/// Updates are stored in a JSONL file, one per line. Each write is
/// fsynced to ensure durability across restarts.
pub struct OfflineQueue {
    /// Path to the queue file.
    path: PathBuf,
}

impl OfflineQueue {
    /// Create or open an offline queue at the given path.
    pub fn open(path: &Path) -> QueueResult<Self> {
        // Ensure the file exists (create if not)
        OpenOptions::new().create(true).append(true).open(path)?;

        Ok(OfflineQueue {
            path: path.to_path_buf(),
        })
    }

    /// Enqueue an update for later delivery.
    ///
    /// The update is immediately persisted to disk. If this fails the
    /// update is lost - the caller must log it, there is no further
    /// fallback.
    pub fn enqueue(&mut self, req: &UpdateRequest) -> QueueResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let json = serde_json::to_string(req)?;
        writeln!(file, "{}", json)?;
        file.sync_all()?;

        Ok(())
    }

    /// Read all queued updates without removing them.
    pub fn peek_all(&self) -> QueueResult<Vec<UpdateRequest>> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let reader = BufReader::new(file);
        let mut updates = Vec::new();

        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let req: UpdateRequest = serde_json::from_str(&line)?;
            updates.push(req);
        }

        Ok(updates)
    }

    /// Attempt delivery of every queued update, in enqueue order.
    ///
    /// `deliver` returns true on confirmed delivery. Failed entries
    /// remain queued in their original relative order; entries
    /// appended while the drain was running are preserved untouched
    /// (they are picked up by the next pass). Draining an empty queue
    /// is a no-op, and repeating a drain with deterministic delivery
    /// outcomes leaves the queue unchanged.
    pub fn drain<F>(&mut self, mut deliver: F) -> QueueResult<DrainOutcome>
    where
        F: FnMut(&UpdateRequest) -> bool,
    {
        let snapshot = self.peek_all()?;
        if snapshot.is_empty() {
            return Ok(DrainOutcome {
                delivered: 0,
                remaining: 0,
            });
        }

        let mut kept = Vec::new();
        let mut delivered = 0;
        for req in &snapshot {
            if deliver(req) {
                delivered += 1;
            } else {
                kept.push(req.clone());
            }
        }

        // Anything appended beyond the snapshot stays queued.
        let current = self.peek_all()?;
        if current.len() > snapshot.len() {
            kept.extend_from_slice(&current[snapshot.len()..]);
        }

        let remaining = kept.len();
        self.rewrite(&kept)?;

        Ok(DrainOutcome {
            delivered,
            remaining,
        })
    }

    /// Replace the queue contents wholesale (bundle import).
    pub fn replace_all(&mut self, updates: &[UpdateRequest]) -> QueueResult<()> {
        self.rewrite(updates)
    }

    /// Clear all queued updates.
    pub fn clear(&mut self) -> QueueResult<()> {
        // Truncate the file
        File::create(&self.path)?;
        Ok(())
    }

    /// Get the number of queued updates.
    pub fn len(&self) -> QueueResult<usize> {
        Ok(self.peek_all()?.len())
    }

    /// Check if the queue is empty.
    pub fn is_empty(&self) -> QueueResult<bool> {
        Ok(self.len()? == 0)
    }

    fn rewrite(&mut self, updates: &[UpdateRequest]) -> QueueResult<()> {
        let mut file = File::create(&self.path)?;
        for req in updates {
            let json = serde_json::to_string(req)?;
            writeln!(file, "{}", json)?;
        }
        file.sync_all()?;
        Ok(())
    }
}
