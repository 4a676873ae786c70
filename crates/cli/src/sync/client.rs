// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Remote progress synchronizer.
//!
//! Provides the three reconciliation paths between the local state
//! and the spreadsheet web app:
//! - pull authoritative progress, falling back to the local cache
//! - push a single update, queueing it offline on failure
//! - drain the offline queue against the remote
//!
//! Failure policy: network and parse errors are absorbed here and
//! converted into fallback or queueing; they are logged, never
//! returned. The only failures that surface are durable-storage
//! errors, which have no further fallback.

use std::path::Path;
use std::time::Duration;

use tracing::{debug, error, warn};

use cram_core::progress::ProgressRecord;
use cram_core::protocol::{StudyMode, UpdateAck, UpdateRequest};

use crate::config::RemoteConfig;
use crate::error::Result;
use crate::store::{keys, Store};

use super::queue::{DrainOutcome, OfflineQueue, QueueResult};
use super::transport::{HttpTransport, Transport};

/// Synchronizer for one sheet's progress.
///
/// Holds only the endpoint transport, the sheet key, and the offline
/// queue; all durable state goes through the shared [`Store`].
pub struct ProgressClient<'a, T: Transport = HttpTransport> {
    transport: T,
    store: &'a Store,
    queue: OfflineQueue,
    sheet: String,
}

impl<'a> ProgressClient<'a, HttpTransport> {
    /// Create a synchronizer with the real HTTP transport.
    pub fn new(remote: &RemoteConfig, store: &'a Store, queue_path: &Path) -> Result<Self> {
        let transport = HttpTransport::new(
            &remote.endpoint,
            Duration::from_secs(remote.timeout_secs),
        )
        .map_err(|e| crate::error::Error::Config(format!("bad remote endpoint: {}", e)))?;
        let queue = OfflineQueue::open(queue_path)?;

        Ok(ProgressClient {
            transport,
            store,
            queue,
            sheet: remote.sheet.clone(),
        })
    }
}

impl<'a, T: Transport> ProgressClient<'a, T> {
    /// Create a synchronizer with a custom transport (for testing).
    pub fn with_transport(
        transport: T,
        store: &'a Store,
        queue_path: &Path,
        sheet: &str,
    ) -> Result<Self> {
        let queue = OfflineQueue::open(queue_path)?;

        Ok(ProgressClient {
            transport,
            store,
            queue,
            sheet: sheet.to_string(),
        })
    }

    /// Fetch authoritative progress from the remote store.
    ///
    /// On success the local cache for this sheet is overwritten and
    /// the fresh records returned. On any failure (network, status,
    /// malformed body, `success: false`) the last cached copy is
    /// returned instead; `None` only when there is no cache either.
    pub fn pull(&self) -> Option<Vec<ProgressRecord>> {
        match self.transport.get_progress() {
            Ok(resp) if resp.success => {
                if let Err(e) = self
                    .store
                    .put_json(&keys::progress_cache(&self.sheet), &resp.progress)
                {
                    // The pull itself worked; a stale cache only
                    // matters on the next failed pull.
                    warn!(sheet = %self.sheet, "failed to refresh progress cache: {}", e);
                }
                Some(resp.progress)
            }
            Ok(_) => {
                warn!(sheet = %self.sheet, "remote reported failure on getProgress; using cache");
                self.cached()
            }
            Err(e) => {
                warn!(sheet = %self.sheet, "progress pull failed: {}; using cache", e);
                self.cached()
            }
        }
    }

    fn cached(&self) -> Option<Vec<ProgressRecord>> {
        match self
            .store
            .get_json::<Vec<ProgressRecord>>(&keys::progress_cache(&self.sheet))
        {
            Ok(cached) => cached,
            Err(e) => {
                debug!(sheet = %self.sheet, "unreadable progress cache: {}", e);
                None
            }
        }
    }

    /// Send a single progress update.
    ///
    /// Returns the acknowledgment on success. On failure the exact
    /// update is queued for later delivery and `None` is returned -
    /// callers treat `None` as "accepted for later", not as an error.
    pub fn push(&mut self, row_index: usize, is_correct: bool, mode: StudyMode) -> Option<UpdateAck> {
        let req = UpdateRequest::new(row_index, is_correct, mode);
        match deliver(&self.transport, &req) {
            Some(ack) => Some(ack),
            None => {
                if let Err(e) = self.queue.enqueue(&req) {
                    // No fallback left: the update is lost.
                    error!(row = req.row, "failed to queue offline update: {}", e);
                }
                None
            }
        }
    }

    /// Retry every queued update against the remote.
    ///
    /// Delegates the bookkeeping to [`OfflineQueue::drain`]; delivery
    /// failures here are not re-enqueued (the queue already keeps
    /// them), avoiding double-queuing.
    pub fn sync_offline_queue(&mut self) -> QueueResult<DrainOutcome> {
        let transport = &self.transport;
        self.queue.drain(|req| deliver(transport, req).is_some())
    }

    /// Fetch the remote's list of most-missed questions.
    /// `None` on any failure; there is no cache for this view.
    pub fn wrong_answers(&self) -> Option<Vec<ProgressRecord>> {
        match self.transport.get_wrong_answers() {
            Ok(resp) if resp.success => Some(resp.wrong_questions),
            Ok(_) => {
                warn!("remote reported failure on getWrongAnswers");
                None
            }
            Err(e) => {
                warn!("getWrongAnswers failed: {}", e);
                None
            }
        }
    }

    /// Number of updates waiting in the offline queue.
    pub fn pending_count(&self) -> QueueResult<usize> {
        self.queue.len()
    }

    /// The sheet this synchronizer is bound to.
    pub fn sheet(&self) -> &str {
        &self.sheet
    }
}

/// The raw delivery primitive shared by `push` and the drain pass.
/// `Some(ack)` only on a confirmed `success: true` response.
fn deliver<T: Transport>(transport: &T, req: &UpdateRequest) -> Option<UpdateAck> {
    match transport.post_update(req) {
        Ok(ack) if ack.success => Some(ack),
        Ok(_) => {
            warn!(row = req.row, "remote rejected update");
            None
        }
        Err(e) => {
            warn!(row = req.row, "update delivery failed: {}", e);
            None
        }
    }
}
