// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Export/import bundle for moving study state between machines.
//!
//! A bundle is a single JSON file holding whatever state exists at
//! export time: sessions, the selected questions, range markers, the
//! progress cache, and any queued offline updates. Import applies
//! only the fields present in the file; absent fields leave the local
//! state untouched.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cram_core::progress::ProgressRecord;
use cram_core::protocol::UpdateRequest;
use cram_core::session::{Question, SessionSnapshot};

use crate::error::{Error, Result};
use crate::store::{keys, Store};
use crate::sync::OfflineQueue;

/// Bundle format version. Bump on incompatible shape changes.
pub const BUNDLE_VERSION: &str = "1.0";

/// Portable snapshot of all local study state.
///
/// Every payload field is optional so partial bundles (say, just a
/// question selection) import cleanly.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    pub version: String,
    pub export_date: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiz: Option<SessionSnapshot>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flashcard: Option<SessionSnapshot>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_quiz_data: Option<Vec<Question>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_question: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_question: Option<usize>,

    /// Sheet the progress cache belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheet: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_cache: Option<Vec<ProgressRecord>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offline_queue: Option<Vec<UpdateRequest>>,
}

impl Bundle {
    /// Gather everything currently stored into a bundle.
    pub fn collect(store: &Store, queue: &OfflineQueue, sheet: Option<&str>) -> Result<Self> {
        let progress_cache = match sheet {
            Some(sheet) => store.get_json(&keys::progress_cache(sheet))?,
            None => None,
        };

        let pending = queue.peek_all()?;
        let offline_queue = if pending.is_empty() {
            None
        } else {
            Some(pending)
        };

        Ok(Bundle {
            version: BUNDLE_VERSION.to_string(),
            export_date: Utc::now(),
            quiz: store.get_json(keys::QUIZ_SESSION)?,
            flashcard: store.get_json(keys::FLASHCARD_SESSION)?,
            selected_quiz_data: store.get_json(keys::SELECTED)?,
            start_question: store.get_json(keys::START_QUESTION)?,
            end_question: store.get_json(keys::END_QUESTION)?,
            sheet: sheet.map(String::from),
            progress_cache,
            offline_queue,
        })
    }

    /// Write the bundle as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        if path.as_os_str().is_empty() {
            return Err(Error::ExportPathEmpty);
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Read and validate a bundle file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let bundle: Bundle = serde_json::from_str(&content).map_err(|e| Error::MalformedData {
            key: path.display().to_string(),
            reason: e.to_string(),
        })?;

        if bundle.version != BUNDLE_VERSION {
            return Err(Error::UnsupportedBundleVersion(bundle.version));
        }

        Ok(bundle)
    }

    /// Apply the bundle's payload to local state.
    ///
    /// Only fields present in the bundle are written; an imported
    /// queue replaces the local one. Returns how many fields were
    /// applied.
    pub fn apply(&self, store: &Store, queue: &mut OfflineQueue) -> Result<usize> {
        let mut applied = 0;

        if let Some(snapshot) = &self.quiz {
            store.put_json(keys::QUIZ_SESSION, snapshot)?;
            applied += 1;
        }
        if let Some(snapshot) = &self.flashcard {
            store.put_json(keys::FLASHCARD_SESSION, snapshot)?;
            applied += 1;
        }
        if let Some(selected) = &self.selected_quiz_data {
            store.put_json(keys::SELECTED, selected)?;
            applied += 1;
        }
        if let Some(start) = &self.start_question {
            store.put_json(keys::START_QUESTION, start)?;
            applied += 1;
        }
        if let Some(end) = &self.end_question {
            store.put_json(keys::END_QUESTION, end)?;
            applied += 1;
        }
        if let (Some(sheet), Some(cache)) = (&self.sheet, &self.progress_cache) {
            store.put_json(&keys::progress_cache(sheet), cache)?;
            applied += 1;
        }
        if let Some(updates) = &self.offline_queue {
            queue.replace_all(updates)?;
            applied += 1;
        }

        Ok(applied)
    }
}

#[cfg(test)]
#[path = "bundle_tests.rs"]
mod tests;
