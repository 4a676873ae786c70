// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in cram-core.
#[derive(Debug, Error)]
pub enum Error {
    /// An answer was recorded for a question other than the current one.
    #[error("answer out of order: got index {index}, session is at {expected}")]
    InvalidIndex { index: usize, expected: usize },

    /// A session was started with no questions.
    #[error("cannot start a session with no questions")]
    EmptyDeck,

    /// Stored or received data did not match the expected shape.
    #[error("malformed data: {0}")]
    MalformedData(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for cram-core operations.
pub type Result<T> = std::result::Result<T, Error>;
