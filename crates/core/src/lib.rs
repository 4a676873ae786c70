// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! cram-core - session and progress model for the cram study tool.
//!
//! This crate holds the pure, storage-free parts of cram:
//!
//! - [`session`] - the study session state machine ([`Session`],
//!   [`SessionSnapshot`]) with resume-by-fingerprint semantics
//! - [`progress`] - per-question progress records and the
//!   recommendation helpers built on them
//! - [`protocol`] - JSON wire types for the spreadsheet web app
//! - [`Error`] - error types for all operations
//!
//! Durable storage, the offline queue, and the HTTP transport live in
//! the `cram` CLI crate; everything here is deterministic and
//! side-effect free.

pub mod error;
pub mod progress;
pub mod protocol;
pub mod session;

pub use error::{Error, Result};
pub use progress::ProgressRecord;
pub use protocol::{StudyMode, UpdateRequest};
pub use session::{Question, Session, SessionSnapshot};
