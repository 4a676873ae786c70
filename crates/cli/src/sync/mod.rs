// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Remote progress sync for the spreadsheet web app.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Synchronizer  │────►│  Transport  │────►│   Web App   │
//! │(ProgressClient)│◄────│   (trait)   │◄────│   (sheet)   │
//! └────────────────┘     └─────────────┘     └─────────────┘
//!        │ fallback                │ failure
//!        ▼                         ▼
//! ┌────────────────┐     ┌─────────────┐
//! │ Progress cache │     │    Queue    │  (offline updates)
//! │    (Store)     │     │(OfflineQueue)│
//! └────────────────┘     └─────────────┘
//! ```
//!
//! Every remote operation resolves to one of three outcomes: it
//! succeeded, the cached copy was used (reads), or the mutation was
//! queued for later delivery (writes). No network or parse error
//! escapes this module.

mod client;
mod queue;
mod transport;

pub use client::ProgressClient;
pub use queue::{DrainOutcome, OfflineQueue, QueueError, QueueResult};
pub use transport::{HttpTransport, Transport, TransportError, TransportResult};

#[cfg(test)]
mod test_helpers;

#[cfg(test)]
mod client_tests;

#[cfg(test)]
mod integration_tests;
