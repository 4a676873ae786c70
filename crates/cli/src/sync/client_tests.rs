// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the progress synchronizer.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use cram_core::progress::ProgressRecord;
use cram_core::protocol::StudyMode;
use tempfile::tempdir;

use crate::store::{keys, Store};

use super::client::ProgressClient;
use super::test_helpers::{make_record, make_update};
use super::transport_tests::MockTransport;

const SHEET: &str = "vocab";

fn make_client<'a>(
    transport: MockTransport,
    store: &'a Store,
    dir: &tempfile::TempDir,
) -> ProgressClient<'a, MockTransport> {
    let queue_path = dir.path().join("queue.jsonl");
    ProgressClient::with_transport(transport, store, &queue_path, SHEET).unwrap()
}

#[test]
fn pull_success_returns_fresh_and_refreshes_cache() {
    let dir = tempdir().unwrap();
    let store = Store::open_in_memory().unwrap();
    let records = vec![make_record(1, 0, Some("2024-01-01"))];
    let client = make_client(MockTransport::with_progress(records.clone()), &store, &dir);

    let pulled = client.pull().unwrap();
    assert_eq!(pulled, records);

    let cached: Vec<ProgressRecord> = store
        .get_json(&keys::progress_cache(SHEET))
        .unwrap()
        .unwrap();
    assert_eq!(cached, records);
}

#[test]
fn pull_failure_falls_back_to_cache() {
    let dir = tempdir().unwrap();
    let store = Store::open_in_memory().unwrap();
    let cached = vec![make_record(0, 2, None)];
    store
        .put_json(&keys::progress_cache(SHEET), &cached)
        .unwrap();

    let transport = MockTransport::new();
    transport.offline.set(true);
    let client = make_client(transport, &store, &dir);

    assert_eq!(client.pull().unwrap(), cached);
}

#[test]
fn pull_failure_without_cache_returns_none() {
    let dir = tempdir().unwrap();
    let store = Store::open_in_memory().unwrap();
    let transport = MockTransport::new();
    transport.offline.set(true);
    let client = make_client(transport, &store, &dir);

    assert!(client.pull().is_none());
}

#[test]
fn pull_remote_reported_failure_uses_cache() {
    let dir = tempdir().unwrap();
    let store = Store::open_in_memory().unwrap();
    let cached = vec![make_record(3, 1, Some("2024-02-02"))];
    store
        .put_json(&keys::progress_cache(SHEET), &cached)
        .unwrap();

    // Reachable, but the web app answers success: false.
    let transport = MockTransport::new();
    transport.progress_success.set(false);
    let client = make_client(transport, &store, &dir);

    assert_eq!(client.pull().unwrap(), cached);
}

#[test]
fn pull_malformed_response_treated_as_failure() {
    let dir = tempdir().unwrap();
    let store = Store::open_in_memory().unwrap();
    let transport = MockTransport::new();
    transport.malformed.set(true);
    let client = make_client(transport, &store, &dir);

    assert!(client.pull().is_none());
}

#[test]
fn pull_does_not_clobber_cache_on_failure() {
    let dir = tempdir().unwrap();
    let store = Store::open_in_memory().unwrap();
    let cached = vec![make_record(1, 1, None)];
    store
        .put_json(&keys::progress_cache(SHEET), &cached)
        .unwrap();

    let transport = MockTransport::new();
    transport.offline.set(true);
    let client = make_client(transport, &store, &dir);
    let _ = client.pull();

    let after: Vec<ProgressRecord> = store
        .get_json(&keys::progress_cache(SHEET))
        .unwrap()
        .unwrap();
    assert_eq!(after, cached);
}

#[test]
fn push_success_returns_ack_and_queues_nothing() {
    let dir = tempdir().unwrap();
    let store = Store::open_in_memory().unwrap();
    let mut client = make_client(MockTransport::new(), &store, &dir);

    let ack = client.push(4, true, StudyMode::Quiz).unwrap();
    assert!(ack.success);
    assert_eq!(client.pending_count().unwrap(), 0);
}

#[test]
fn push_failure_queues_exact_update_and_returns_none() {
    let dir = tempdir().unwrap();
    let store = Store::open_in_memory().unwrap();
    let transport = MockTransport::new();
    transport.offline.set(true);
    let mut client = make_client(transport, &store, &dir);

    assert!(client.push(4, true, StudyMode::Quiz).is_none());
    assert_eq!(client.pending_count().unwrap(), 1);

    // The queued mutation is byte-for-byte the failed request.
    let queue = super::queue::OfflineQueue::open(&dir.path().join("queue.jsonl")).unwrap();
    assert_eq!(queue.peek_all().unwrap(), vec![make_update(4)]);
}

#[test]
fn push_rejected_by_remote_is_queued_too() {
    let dir = tempdir().unwrap();
    let store = Store::open_in_memory().unwrap();
    let transport = MockTransport::new();
    transport.reject_rows.borrow_mut().insert(6);
    let mut client = make_client(transport, &store, &dir);

    assert!(client.push(4, false, StudyMode::Quiz).is_none());
    assert_eq!(client.pending_count().unwrap(), 1);
}

#[test]
fn sync_offline_queue_empty_is_noop() {
    let dir = tempdir().unwrap();
    let store = Store::open_in_memory().unwrap();
    let mut client = make_client(MockTransport::new(), &store, &dir);

    let outcome = client.sync_offline_queue().unwrap();
    assert_eq!(outcome.delivered, 0);
    assert_eq!(outcome.remaining, 0);
}

#[test]
fn sync_offline_queue_independent_failures_do_not_block() {
    let dir = tempdir().unwrap();
    let store = Store::open_in_memory().unwrap();
    let transport = MockTransport::new();
    transport.offline.set(true);
    let mut client = make_client(transport, &store, &dir);

    client.push(0, true, StudyMode::Quiz);
    client.push(1, false, StudyMode::Quiz);
    client.push(2, true, StudyMode::Quiz);
    assert_eq!(client.pending_count().unwrap(), 3);

    // Back online, but the server keeps rejecting row 3 (index 1).
    // The surrounding successes must still drain.
    // Access the transport through a fresh client on the same queue.
    let transport = MockTransport::new();
    transport.reject_rows.borrow_mut().insert(3);
    let mut client = ProgressClient::with_transport(
        transport,
        &store,
        &dir.path().join("queue.jsonl"),
        SHEET,
    )
    .unwrap();

    let outcome = client.sync_offline_queue().unwrap();
    assert_eq!(outcome.delivered, 2);
    assert_eq!(outcome.remaining, 1);
    assert_eq!(client.pending_count().unwrap(), 1);
}

#[test]
fn wrong_answers_success_and_failure() {
    let dir = tempdir().unwrap();
    let store = Store::open_in_memory().unwrap();
    let transport = MockTransport::new();
    *transport.wrong.borrow_mut() = vec![make_record(0, 5, Some("2024-03-03"))];
    let client = make_client(transport, &store, &dir);

    let wrong = client.wrong_answers().unwrap();
    assert_eq!(wrong.len(), 1);
    assert_eq!(wrong[0].wrong_count, 5);

    let transport = MockTransport::new();
    transport.offline.set(true);
    let client = make_client(transport, &store, &dir);
    assert!(client.wrong_answers().is_none());
}
