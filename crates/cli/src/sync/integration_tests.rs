// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end sync scenarios across client, queue, and transport.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use cram_core::protocol::StudyMode;
use tempfile::tempdir;

use crate::store::Store;

use super::client::ProgressClient;
use super::test_helpers::make_update;
use super::transport_tests::MockTransport;

#[test]
fn offline_update_is_queued_then_delivered_exactly_once() {
    let dir = tempdir().unwrap();
    let queue_path = dir.path().join("queue.jsonl");
    let store = Store::open_in_memory().unwrap();
    let mock = MockTransport::new();

    let mut client =
        ProgressClient::with_transport(&mock, &store, &queue_path, "vocab").unwrap();

    // Network drops; the answer must land in the queue instead.
    mock.offline.set(true);
    assert!(client.push(4, true, StudyMode::Quiz).is_none());
    assert_eq!(client.pending_count().unwrap(), 1);
    assert!(mock.delivered.borrow().is_empty());

    // Connectivity returns; the drain empties the queue.
    mock.offline.set(false);
    let outcome = client.sync_offline_queue().unwrap();
    assert_eq!(outcome.delivered, 1);
    assert_eq!(outcome.remaining, 0);
    assert_eq!(client.pending_count().unwrap(), 0);

    // Delivered exactly once, with the original wire row.
    assert_eq!(mock.delivered.borrow().as_slice(), &[make_update(4)]);

    // A second drain finds nothing to resend.
    let outcome = client.sync_offline_queue().unwrap();
    assert_eq!(outcome.delivered, 0);
    assert_eq!(mock.delivered.borrow().len(), 1);
}

#[test]
fn queued_updates_survive_process_restart() {
    let dir = tempdir().unwrap();
    let queue_path = dir.path().join("queue.jsonl");
    let store = Store::open_in_memory().unwrap();

    // First run: everything fails, two answers queue up.
    {
        let mock = MockTransport::new();
        mock.offline.set(true);
        let mut client =
            ProgressClient::with_transport(&mock, &store, &queue_path, "vocab").unwrap();
        client.push(0, true, StudyMode::Quiz);
        client.push(1, false, StudyMode::Quiz);
    }

    // Second run on the same queue file delivers both, in order.
    let mock = MockTransport::new();
    let mut client =
        ProgressClient::with_transport(&mock, &store, &queue_path, "vocab").unwrap();
    assert_eq!(client.pending_count().unwrap(), 2);

    let outcome = client.sync_offline_queue().unwrap();
    assert_eq!(outcome.delivered, 2);

    let delivered = mock.delivered.borrow();
    assert_eq!(delivered.len(), 2);
    assert_eq!(delivered[0].row, 2);
    assert!(delivered[0].is_correct);
    assert_eq!(delivered[1].row, 3);
    assert!(!delivered[1].is_correct);
}

#[test]
fn partial_drain_retries_only_the_failures() {
    let dir = tempdir().unwrap();
    let queue_path = dir.path().join("queue.jsonl");
    let store = Store::open_in_memory().unwrap();
    let mock = MockTransport::new();
    let mut client =
        ProgressClient::with_transport(&mock, &store, &queue_path, "vocab").unwrap();

    mock.offline.set(true);
    for row_index in 0..3 {
        client.push(row_index, true, StudyMode::Quiz);
    }

    // Row 3 (index 1) keeps bouncing; the others deliver.
    mock.offline.set(false);
    mock.reject_rows.borrow_mut().insert(3);
    let outcome = client.sync_offline_queue().unwrap();
    assert_eq!(outcome.delivered, 2);
    assert_eq!(outcome.remaining, 1);

    // Once the remote accepts it, the retry sends only that row.
    mock.reject_rows.borrow_mut().clear();
    let outcome = client.sync_offline_queue().unwrap();
    assert_eq!(outcome.delivered, 1);
    assert_eq!(outcome.remaining, 0);

    let delivered = mock.delivered.borrow();
    let rows: Vec<u32> = delivered.iter().map(|req| req.row).collect();
    assert_eq!(rows, vec![2, 4, 3]);
}

#[test]
fn pull_round_trip_through_cache() {
    let dir = tempdir().unwrap();
    let queue_path = dir.path().join("queue.jsonl");
    let store = Store::open_in_memory().unwrap();
    let mock = MockTransport::with_progress(vec![
        super::test_helpers::make_record(2, 1, Some("2024-05-01")),
        super::test_helpers::make_record(0, 0, None),
    ]);

    let client = ProgressClient::with_transport(&mock, &store, &queue_path, "vocab").unwrap();

    // A live pull primes the cache.
    let fresh = client.pull().unwrap();
    assert_eq!(fresh.len(), 2);

    // Losing the network afterwards serves the same records.
    mock.offline.set(true);
    let stale = client.pull().unwrap();
    assert_eq!(stale, fresh);
}
