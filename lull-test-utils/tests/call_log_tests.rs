// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lull_test_utils::test_data::{person_alice, person_bob};
use lull_test_utils::{advance_and_settle, CallLog, Person};
use tokio::time::Instant;

#[test]
fn test_call_log_starts_empty() {
    let log = CallLog::<Person, u32>::default();
    assert!(log.is_empty());
    assert_eq!(log.len(), 0);
    assert!(log.last().is_none());
}

#[test]
fn test_callback_records_receiver_and_args() {
    // Arrange
    let log = CallLog::new();
    let callback = log.callback();

    // Act
    callback(person_alice(), 1);
    callback(person_bob(), 2);

    // Assert
    assert_eq!(log.receivers(), vec![person_alice(), person_bob()]);
    assert_eq!(log.args(), vec![1, 2]);
    assert_eq!(log.last().map(|call| call.args), Some(2));
}

#[test]
fn test_clones_share_records() {
    let log = CallLog::new();
    let clone = log.clone();

    clone.record((), "x");
    assert_eq!(log.len(), 1);

    log.clear();
    assert!(clone.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_records_virtual_time() {
    // Arrange
    let start = Instant::now();
    let log = CallLog::new();

    // Act
    advance_and_settle(250).await;
    log.record((), ());

    // Assert
    let calls = log.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].at - start, std::time::Duration::from_millis(250));
}
