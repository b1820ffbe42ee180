// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![cfg(feature = "runtime-smol")]

use lull::{Debouncer, SmolScheduler};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

fn recording_debouncer(
    wait: Duration,
) -> (Arc<Mutex<Vec<u32>>>, Debouncer<(), u32, (), SmolScheduler>) {
    let fired = Arc::new(Mutex::new(Vec::new()));
    let sink = fired.clone();
    let debounced = Debouncer::with_scheduler(
        move |(), value: u32| sink.lock().push(value),
        wait,
        SmolScheduler::new(),
    );
    (fired, debounced)
}

#[test]
fn test_debounce_smol_coalesces() {
    smol::block_on(async {
        // Arrange
        let (fired, debounced) = recording_debouncer(Duration::from_millis(30));

        // Act
        debounced.call(1);
        smol::Timer::after(Duration::from_millis(5)).await;
        debounced.call(2);
        debounced.call(3);
        smol::Timer::after(Duration::from_millis(150)).await;

        // Assert
        assert_eq!(*fired.lock(), vec![3]);
    });
}

#[test]
fn test_debounce_smol_cancel_and_flush() {
    smol::block_on(async {
        let (fired, debounced) = recording_debouncer(Duration::from_millis(30));

        debounced.call(1);
        debounced.cancel();
        debounced.call(2);
        assert_eq!(debounced.flush(), Some(()));
        smol::Timer::after(Duration::from_millis(100)).await;

        assert_eq!(*fired.lock(), vec![2]);
    });
}
