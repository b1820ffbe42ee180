// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![cfg(feature = "runtime-smol")]

use lull_runtime::impls::smol::SmolScheduler;
use lull_runtime::Scheduler;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

#[test]
fn test_smol_thunk_runs_after_delay() {
    smol::block_on(async {
        // Arrange
        let scheduler = SmolScheduler::new();
        let fired = Arc::new(Mutex::new(Vec::new()));
        let sink = fired.clone();

        // Act
        let _task = scheduler.schedule(Duration::from_millis(20), move || sink.lock().push("x"));
        assert!(fired.lock().is_empty());
        smol::Timer::after(Duration::from_millis(100)).await;

        // Assert
        assert_eq!(*fired.lock(), vec!["x"]);
    });
}

#[test]
fn test_smol_cancel_prevents_execution() {
    smol::block_on(async {
        let scheduler = SmolScheduler::default();
        let fired = Arc::new(Mutex::new(0));
        let sink = fired.clone();

        let task = scheduler.schedule(Duration::from_millis(20), move || *sink.lock() += 1);
        scheduler.cancel(task);
        smol::Timer::after(Duration::from_millis(100)).await;

        assert_eq!(*fired.lock(), 0);
    });
}
