// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![cfg(feature = "runtime-tokio")]

use lull_core::LullError;
use lull_runtime::impls::tokio::{TokioScheduler, TokioTimer};
use lull_runtime::{Scheduler, Timer};
use lull_test_utils::{advance_and_settle, settle};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

fn counter() -> (Arc<AtomicUsize>, impl FnOnce() + Send + 'static) {
    let count = Arc::new(AtomicUsize::new(0));
    let thunk = {
        let count = count.clone();
        move || {
            count.fetch_add(1, Ordering::SeqCst);
        }
    };
    (count, thunk)
}

#[test]
fn test_current_fails_outside_runtime() {
    let err = TokioScheduler::current().unwrap_err();
    assert!(matches!(err, LullError::NoRuntime { .. }));
}

#[test]
fn test_current_fails_without_time_driver() -> anyhow::Result<()> {
    // Arrange
    let runtime = tokio::runtime::Builder::new_current_thread().build()?;

    // Act
    let err = runtime
        .block_on(async { TokioScheduler::current() })
        .unwrap_err();

    // Assert
    assert!(matches!(err, LullError::NoRuntime { .. }));
    assert!(err.to_string().contains("timers are disabled"));

    let err = TokioScheduler::try_from_handle(runtime.handle().clone()).unwrap_err();
    assert!(matches!(err, LullError::NoRuntime { .. }));

    Ok(())
}

#[test]
fn test_try_from_handle_accepts_runtime_with_timers() -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    let scheduler = TokioScheduler::try_from_handle(runtime.handle().clone());

    assert!(scheduler.is_ok());

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_thunk_runs_after_delay() -> anyhow::Result<()> {
    // Arrange
    let scheduler = TokioScheduler::current()?;
    let (count, thunk) = counter();

    // Act
    let _task = scheduler.schedule(Duration::from_millis(100), thunk);

    // Assert
    advance_and_settle(99).await;
    assert_eq!(count.load(Ordering::SeqCst), 0);

    advance_and_settle(1).await;
    assert_eq!(count.load(Ordering::SeqCst), 1);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_zero_delay_is_not_synchronous() -> anyhow::Result<()> {
    // Arrange
    let scheduler = TokioScheduler::current()?;
    let (count, thunk) = counter();

    // Act
    let _task = scheduler.schedule(Duration::ZERO, thunk);

    // Assert
    assert_eq!(count.load(Ordering::SeqCst), 0);
    settle().await;
    assert_eq!(count.load(Ordering::SeqCst), 1);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_cancel_prevents_execution() -> anyhow::Result<()> {
    // Arrange
    let scheduler = TokioScheduler::current()?;
    let (count, thunk) = counter();
    let task = scheduler.schedule(Duration::from_millis(100), thunk);

    // Act
    advance_and_settle(50).await;
    scheduler.cancel(task);

    // Assert
    advance_and_settle(500).await;
    assert_eq!(count.load(Ordering::SeqCst), 0);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_dropping_task_cancels_execution() -> anyhow::Result<()> {
    let scheduler = TokioScheduler::current()?;
    let (count, thunk) = counter();

    drop(scheduler.schedule(Duration::from_millis(10), thunk));

    advance_and_settle(100).await;
    assert_eq!(count.load(Ordering::SeqCst), 0);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_cancel_after_execution_is_harmless() -> anyhow::Result<()> {
    let scheduler = TokioScheduler::current()?;
    let (count, thunk) = counter();
    let task = scheduler.schedule(Duration::from_millis(10), thunk);

    advance_and_settle(10).await;
    assert_eq!(count.load(Ordering::SeqCst), 1);

    task.cancel();
    assert!(task.is_cancelled());
    scheduler.cancel(task);
    assert_eq!(count.load(Ordering::SeqCst), 1);

    Ok(())
}

#[test]
fn test_schedule_from_outside_runtime_thread() -> anyhow::Result<()> {
    // Arrange
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    let scheduler = TokioScheduler::from_handle(runtime.handle().clone());
    let (tx, rx) = std::sync::mpsc::channel();

    // Act
    let _task = scheduler.schedule(Duration::from_millis(5), move || {
        let _ = tx.send(42);
    });
    runtime.block_on(async { tokio::time::sleep(Duration::from_millis(50)).await });

    // Assert
    assert_eq!(rx.try_recv()?, 42);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_timer_now_follows_paused_clock() {
    let timer = TokioTimer;
    let start = timer.now();

    advance_and_settle(75).await;

    assert_eq!(timer.now() - start, Duration::from_millis(75));
}
