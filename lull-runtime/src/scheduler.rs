// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Deferred execution: run a thunk once after a delay unless cancelled first.

use crate::timer::Timer;
use core::fmt::Debug;
use core::future::Future;
use core::pin::pin;
use core::time::Duration;
use futures::future::{select, Either};
use lull_core::CancellationToken;

/// Handle to one scheduled execution.
///
/// Cancelling the handle (explicitly, through [`Scheduler::cancel`], or by
/// dropping it) guarantees the thunk will not start afterwards. Cancelling
/// after the thunk already ran has no effect.
///
/// # Example
///
/// ```rust
/// use lull_runtime::impls::tokio::TokioScheduler;
/// use lull_runtime::Scheduler;
/// use std::time::Duration;
///
/// # #[tokio::main]
/// # async fn main() {
/// let scheduler = TokioScheduler::current().unwrap();
/// let task = scheduler.schedule(Duration::from_millis(50), || println!("never printed"));
///
/// scheduler.cancel(task);
/// # }
/// ```
#[derive(Debug)]
pub struct ScheduledTask {
    cancel: CancellationToken,
}

impl ScheduledTask {
    /// Wrap the token a scheduler's spawned execution watches.
    pub const fn new(cancel: CancellationToken) -> Self {
        Self { cancel }
    }

    /// Stop the execution if it has not started yet.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// The deferred-execution primitive a debouncer runs on.
pub trait Scheduler: Clone + Send + Sync + Debug + 'static {
    type Timer: Timer;

    /// Clock used to measure delays.
    fn timer(&self) -> &Self::Timer;

    /// Run `thunk` once, `delay` from now, on the scheduler's runtime.
    ///
    /// Never runs `thunk` on the caller's stack, even for a zero delay.
    fn schedule<F>(&self, delay: Duration, thunk: F) -> ScheduledTask
    where
        F: FnOnce() + Send + 'static;

    /// Cancel a scheduled execution. Safe on executions that already ran.
    fn cancel(&self, task: ScheduledTask) {
        task.cancel();
    }
}

/// Body of a spawned execution: wait for the deadline or the token, whichever
/// comes first, and run the thunk only on the deadline.
///
/// Custom [`Scheduler`] implementations spawn this on their runtime.
pub async fn run_deferred<S, F>(sleep: S, cancel: CancellationToken, thunk: F)
where
    S: Future<Output = ()>,
    F: FnOnce(),
{
    let sleep = pin!(sleep);
    let cancelled = pin!(cancel.cancelled());

    if let Either::Left(((), _)) = select(sleep, cancelled).await {
        if !cancel.is_cancelled() {
            thunk();
        }
    }
}
