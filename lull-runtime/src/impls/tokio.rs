// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::scheduler::{run_deferred, ScheduledTask, Scheduler};
use crate::timer::Timer;
use lull_core::{CancellationToken, LullError, Result};
use std::panic::catch_unwind;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::time::Instant;

/// Tokio clock.
///
/// Uses `tokio::time::Instant` so that paused test time (`tokio::time::pause`)
/// is observed by `now()` as well as by sleeps.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioTimer;

impl Timer for TokioTimer {
    type Sleep = tokio::time::Sleep;

    type Instant = Instant;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep {
        tokio::time::sleep(duration)
    }

    fn now(&self) -> Self::Instant {
        Instant::now()
    }
}

/// Scheduler spawning each deferred execution as a tokio task.
///
/// Holds the runtime handle it was created with, so `schedule` may be called
/// from threads outside the runtime.
#[derive(Clone, Debug)]
pub struct TokioScheduler {
    handle: Handle,
    timer: TokioTimer,
}

impl TokioScheduler {
    /// Bind to the runtime of the calling context.
    ///
    /// # Errors
    /// Returns [`LullError::NoRuntime`] when called outside a tokio runtime,
    /// or when that runtime was built without its time driver.
    pub fn current() -> Result<Self> {
        let handle =
            Handle::try_current().map_err(|err| LullError::no_runtime(err.to_string()))?;
        Self::try_from_handle(handle)
    }

    /// Bind to an explicit runtime handle, checking that it can run timers.
    ///
    /// # Errors
    /// Returns [`LullError::NoRuntime`] when the runtime was built without
    /// `enable_time()`.
    pub fn try_from_handle(handle: Handle) -> Result<Self> {
        if timers_enabled(&handle) {
            Ok(Self::from_handle(handle))
        } else {
            Err(LullError::no_runtime("timers are disabled on this tokio runtime"))
        }
    }

    /// Bind to an explicit runtime handle without checking it.
    ///
    /// `schedule` panics if the runtime has no time driver; see
    /// [`try_from_handle`](Self::try_from_handle).
    pub const fn from_handle(handle: Handle) -> Self {
        Self {
            handle,
            timer: TokioTimer,
        }
    }
}

// Tokio has no query for its time driver; creating a sleep panics without one.
fn timers_enabled(handle: &Handle) -> bool {
    let _guard = handle.enter();
    catch_unwind(|| drop(tokio::time::sleep(Duration::ZERO))).is_ok()
}

impl Scheduler for TokioScheduler {
    type Timer = TokioTimer;

    fn timer(&self) -> &Self::Timer {
        &self.timer
    }

    fn schedule<F>(&self, delay: Duration, thunk: F) -> ScheduledTask
    where
        F: FnOnce() + Send + 'static,
    {
        // The sleep registers with the runtime's timer driver on creation.
        let _guard = self.handle.enter();
        let sleep = self.timer.sleep_future(delay);
        let cancel = CancellationToken::new();

        self.handle.spawn(run_deferred(sleep, cancel.clone(), thunk));

        ScheduledTask::new(cancel)
    }
}
