// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod implementation;

use self::implementation::Shared;
use core::fmt::{self, Debug};
use core::time::Duration;
use lull_core::{LullError, Result};
use lull_runtime::{DefaultScheduler, Scheduler};
use std::sync::Arc;

/// Trailing-edge debouncer around a callback.
///
/// Every [`invoke`](Self::invoke) replaces the pending receiver and arguments
/// and restarts the quiet period. The callback runs once the quiet period
/// elapses without a new request, with the receiver and arguments of the last
/// request. Intermediate requests are discarded, never queued.
///
/// - [`cancel`](Self::cancel) drops the pending request without running it.
/// - [`flush`](Self::flush) runs the pending request now, on the caller's stack.
///
/// The receiver `R` is whatever the call is performed on behalf of; use `()`
/// (and [`call`](Self::call)) when there is none, or `Option<T>` when it may be
/// absent. Several arguments travel as a tuple in `A`.
///
/// Dropping the debouncer cancels the pending request. Share it between tasks
/// with `Arc`.
///
/// # Example
///
/// ```rust
/// use lull::Debouncer;
/// use std::sync::{Arc, Mutex};
/// use std::time::Duration;
///
/// # #[tokio::main]
/// # async fn main() -> lull::Result<()> {
/// let saved = Arc::new(Mutex::new(Vec::new()));
/// let sink = saved.clone();
///
/// let save = Debouncer::new(
///     move |document: &'static str, revision: u32| sink.lock().unwrap().push((document, revision)),
///     Duration::from_millis(100),
/// )?;
///
/// save.invoke("notes.md", 1);
/// save.invoke("notes.md", 2);
/// save.invoke("notes.md", 3);
///
/// // Force the trailing call instead of waiting for the quiet period.
/// save.flush();
/// assert_eq!(*saved.lock().unwrap(), vec![("notes.md", 3)]);
/// # Ok(())
/// # }
/// ```
pub struct Debouncer<R, A, O = (), S: Scheduler = DefaultScheduler> {
    shared: Arc<Shared<R, A, O, S>>,
}

impl<R, A, O> Debouncer<R, A, O, DefaultScheduler>
where
    R: Send + 'static,
    A: Send + 'static,
    O: 'static,
{
    /// Create a debouncer on the default scheduler of the enabled runtime.
    ///
    /// # Errors
    /// Returns [`LullError::NoRuntime`] when no runtime is available from the
    /// calling context.
    pub fn new<F>(callback: F, wait: Duration) -> Result<Self>
    where
        F: Fn(R, A) -> O + Send + Sync + 'static,
    {
        let scheduler = lull_runtime::default_scheduler()?;
        Ok(Self::with_scheduler(callback, wait, scheduler))
    }

    /// Create a debouncer from a signed millisecond count.
    ///
    /// # Errors
    /// Returns [`LullError::InvalidWait`] for a negative `wait_ms`, or
    /// [`LullError::NoRuntime`] as [`new`](Self::new) does.
    pub fn from_millis<F>(callback: F, wait_ms: i64) -> Result<Self>
    where
        F: Fn(R, A) -> O + Send + Sync + 'static,
    {
        let wait = u64::try_from(wait_ms)
            .map(Duration::from_millis)
            .map_err(|_| LullError::invalid_wait(wait_ms))?;
        Self::new(callback, wait)
    }
}

impl<R, A, O, S> Debouncer<R, A, O, S>
where
    R: Send + 'static,
    A: Send + 'static,
    O: 'static,
    S: Scheduler,
{
    /// Create a debouncer on an explicit scheduler.
    pub fn with_scheduler<F>(callback: F, wait: Duration, scheduler: S) -> Self
    where
        F: Fn(R, A) -> O + Send + Sync + 'static,
    {
        Self {
            shared: Arc::new(Shared::new(Box::new(callback), wait, scheduler)),
        }
    }

    /// Request a call of the callback with `receiver` and `args`.
    ///
    /// Cancels the previously scheduled execution, if any, and schedules a new
    /// one `wait` from now. Never runs the callback before returning, even
    /// with a zero wait.
    pub fn invoke(&self, receiver: R, args: A) {
        self.shared.invoke(receiver, args);
    }

    /// Drop the pending request, if any, without running the callback.
    ///
    /// Idempotent.
    pub fn cancel(&self) {
        self.shared.cancel();
    }

    /// Run the pending request now and return the callback's output.
    ///
    /// Returns `None` without calling the callback when nothing is pending.
    /// The scheduled execution is cancelled first, so nothing fires later.
    pub fn flush(&self) -> Option<O> {
        self.shared.flush()
    }

    /// Whether a request is waiting for its quiet period to elapse.
    pub fn is_pending(&self) -> bool {
        self.shared.is_pending()
    }

    /// The configured quiet period.
    pub fn wait(&self) -> Duration {
        self.shared.wait()
    }

    /// Time left before the pending request fires; `None` when idle.
    pub fn remaining(&self) -> Option<Duration> {
        self.shared.remaining()
    }
}

impl<A, O, S> Debouncer<(), A, O, S>
where
    A: Send + 'static,
    O: 'static,
    S: Scheduler,
{
    /// [`invoke`](Self::invoke) without a receiver.
    pub fn call(&self, args: A) {
        self.invoke((), args);
    }
}

impl<R, A, O, S: Scheduler> Drop for Debouncer<R, A, O, S> {
    fn drop(&mut self) {
        self.shared.cancel();
    }
}

impl<R, A, O, S: Scheduler> Debug for Debouncer<R, A, O, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debouncer")
            .field("wait", &self.shared.wait())
            .field("scheduler", self.shared.scheduler())
            .finish_non_exhaustive()
    }
}

/// Create a [`Debouncer`] on the default scheduler.
///
/// # Errors
/// See [`Debouncer::new`].
pub fn debounce<R, A, O, F>(callback: F, wait: Duration) -> Result<Debouncer<R, A, O>>
where
    R: Send + 'static,
    A: Send + 'static,
    O: 'static,
    F: Fn(R, A) -> O + Send + Sync + 'static,
{
    Debouncer::new(callback, wait)
}
