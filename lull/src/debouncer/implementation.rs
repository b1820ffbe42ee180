// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::logging::{debug, trace};
use core::time::Duration;
use lull_runtime::{ScheduledTask, Scheduler, Timer};
use parking_lot::Mutex;
use std::sync::Arc;

pub(crate) type Instant<S> = <<S as Scheduler>::Timer as Timer>::Instant;

/// Receiver and arguments of the most recent request. Stored as one value so
/// they are always present or absent together.
#[derive(Debug)]
pub(crate) struct PendingInvocation<R, A> {
    pub(crate) receiver: R,
    pub(crate) args: A,
}

/// The outstanding deferred execution.
#[derive(Debug)]
pub(crate) struct Scheduled<I> {
    pub(crate) task: ScheduledTask,
    pub(crate) deadline: I,
    pub(crate) generation: u64,
}

#[derive(Debug)]
pub(crate) struct State<R, A, I> {
    pub(crate) pending: Option<PendingInvocation<R, A>>,
    pub(crate) scheduled: Option<Scheduled<I>>,
    pub(crate) generation: u64,
}

impl<R, A, I> State<R, A, I> {
    const fn idle() -> Self {
        Self {
            pending: None,
            scheduled: None,
            generation: 0,
        }
    }

    fn next_generation(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Clear everything. Returns the discarded invocation, to be dropped once
    /// the lock is released, and the token that still has to be cancelled.
    fn clear(&mut self) -> (Option<PendingInvocation<R, A>>, Option<ScheduledTask>) {
        let discarded = self.pending.take();
        let task = self.scheduled.take().map(|scheduled| scheduled.task);
        (discarded, task)
    }

    /// Take the pending invocation if `generation` is still the live one.
    fn take_if_current(&mut self, generation: u64) -> Option<PendingInvocation<R, A>> {
        match &self.scheduled {
            Some(scheduled) if scheduled.generation == generation => {
                self.scheduled = None;
                self.pending.take()
            }
            _ => None,
        }
    }
}

pub(crate) type Callback<R, A, O> = Box<dyn Fn(R, A) -> O + Send + Sync>;

/// State shared between a `Debouncer` and the executions it schedules.
///
/// Scheduled thunks only hold a `Weak` to it.
pub(crate) struct Shared<R, A, O, S: Scheduler> {
    callback: Callback<R, A, O>,
    scheduler: S,
    wait: Duration,
    state: Mutex<State<R, A, Instant<S>>>,
}

impl<R, A, O, S: Scheduler> Shared<R, A, O, S> {
    pub(crate) const fn wait(&self) -> Duration {
        self.wait
    }

    pub(crate) const fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub(crate) fn cancel(&self) {
        let (discarded, task) = self.state.lock().clear();

        if let Some(task) = task {
            debug!("lull: cancelled pending invocation");
            self.scheduler.cancel(task);
        }

        // Receiver and arguments may re-enter the debouncer when dropped.
        drop(discarded);
    }

    pub(crate) fn is_pending(&self) -> bool {
        self.state.lock().pending.is_some()
    }

    pub(crate) fn remaining(&self) -> Option<Duration> {
        let deadline = self.state.lock().scheduled.as_ref()?.deadline;
        let now = self.scheduler.timer().now();

        Some(if deadline > now {
            deadline - now
        } else {
            Duration::ZERO
        })
    }
}

impl<R, A, O, S> Shared<R, A, O, S>
where
    R: Send + 'static,
    A: Send + 'static,
    O: 'static,
    S: Scheduler,
{
    pub(crate) fn new(callback: Callback<R, A, O>, wait: Duration, scheduler: S) -> Self {
        Self {
            callback,
            scheduler,
            wait,
            state: Mutex::new(State::idle()),
        }
    }

    pub(crate) fn invoke(self: &Arc<Self>, receiver: R, args: A) {
        let mut state = self.state.lock();

        if let Some(superseded) = state.scheduled.take() {
            trace!("lull: superseding generation {}", superseded.generation);
            self.scheduler.cancel(superseded.task);
        }

        let generation = state.next_generation();
        let discarded = state.pending.replace(PendingInvocation { receiver, args });

        let shared = Arc::downgrade(self);
        let deadline = self.scheduler.timer().now() + self.wait;
        let task = self.scheduler.schedule(self.wait, move || {
            if let Some(shared) = shared.upgrade() {
                shared.fire(generation);
            }
        });

        state.scheduled = Some(Scheduled {
            task,
            deadline,
            generation,
        });
        drop(state);
        debug!(
            "lull: scheduled generation {} in {:?}",
            generation, self.wait
        );

        // Dropped outside the lock, like the callback runs outside it.
        drop(discarded);
    }

    fn fire(&self, generation: u64) {
        // Released before the callback runs so it may re-enter the debouncer.
        let invocation = self.state.lock().take_if_current(generation);

        match invocation {
            Some(PendingInvocation { receiver, args }) => {
                debug!("lull: firing generation {}", generation);
                let _output = (self.callback)(receiver, args);
            }
            None => trace!("lull: stale generation {} skipped", generation),
        }
    }

    pub(crate) fn flush(&self) -> Option<O> {
        let (invocation, task) = {
            let mut state = self.state.lock();
            let invocation = state.pending.take()?;
            let (_, task) = state.clear();
            (invocation, task)
        };

        if let Some(task) = task {
            self.scheduler.cancel(task);
        }

        debug!("lull: flushing pending invocation");
        Some((self.callback)(invocation.receiver, invocation.args))
    }
}
