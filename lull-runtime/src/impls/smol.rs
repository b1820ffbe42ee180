// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::scheduler::{run_deferred, ScheduledTask, Scheduler};
use crate::timer::Timer;
use core::pin::Pin;
use core::task::{Context, Poll};
use lull_core::CancellationToken;
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, Default)]
pub struct SmolTimer;

/// `async_io::Timer` adapted to a unit-output future.
#[derive(Debug)]
pub struct SmolSleep {
    timer: async_io::Timer,
}

impl SmolSleep {
    fn new(duration: Duration) -> Self {
        Self {
            timer: async_io::Timer::after(duration),
        }
    }
}

impl core::future::Future for SmolSleep {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.timer).poll(cx).map(|_| ())
    }
}

impl Timer for SmolTimer {
    type Sleep = SmolSleep;

    type Instant = Instant;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep {
        SmolSleep::new(duration)
    }

    fn now(&self) -> Self::Instant {
        Instant::now()
    }
}

/// Scheduler detaching each deferred execution onto smol's global executor.
#[derive(Clone, Debug, Default)]
pub struct SmolScheduler {
    timer: SmolTimer,
}

impl SmolScheduler {
    pub const fn new() -> Self {
        Self { timer: SmolTimer }
    }
}

impl Scheduler for SmolScheduler {
    type Timer = SmolTimer;

    fn timer(&self) -> &Self::Timer {
        &self.timer
    }

    fn schedule<F>(&self, delay: Duration, thunk: F) -> ScheduledTask
    where
        F: FnOnce() + Send + 'static,
    {
        let sleep = self.timer.sleep_future(delay);
        let cancel = CancellationToken::new();

        smol::spawn(run_deferred(sleep, cancel.clone(), thunk)).detach();

        ScheduledTask::new(cancel)
    }
}
