// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use std::fmt::{self, Debug};
use std::sync::Arc;
use tokio::time::Instant;

/// One recorded invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call<R, A> {
    pub receiver: R,
    pub args: A,
    /// Tokio time of the invocation (virtual when time is paused).
    pub at: Instant,
}

/// Shared, cloneable record of callback invocations.
pub struct CallLog<R, A> {
    calls: Arc<Mutex<Vec<Call<R, A>>>>,
}

impl<R, A> CallLog<R, A> {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Record one invocation at the current tokio instant.
    pub fn record(&self, receiver: R, args: A) {
        self.calls.lock().push(Call {
            receiver,
            args,
            at: Instant::now(),
        });
    }

    /// A callback recording into this log.
    pub fn callback(&self) -> impl Fn(R, A) + Send + Sync + 'static
    where
        R: Send + 'static,
        A: Send + 'static,
    {
        let log = self.clone();
        move |receiver, args| log.record(receiver, args)
    }

    pub fn len(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.lock().is_empty()
    }

    pub fn clear(&self) {
        self.calls.lock().clear();
    }
}

impl<R: Clone, A: Clone> CallLog<R, A> {
    pub fn calls(&self) -> Vec<Call<R, A>> {
        self.calls.lock().clone()
    }

    pub fn last(&self) -> Option<Call<R, A>> {
        self.calls.lock().last().cloned()
    }

    pub fn args(&self) -> Vec<A> {
        self.calls.lock().iter().map(|call| call.args.clone()).collect()
    }

    pub fn receivers(&self) -> Vec<R> {
        self.calls
            .lock()
            .iter()
            .map(|call| call.receiver.clone())
            .collect()
    }
}

impl<R, A> Clone for CallLog<R, A> {
    fn clone(&self) -> Self {
        Self {
            calls: Arc::clone(&self.calls),
        }
    }
}

impl<R, A> Default for CallLog<R, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, A> Debug for CallLog<R, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallLog")
            .field("len", &self.len())
            .finish()
    }
}
