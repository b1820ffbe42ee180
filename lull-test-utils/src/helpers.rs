// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;
use tokio::task::yield_now;
use tokio::time::advance;

const SETTLE_ROUNDS: usize = 8;

/// Yield to the runtime so tasks woken by a timer get to run.
pub async fn settle() {
    for _ in 0..SETTLE_ROUNDS {
        yield_now().await;
    }
}

/// Advance paused tokio time by `ms` milliseconds, then [`settle`].
///
/// Requires paused time, e.g. `#[tokio::test(start_paused = true)]`.
pub async fn advance_and_settle(ms: u64) {
    advance(Duration::from_millis(ms)).await;
    settle().await;
}
