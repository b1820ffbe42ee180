// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Deferred-execution primitives for the lull debouncer.
//!
//! - [`timer::Timer`] - runtime-agnostic sleep and clock
//! - [`scheduler::Scheduler`] - `schedule(delay, thunk) -> ScheduledTask` / `cancel(task)`
//! - [`impls`] - tokio (`runtime-tokio`, default) and smol (`runtime-smol`) backends

pub mod impls;
pub mod scheduler;
pub mod timer;

pub use scheduler::{ScheduledTask, Scheduler};
pub use timer::Timer;

/// Scheduler used by constructors that do not take one explicitly.
#[cfg(feature = "runtime-tokio")]
pub type DefaultScheduler = impls::tokio::TokioScheduler;

/// Scheduler used by constructors that do not take one explicitly.
#[cfg(all(feature = "runtime-smol", not(feature = "runtime-tokio")))]
pub type DefaultScheduler = impls::smol::SmolScheduler;

/// Build the default scheduler for the enabled runtime feature.
///
/// # Errors
/// Returns [`lull_core::LullError::NoRuntime`] when the runtime cannot host
/// deferred executions from the calling context.
#[cfg(feature = "runtime-tokio")]
pub fn default_scheduler() -> lull_core::Result<DefaultScheduler> {
    impls::tokio::TokioScheduler::current()
}

/// Build the default scheduler for the enabled runtime feature.
///
/// # Errors
/// Never fails: smol's global executor is always available.
#[cfg(all(feature = "runtime-smol", not(feature = "runtime-tokio")))]
pub fn default_scheduler() -> lull_core::Result<DefaultScheduler> {
    Ok(impls::smol::SmolScheduler::new())
}
