// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Trailing-edge debouncing of callbacks.
//!
//! A [`Debouncer`] wraps a callback and a quiet period. Bursts of calls
//! through it collapse into one trailing call carrying the receiver and
//! arguments of the last request. [`Debouncer::cancel`] drops the pending
//! call, [`Debouncer::flush`] runs it immediately.
//!
//! This is not a throttle: under sustained activity nothing runs until the
//! activity stops for a full quiet period.
//!
//! # Runtime Support
//!
//! - `runtime-tokio` (default) - executions run as tokio tasks
//! - `runtime-smol` - executions run on smol's global executor
//!
//! Custom runtimes plug in through [`Scheduler`].
//!
//! # Example
//!
//! ```rust
//! use lull::debounce;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() -> lull::Result<()> {
//! let searches = Arc::new(AtomicUsize::new(0));
//! let counter = searches.clone();
//!
//! let search = debounce(
//!     move |(), query: String| {
//!         counter.fetch_add(1, Ordering::SeqCst);
//!         query.len()
//!     },
//!     Duration::from_millis(20),
//! )?;
//!
//! for query in ["r", "ru", "rus", "rust"] {
//!     search.call(query.to_string());
//! }
//! tokio::time::sleep(Duration::from_millis(50)).await;
//!
//! assert_eq!(searches.load(Ordering::SeqCst), 1);
//! assert_eq!(search.flush(), None);
//! # Ok(())
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[cfg(not(any(feature = "runtime-tokio", feature = "runtime-smol")))]
compile_error!("lull needs a runtime feature: enable `runtime-tokio` or `runtime-smol`");

mod debouncer;
mod logging;

pub mod prelude;

pub use debouncer::{debounce, Debouncer};
pub use lull_core::{LullError, Result};
pub use lull_runtime::{DefaultScheduler, ScheduledTask, Scheduler, Timer};

#[cfg(feature = "runtime-tokio")]
pub use lull_runtime::impls::tokio::{TokioScheduler, TokioTimer};

#[cfg(feature = "runtime-smol")]
pub use lull_runtime::impls::smol::{SmolScheduler, SmolTimer};
