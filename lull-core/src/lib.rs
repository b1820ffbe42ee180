// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Core types shared by the lull crates.
//!
//! - [`LullError`] / [`Result`] - construction-time failures of a debouncer
//! - [`CancellationToken`] - runtime-agnostic cancellation signal used by
//!   scheduled executions

pub mod cancellation_token;
pub mod error;

pub use self::cancellation_token::{CancellationToken, Cancelled};
pub use self::error::{LullError, Result};
