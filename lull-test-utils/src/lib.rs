// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the lull debouncer.
//!
//! Designed for development and testing only.
//!
//! # Key Types
//!
//! ## `CallLog<R, A>`
//!
//! Records every invocation of a callback it hands out, together with the
//! (tokio) instant it happened at:
//!
//! ```rust
//! use lull_test_utils::CallLog;
//! use lull_test_utils::test_data::{person_alice, Person};
//!
//! let log = CallLog::<Person, &str>::new();
//! let callback = log.callback();
//!
//! callback(person_alice(), "hello");
//! assert_eq!(log.len(), 1);
//! assert_eq!(log.args(), vec!["hello"]);
//! ```
//!
//! ## Helpers
//!
//! - [`settle`] - yield until freshly woken tasks have run
//! - [`advance_and_settle`] - move paused tokio time forward, then settle
//!
//! # Module Organization
//!
//! - `call_log` - `CallLog` recorder and `Call` records
//! - `helpers` - virtual-time helpers
//! - `test_data` - `Person` receiver fixtures

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod call_log;
pub mod helpers;
pub mod test_data;

pub use call_log::{Call, CallLog};
pub use helpers::{advance_and_settle, settle};
pub use test_data::Person;
