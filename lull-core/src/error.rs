// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the lull debouncer
//!
//! A debouncer never raises errors of its own once built: failures of the
//! wrapped callback reach the caller untouched. The only errors are
//! precondition violations detected when a debouncer is constructed.
//!
//! # Examples
//!
//! ```
//! use lull_core::{LullError, Result};
//!
//! fn validate(wait_ms: i64) -> Result<u64> {
//!     u64::try_from(wait_ms).map_err(|_| LullError::invalid_wait(wait_ms))
//! }
//!
//! assert!(validate(-1).is_err());
//! assert_eq!(validate(100).unwrap(), 100);
//! ```

/// Root error type for lull operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LullError {
    /// The wait duration handed to a constructor was negative.
    #[error("Invalid wait duration: {wait_ms}ms (must be non-negative)")]
    InvalidWait {
        /// The rejected duration, in milliseconds
        wait_ms: i64,
    },

    /// No async runtime was available to host the deferred execution.
    ///
    /// Raised when a default scheduler is requested outside of a runtime
    /// context.
    #[error("No async runtime available: {context}")]
    NoRuntime {
        /// What the runtime lookup reported
        context: String,
    },
}

impl LullError {
    /// Create an invalid wait error for the given duration
    pub const fn invalid_wait(wait_ms: i64) -> Self {
        Self::InvalidWait { wait_ms }
    }

    /// Create a missing runtime error with the given context
    pub fn no_runtime(context: impl Into<String>) -> Self {
        Self::NoRuntime {
            context: context.into(),
        }
    }
}

/// Specialized Result type for lull operations
pub type Result<T> = std::result::Result<T, LullError>;
