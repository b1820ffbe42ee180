// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Common imports: `use lull::prelude::*;`

pub use crate::debouncer::{debounce, Debouncer};
pub use lull_core::{LullError, Result};
pub use lull_runtime::{Scheduler, Timer};
