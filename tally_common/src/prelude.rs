//! Prelude module for common re-exports.
//!
//! ```rust
//! use tally_common::prelude::*;
//! ```

// ─── Summation ──────────────────────────────────────────────────────
pub use crate::error::{NegativeValueError, SumError};
pub use crate::sum::{Summand, checked_sum_positive, sum_positive, sum_positive_iter};

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::config::{ConfigError, ConfigLoader, LogLevel, SharedConfig, TallyConfig};
