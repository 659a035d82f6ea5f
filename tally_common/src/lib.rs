//! Tally Common Library
//!
//! Non-negative summation with first-negative error reporting, plus the
//! configuration loading used by the `tally` binary.
//!
//! # Module Structure
//!
//! - [`sum`] - Summation functions and the [`Summand`](sum::Summand) trait
//! - [`error`] - Summation error types
//! - [`config`] - Configuration loading traits and types
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! ```rust
//! use tally_common::prelude::*;
//!
//! assert_eq!(sum_positive(&[1, 2, 3]), Ok(6));
//! assert!(sum_positive(&[1, -1, 5]).is_err());
//! ```

pub mod config;
pub mod error;
pub mod prelude;
pub mod sum;
