//! # Tally
//!
//! Library side of the `tally` demonstration binary: argument parsing and
//! the demonstration run, kept here so they can be tested without
//! spawning the process.
//!
//! - [`cli`] - Command-line arguments
//! - [`demo`] - Input selection and output rendering

pub mod cli;
pub mod demo;
