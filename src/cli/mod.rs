//! Command-line interface module.
//!
//! Provides argument parsing and the summary flow.

pub mod args;
pub mod summary;
