//! Summarises a `cargo tarpaulin` JSON report against the coverage Coveralls
//! recorded for a reference branch.
//!
//! The output is a fenced text block with the total coverage, the delta
//! against the baseline and a per-file table sorted from least to most
//! covered.

pub mod cli;
pub mod constants;
pub mod core;
pub mod state;
pub mod utils;
