//! Coverage state types.

mod coverage;

pub use coverage::{FileCoverageEntry, Report, Summary, Trend};
