//! Input loading: the local tarpaulin report and the remote baseline.

pub mod baseline;
pub mod report;
