//! Application-wide constants.
//!
//! Endpoints, file names, timeouts and every piece of user-facing text the
//! summary prints live here so the rendering code stays free of literals.

use std::time::Duration;

// === Application Metadata ===

/// Application name (from Cargo.toml).
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
/// Current application version (from Cargo.toml).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// === Inputs ===

/// Report written by `cargo tarpaulin --out Json`, relative to the working directory.
pub const REPORT_FILE_NAME: &str = "tarpaulin-report.json";
/// Base URL of the Coveralls service. The repo slug and `.json` are appended.
pub const COVERALLS_BASE_URL: &str = "https://coveralls.io";
/// Field of the Coveralls build JSON holding the overall percentage.
pub const COVERALLS_PERCENT_FIELD: &str = "covered_percent";

/// Timeout for the baseline request.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

// === Report Filtering ===

/// Path segment marking test sources, which are left out of the summary.
pub const TESTS_SEGMENT: &str = "tests";
/// Path segment where the displayed file name starts.
pub const SRC_SEGMENT: &str = "src";

// === Rendering ===

/// Fence wrapping the whole summary.
pub const FENCE: &str = "```";
/// Character used for the rules above and below the table.
pub const UNDERLINE_CHAR: char = '_';
/// Width the per-file percentage is padded to.
pub const PERCENT_WIDTH: usize = 5;
/// Label of the delta suffix on the total line.
pub const DELTA_LABEL: &str = "against main";

// === Messages ===

pub const MSG_TOTAL: &str = "Total coverage";
pub const MSG_BREAKDOWN: &str = "Here is the full report breakdown";
pub const MSG_NO_COVERAGE: &str = "No coverage generated";

/// `{diff}` is replaced with the positive delta.
pub const MSG_HUMAN_INCREASE: &str = "Looks like you increased coverage by {diff} %, fantastic!";
/// `{branch}` and `{diff}` are replaced with the comparison branch and the negative delta.
pub const MSG_HUMAN_DECREASE: &str =
    "Seems the coverage is below {branch} by {diff} %, please consider adding to the tests, thanks!";
/// `{branch}` is replaced with the comparison branch.
pub const MSG_HUMAN_SAME: &str = "Great, coverage is exactly the same as {branch}!";
/// `{branch}` is replaced with the comparison branch.
pub const MSG_HUMAN_NO_COVERAGE: &str =
    "Looks like no coverage was generated this time, nothing to compare against {branch}.";

// === Error Messages ===

pub const ERR_HTTP_CLIENT_BUILD_FAILED: &str = "Failed to build HTTP client";
pub const ERR_NETWORK_REQUEST_FAILED: &str = "Network request failed";
pub const ERR_SERVER_ERROR: &str = "Server returned error: ";
pub const ERR_READ_CONTENT_FAILED: &str = "Failed to read content";
pub const ERR_INVALID_URL: &str = "Invalid baseline URL";
pub const ERR_INVALID_REPO: &str = "Invalid repository slug";
pub const ERR_NOT_JSON: &str = "Response is not JSON";
pub const ERR_MISSING_PERCENT: &str = "Response has no numeric covered_percent";
pub const ERR_READ_REPORT: &str = "Failed to read coverage report";
pub const ERR_PARSE_REPORT: &str = "Malformed coverage report";
