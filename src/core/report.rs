//! Tarpaulin JSON report loading.
//!
//! Only the per-file line counts are read; tarpaulin's traces and file
//! contents are ignored.

use std::fs;
use std::io;
use std::path::Path;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use serde::Deserialize;

use crate::constants;
use crate::state::{FileCoverageEntry, Report};

#[derive(Debug, Deserialize)]
struct TarpaulinReport {
    files: Vec<TarpaulinFile>,
}

#[derive(Debug, Deserialize)]
struct TarpaulinFile {
    path: Vec<String>,
    covered: u64,
    coverable: u64,
}

/// Loads the report at `path`.
///
/// Returns `Ok(None)` when the file does not exist, which happens when
/// coverage generation was skipped upstream.
///
/// # Errors
///
/// Fails when the file exists but cannot be read or is not a tarpaulin report.
pub fn load_report(path: &Path) -> Result<Option<Report>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "no coverage report found");
            return Ok(None);
        }
        Err(e) => {
            return Err(e)
                .wrap_err_with(|| format!("{}: {}", constants::ERR_READ_REPORT, path.display()))
        }
    };

    parse_report(&content)
        .wrap_err_with(|| format!("{}: {}", constants::ERR_PARSE_REPORT, path.display()))
        .map(Some)
}

/// Parses report JSON and keeps the entries that belong in the summary.
///
/// # Errors
///
/// Fails when `files` is missing or an entry has the wrong shape.
pub fn parse_report(json: &str) -> Result<Report> {
    let raw: TarpaulinReport = serde_json::from_str(json)?;

    let entries = raw
        .files
        .into_iter()
        .filter(|file| {
            let keep = is_reportable(&file.path, file.coverable);
            if !keep {
                tracing::debug!(path = %file.path.join("/"), "skipping file");
            }
            keep
        })
        .map(|file| FileCoverageEntry::new(display_name(&file.path), file.covered, file.coverable))
        .collect();

    Ok(Report::new(entries))
}

/// Files without coverable lines and test sources are left out.
fn is_reportable(segments: &[String], coverable: u64) -> bool {
    coverable > 0 && !segments.iter().any(|s| s == constants::TESTS_SEGMENT)
}

/// Slash-joined path, starting at the first `src` segment when there is one.
pub fn display_name(segments: &[String]) -> String {
    let start = segments
        .iter()
        .position(|s| s == constants::SRC_SEGMENT)
        .unwrap_or(0);
    segments[start..].join("/")
}
