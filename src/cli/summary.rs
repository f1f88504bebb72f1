//! Summary flow: load the report, fetch the baseline, render the block.
//!
//! The rendered block is fenced so it can be posted as-is into a pull
//! request comment.

use std::fmt::Write as _;

use color_eyre::Result;

use crate::cli::args::Config;
use crate::constants;
use crate::core::{baseline, report};
use crate::state::{Summary, Trend};
use crate::utils::format_float;

/// Produces the text to print for `config`.
///
/// The report is read before any network traffic, so a missing report
/// short-circuits without contacting Coveralls.
///
/// # Errors
///
/// Fails when the report exists but is unreadable or malformed.
pub fn run(config: &Config) -> Result<String> {
    let Some(report) = report::load_report(&config.report_path)? else {
        return Ok(render_no_coverage(config));
    };

    let baseline = baseline::fetch_baseline(&config.base_url, &config.repo, &config.branch);
    let summary = report.summarize(baseline);
    tracing::info!(
        covered = summary.total_covered,
        coverable = summary.total_coverable,
        overall = summary.overall,
        files = summary.entries.len(),
        "summarised coverage report"
    );

    Ok(render_summary(&summary, &config.branch, config.human))
}

/// One-line message printed when no report was generated.
pub fn render_no_coverage(config: &Config) -> String {
    if config.human {
        constants::MSG_HUMAN_NO_COVERAGE.replace("{branch}", &config.branch)
    } else {
        constants::MSG_NO_COVERAGE.to_string()
    }
}

/// Humanised lead-in; empty unless `human` is set and a baseline was found.
pub fn render_header(summary: &Summary, branch: &str, human: bool) -> String {
    if !human {
        return String::new();
    }
    let (Some(trend), Some(diff)) = (summary.trend(), summary.diff) else {
        return String::new();
    };

    let sentence = match trend {
        Trend::Increased => constants::MSG_HUMAN_INCREASE.replace("{diff}", &format_float(diff)),
        Trend::Decreased => constants::MSG_HUMAN_DECREASE
            .replace("{branch}", branch)
            .replace("{diff}", &format_float(diff)),
        Trend::Unchanged => constants::MSG_HUMAN_SAME.replace("{branch}", branch),
    };

    format!("{sentence}\n{}\n\n", constants::MSG_BREAKDOWN)
}

/// Renders the fenced summary block (without a trailing newline).
pub fn render_summary(summary: &Summary, branch: &str, human: bool) -> String {
    let width = summary.name_width();
    let rule = constants::UNDERLINE_CHAR.to_string().repeat(width);

    let mut out = String::with_capacity(128 + summary.entries.len() * (width + 24));

    let _ = writeln!(out, "{}", constants::FENCE);
    out.push_str(&render_header(summary, branch, human));

    let _ = write!(
        out,
        "{} {} %",
        constants::MSG_TOTAL,
        format_float(summary.overall)
    );
    if let Some(diff) = summary.diff {
        let _ = write!(
            out,
            " ({}{} % {})",
            Trend::of(diff).sign(),
            format_float(diff.abs()),
            constants::DELTA_LABEL
        );
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "{rule}");
    for entry in &summary.entries {
        let _ = writeln!(
            out,
            "{:<width$} | {:>pct$} % {} / {}",
            entry.path,
            format_float(entry.percent()),
            entry.covered,
            entry.coverable,
            pct = constants::PERCENT_WIDTH,
        );
    }
    let _ = writeln!(out, "{rule}");
    out.push_str(constants::FENCE);

    out
}
