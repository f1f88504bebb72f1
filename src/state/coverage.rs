//! Coverage data model and aggregation.

use crate::utils;

/// Line counts for one source file of the report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileCoverageEntry {
    /// Display name (slash-joined, starting at `src` when present).
    pub path: String,
    /// Lines exercised by the test run.
    pub covered: u64,
    /// Lines eligible for coverage measurement.
    pub coverable: u64,
}

impl FileCoverageEntry {
    pub fn new(path: impl Into<String>, covered: u64, coverable: u64) -> Self {
        Self {
            path: path.into(),
            covered,
            coverable,
        }
    }

    /// Coverage of this file in percent, rounded to two decimals.
    #[must_use]
    pub fn percent(&self) -> f64 {
        utils::percent(self.covered, self.coverable)
    }
}

/// Per-file entries retained from a tarpaulin report, in file order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    entries: Vec<FileCoverageEntry>,
}

impl Report {
    #[must_use]
    pub fn new(entries: Vec<FileCoverageEntry>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[FileCoverageEntry] {
        &self.entries
    }

    /// Aggregates the report and compares it with an optional baseline.
    ///
    /// A report with no coverable lines is summarised as 0% rather than
    /// dividing by zero.
    #[must_use]
    pub fn summarize(&self, baseline: Option<f64>) -> Summary {
        let total_covered: u64 = self.entries.iter().map(|e| e.covered).sum();
        let total_coverable: u64 = self.entries.iter().map(|e| e.coverable).sum();

        let overall = if total_coverable == 0 {
            tracing::warn!("report has no coverable lines, reporting 0% coverage");
            0.0
        } else {
            utils::percent(total_covered, total_coverable)
        };

        let diff = baseline.map(|base| utils::round2(overall - base));

        // sort_by is stable: equal percentages keep file order
        let mut entries = self.entries.clone();
        entries.sort_by(|a, b| a.percent().total_cmp(&b.percent()));

        Summary {
            total_covered,
            total_coverable,
            overall,
            diff,
            entries,
        }
    }
}

/// Direction of the current coverage relative to the baseline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Increased,
    Decreased,
    Unchanged,
}

impl Trend {
    #[must_use]
    pub fn of(diff: f64) -> Self {
        if diff > 0.0 {
            Self::Increased
        } else if diff < 0.0 {
            Self::Decreased
        } else {
            Self::Unchanged
        }
    }

    /// Sign printed in front of the delta magnitude.
    #[must_use]
    pub fn sign(self) -> &'static str {
        match self {
            Self::Increased => "+",
            Self::Decreased => "-",
            Self::Unchanged => "",
        }
    }
}

/// Aggregated view of a report, ready for rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub total_covered: u64,
    pub total_coverable: u64,
    /// Overall coverage in percent, rounded to two decimals.
    pub overall: f64,
    /// `overall - baseline`, rounded; `None` without a baseline.
    pub diff: Option<f64>,
    /// Entries in ascending order of coverage.
    pub entries: Vec<FileCoverageEntry>,
}

impl Summary {
    #[must_use]
    pub fn trend(&self) -> Option<Trend> {
        self.diff.map(Trend::of)
    }

    /// Width of the longest display name, in characters.
    #[must_use]
    pub fn name_width(&self) -> usize {
        self.entries
            .iter()
            .map(|e| e.path.chars().count())
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(entries: &[(&str, u64, u64)]) -> Report {
        Report::new(
            entries
                .iter()
                .map(|(path, covered, coverable)| FileCoverageEntry::new(*path, *covered, *coverable))
                .collect(),
        )
    }

    #[test]
    fn test_entry_percent() {
        assert!((FileCoverageEntry::new("src/a.rs", 8, 10).percent() - 80.0).abs() < f64::EPSILON);
        assert!((FileCoverageEntry::new("src/a.rs", 2, 3).percent() - 66.67).abs() < f64::EPSILON);
        assert!((FileCoverageEntry::new("src/a.rs", 0, 0).percent() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_summarize_sums_lines_and_sorts() {
        let summary = report(&[("src/b.rs", 10, 10), ("src/a.rs", 8, 10)]).summarize(None);

        assert_eq!(summary.total_covered, 18);
        assert_eq!(summary.total_coverable, 20);
        assert!((summary.overall - 90.0).abs() < f64::EPSILON);
        assert_eq!(summary.diff, None);
        assert_eq!(summary.trend(), None);

        let names: Vec<_> = summary.entries.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(names, ["src/a.rs", "src/b.rs"]);
    }

    #[test]
    fn test_overall_weights_by_lines_not_files() {
        // 1/1 and 0/99: per-file mean would be 50%, line total is 1%
        let summary = report(&[("src/a.rs", 1, 1), ("src/b.rs", 0, 99)]).summarize(None);
        assert!((summary.overall - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let summary = report(&[
            ("src/c.rs", 5, 10),
            ("src/a.rs", 1, 2),
            ("src/low.rs", 0, 4),
            ("src/b.rs", 50, 100),
        ])
        .summarize(None);

        let names: Vec<_> = summary.entries.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(names, ["src/low.rs", "src/c.rs", "src/a.rs", "src/b.rs"]);

        let percents: Vec<_> = summary.entries.iter().map(FileCoverageEntry::percent).collect();
        assert!(percents.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_diff_against_baseline() {
        let summary = report(&[("src/a.rs", 8, 10), ("src/b.rs", 10, 10)]).summarize(Some(85.0));
        assert_eq!(summary.diff, Some(5.0));
        assert_eq!(summary.trend(), Some(Trend::Increased));

        let summary = report(&[("src/a.rs", 1, 3)]).summarize(Some(40.0));
        assert_eq!(summary.diff, Some(-6.67));
        assert_eq!(summary.trend(), Some(Trend::Decreased));

        let summary = report(&[("src/a.rs", 1, 2)]).summarize(Some(50.0));
        assert_eq!(summary.diff, Some(0.0));
        assert_eq!(summary.trend(), Some(Trend::Unchanged));
    }

    #[test]
    fn test_empty_report_is_zero_percent() {
        let summary = Report::default().summarize(Some(50.0));
        assert!((summary.overall - 0.0).abs() < f64::EPSILON);
        assert_eq!(summary.diff, Some(-50.0));
        assert_eq!(summary.name_width(), 0);
    }

    #[test]
    fn test_overall_stays_within_bounds() {
        let summary = report(&[("src/a.rs", 3, 7), ("src/b.rs", 7, 7), ("src/c.rs", 0, 13)])
            .summarize(None);
        assert!((0.0..=100.0).contains(&summary.overall));
    }

    #[test]
    fn test_trend_sign() {
        assert_eq!(Trend::of(0.01).sign(), "+");
        assert_eq!(Trend::of(-0.01).sign(), "-");
        assert_eq!(Trend::of(0.0).sign(), "");
        assert_eq!(Trend::of(-0.0).sign(), "");
    }

    #[test]
    fn test_name_width_counts_chars() {
        let summary = report(&[("src/ä.rs", 1, 1), ("src/lib.rs", 1, 1)]).summarize(None);
        assert_eq!(summary.name_width(), 10);
    }
}
