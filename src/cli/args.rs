//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

use crate::constants;

/// Summarises a cargo-tarpaulin report against a branch's Coveralls coverage
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Comparison branch name
    #[arg(short = 'm', value_name = "BRANCH")]
    pub main: String,

    /// Repository slug on Coveralls, e.g. "github/JerboaBurrow/Busser"
    #[arg(short = 'r', value_name = "REPO")]
    pub repo: String,

    /// Add a humanised message about the result
    #[arg(long)]
    pub human: bool,
}

/// Immutable run configuration, built once from [`Args`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Branch the coverage is compared against.
    pub branch: String,
    /// Coveralls repository slug, used verbatim in the URL path.
    pub repo: String,
    /// Whether to print the humanised header.
    pub human: bool,
    /// Location of the tarpaulin JSON report.
    pub report_path: PathBuf,
    /// Coveralls base URL.
    pub base_url: String,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            branch: args.main,
            repo: args.repo,
            human: args.human,
            report_path: PathBuf::from(constants::REPORT_FILE_NAME),
            base_url: constants::COVERALLS_BASE_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_parse_all_flags() {
        let args = Args::try_parse_from(["coverage-summary", "-m", "main", "-r", "github/o/r", "--human"])
            .unwrap();
        assert_eq!(args.main, "main");
        assert_eq!(args.repo, "github/o/r");
        assert!(args.human);
    }

    #[test]
    fn test_human_defaults_off() {
        let args = Args::try_parse_from(["coverage-summary", "-r", "github/o/r", "-m", "dev"]).unwrap();
        assert!(!args.human);
    }

    #[test]
    fn test_missing_required_flags() {
        let err = Args::try_parse_from(["coverage-summary", "-m", "main"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let err = Args::try_parse_from(["coverage-summary", "-r", "github/o/r"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_short_h_is_help_not_human() {
        let err = Args::try_parse_from(["coverage-summary", "-m", "main", "-r", "x", "-h"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_config_from_args() {
        let args = Args::try_parse_from(["coverage-summary", "-m", "main", "-r", "github/o/r"]).unwrap();
        let config = Config::from(args);
        assert_eq!(config.branch, "main");
        assert_eq!(config.report_path, PathBuf::from("tarpaulin-report.json"));
        assert_eq!(config.base_url, "https://coveralls.io");
    }
}
