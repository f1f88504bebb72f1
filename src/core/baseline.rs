//! Baseline coverage lookup on Coveralls.
//!
//! Any failure here means "no baseline": the summary is still printed, just
//! without a delta.

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, ACCEPT_CHARSET, CONTENT_TYPE};
use serde_json::Value;
use url::Url;

use crate::constants;
use crate::utils;

/// Fetches the overall coverage of `branch` for `repo` from `base_url`.
///
/// Returns `None` on network errors, non-success statuses, non-JSON bodies
/// or a missing `covered_percent` field. The failure reason is logged.
pub fn fetch_baseline(base_url: &str, repo: &str, branch: &str) -> Option<f64> {
    match try_fetch(base_url, repo, branch) {
        Ok(percent) => {
            tracing::info!(repo, branch, percent, "fetched baseline coverage");
            Some(percent)
        }
        Err(reason) => {
            tracing::warn!(repo, branch, "no baseline coverage: {reason}");
            None
        }
    }
}

/// Builds `{base_url}/{repo}.json?branch={branch}`.
///
/// Each `/`-separated part of the slug becomes one percent-encoded path
/// segment, so `?` or `#` in a slug cannot leak into the query or fragment.
/// Empty, `.` and `..` parts are rejected.
pub fn baseline_url(base_url: &str, repo: &str, branch: &str) -> Result<Url, String> {
    let parts: Vec<&str> = repo.split('/').collect();
    if parts.iter().any(|p| p.is_empty() || *p == "." || *p == "..") {
        return Err(format!("{}: {repo}", constants::ERR_INVALID_REPO));
    }
    let Some((last, parents)) = parts.split_last() else {
        return Err(format!("{}: {repo}", constants::ERR_INVALID_REPO));
    };

    let mut url =
        Url::parse(base_url).map_err(|e| format!("{}: {e}", constants::ERR_INVALID_URL))?;
    url.path_segments_mut()
        .map_err(|()| format!("{}: {base_url}", constants::ERR_INVALID_URL))?
        .pop_if_empty()
        .extend(parents)
        .push(&format!("{last}.json"));
    url.query_pairs_mut().append_pair("branch", branch);

    Ok(url)
}

fn try_fetch(base_url: &str, repo: &str, branch: &str) -> Result<f64, String> {
    let url = baseline_url(base_url, repo, branch)?;

    let client = Client::builder()
        .timeout(constants::HTTP_TIMEOUT)
        .connect_timeout(constants::HTTP_TIMEOUT)
        .user_agent(format!("{}/{}", constants::APP_NAME, constants::APP_VERSION))
        .build()
        .map_err(|e| format!("{}: {e}", constants::ERR_HTTP_CLIENT_BUILD_FAILED))?;

    tracing::debug!(%url, "requesting baseline");
    let response = client
        .get(url)
        .header(ACCEPT, "application/json")
        .header(CONTENT_TYPE, "application/json")
        .header(ACCEPT_CHARSET, "UTF-8")
        .send()
        .map_err(|e| format!("{}: {e}", constants::ERR_NETWORK_REQUEST_FAILED))?;

    if !response.status().is_success() {
        return Err(format!(
            "{}{}",
            constants::ERR_SERVER_ERROR,
            response.status()
        ));
    }

    let body = response
        .text()
        .map_err(|e| format!("{}: {e}", constants::ERR_READ_CONTENT_FAILED))?;

    parse_baseline(&body)
}

/// Extracts `covered_percent` from a Coveralls build response, rounded to two decimals.
pub fn parse_baseline(body: &str) -> Result<f64, String> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| format!("{}: {e}", constants::ERR_NOT_JSON))?;

    value
        .get(constants::COVERALLS_PERCENT_FIELD)
        .and_then(Value::as_f64)
        .map(utils::round2)
        .ok_or_else(|| constants::ERR_MISSING_PERCENT.to_string())
}
