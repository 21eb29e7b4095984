//! Wayback Machine CDX index client (the URL Source).
//!
//! Queries the CDX API for every archived URL of a target and returns them
//! as a deduplicated, insertion-ordered list. Fetch failures are fatal to
//! the run and surface as dedicated error variants.

use log::debug;
use rustc_hash::FxHashSet;
use serde_json::Value;

use crate::config::Config;
use crate::constants::cdx;
use crate::error::{Result, WayscanError};

/// Validate and normalize the target domain from user input.
///
/// The CDX query wants a bare domain; schemes, paths, and whitespace in the
/// middle are rejected rather than silently rewritten.
pub fn validate_target(raw: &str) -> Result<String> {
    let target = raw.trim();
    if target.is_empty() {
        return Err(WayscanError::InvalidTarget("empty target".to_string()));
    }
    if target.contains("://") || target.contains('/') {
        return Err(WayscanError::InvalidTarget(format!(
            "{target} (supply a bare domain, e.g. example.com)"
        )));
    }
    if target.contains(char::is_whitespace) || !target.contains('.') {
        return Err(WayscanError::InvalidTarget(target.to_string()));
    }
    Ok(target.to_string())
}

/// Fetch archived URLs for `target` from the CDX index.
///
/// Returns the deduplicated URL list in first-seen order. An empty list is
/// a valid answer; the caller decides whether that ends the run.
pub async fn fetch_archived_urls(
    client: &reqwest::Client,
    target: &str,
    config: &Config,
) -> Result<Vec<String>> {
    let url_pattern = if config.include_subdomains.unwrap_or(false) {
        format!("*.{target}/*")
    } else {
        format!("{target}/*")
    };

    let mut params = vec![
        ("url", url_pattern.clone()),
        ("output", "json".to_string()),
        ("fl", cdx::FIELD_ORIGINAL.to_string()),
        ("collapse", "urlkey".to_string()),
    ];
    if let Some(limit) = config.limit {
        params.push(("limit", limit.to_string()));
    }

    debug!("CDX query: {}?url={url_pattern}", config.cdx_api());

    let response = client
        .get(config.cdx_api())
        .query(&params)
        .send()
        .await
        .map_err(|err| {
            if err.is_timeout() {
                WayscanError::CdxTimeout {
                    seconds: config.timeout.unwrap_or(crate::constants::defaults::TIMEOUT_SECONDS),
                }
            } else {
                WayscanError::CdxFetch(err.to_string())
            }
        })?;

    let response = response
        .error_for_status()
        .map_err(|err| WayscanError::CdxFetch(err.to_string()))?;

    let body = response
        .text()
        .await
        .map_err(|err| WayscanError::CdxFetch(err.to_string()))?;

    Ok(parse_cdx_body(&body))
}

/// Parse a CDX response body into an ordered, deduplicated URL list.
///
/// The API answers with a JSON array of single-field rows, usually prefixed
/// by a `["original"]` header row. Some deployments answer with one URL per
/// line of plain text instead; that form is accepted as a fallback.
fn parse_cdx_body(body: &str) -> Vec<String> {
    let urls: Vec<String> = match serde_json::from_str::<Value>(body) {
        Ok(Value::Array(rows)) => match rows.first() {
            Some(Value::Array(first_row)) => {
                // Only the leading row is a header; later rows are data even
                // if a field happens to equal the header token
                let has_header =
                    matches!(first_row.first(), Some(Value::String(s)) if s == cdx::FIELD_ORIGINAL);
                rows.iter()
                    .skip(usize::from(has_header))
                    .filter_map(|row| row.get(0).and_then(Value::as_str))
                    .map(str::to_string)
                    .collect()
            }
            _ => rows
                .iter()
                .filter_map(Value::as_str)
                .filter(|field| *field != cdx::FIELD_ORIGINAL)
                .map(str::to_string)
                .collect(),
        },
        _ => body
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
    };

    dedup_preserve_order(urls)
}

/// Deduplicate keeping the first occurrence of each URL in place.
pub fn dedup_preserve_order(urls: Vec<String>) -> Vec<String> {
    let mut seen = FxHashSet::with_capacity_and_hasher(urls.len(), Default::default());
    let mut unique = Vec::with_capacity(urls.len());

    for url in urls {
        if !url.is_empty() && seen.insert(url.clone()) {
            unique.push(url);
        }
    }

    unique
}
