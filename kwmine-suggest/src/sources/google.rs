//! Google autocomplete — `suggestqueries.google.com`.
//!
//! With `client=firefox` the endpoint answers with an OpenSearch-style JSON
//! array: `["query", ["suggestion", ...], ...]`. Only the second element is
//! used; trailing metadata elements are ignored.

use serde_json::Value;

use crate::error::SuggestError;

/// Public Google suggestion endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://suggestqueries.google.com/complete/search";

pub(crate) fn build_request(
    client: &reqwest::Client,
    endpoint: &str,
    query: &str,
) -> reqwest::RequestBuilder {
    client
        .get(endpoint)
        .query(&[
            ("client", "firefox"),
            ("hl", "en"),
            ("ie", "utf-8"),
            ("oe", "utf-8"),
            ("q", query),
        ])
        .header("Accept", "application/json, text/javascript")
}

/// Parse a Google suggestion response body.
///
/// Extracted as a separate function for testability with canned bodies.
pub fn parse_response(body: &str) -> Result<Vec<String>, SuggestError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| SuggestError::Parse(format!("Google response is not JSON: {e}")))?;

    let items = value
        .as_array()
        .ok_or_else(|| SuggestError::Parse("Google response is not a JSON array".into()))?;

    let suggestions = items
        .get(1)
        .and_then(Value::as_array)
        .ok_or_else(|| SuggestError::Parse("Google response has no suggestion list".into()))?;

    let results: Vec<String> = suggestions
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_owned)
        .collect();

    tracing::debug!(count = results.len(), "Google suggestions parsed");
    Ok(results)
}
