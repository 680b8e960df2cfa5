//! Bing autocomplete — `api.bing.com/qsonhs.aspx`.
//!
//! Bing answers with a JSON document rather than an array:
//!
//! ```json
//! {"AS":{"Query":"cursor","FullResults":1,
//!        "Results":[{"Type":"AS","Suggests":[{"Txt":"cursor ai","Type":"AS","Sk":""}]}]}}
//! ```
//!
//! `Results` is absent when Bing has nothing to suggest.

use serde::Deserialize;

use crate::error::SuggestError;

/// Public Bing suggestion endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.bing.com/qsonhs.aspx";

#[derive(Debug, Deserialize)]
struct BingResponse {
    #[serde(rename = "AS")]
    autosuggest: AutoSuggest,
}

#[derive(Debug, Deserialize)]
struct AutoSuggest {
    #[serde(rename = "Results", default)]
    results: Vec<ResultGroup>,
}

#[derive(Debug, Deserialize)]
struct ResultGroup {
    #[serde(rename = "Suggests", default)]
    suggests: Vec<Suggest>,
}

#[derive(Debug, Deserialize)]
struct Suggest {
    #[serde(rename = "Txt")]
    text: String,
}

pub(crate) fn build_request(
    client: &reqwest::Client,
    endpoint: &str,
    query: &str,
) -> reqwest::RequestBuilder {
    client
        .get(endpoint)
        .query(&[("type", "cb"), ("mkt", "en-US"), ("q", query)])
        .header("Accept", "application/json")
}

/// Parse a Bing suggestion response body.
///
/// Extracted as a separate function for testability with canned bodies.
pub fn parse_response(body: &str) -> Result<Vec<String>, SuggestError> {
    let response: BingResponse = serde_json::from_str(body)
        .map_err(|e| SuggestError::Parse(format!("unexpected Bing response: {e}")))?;

    let results: Vec<String> = response
        .autosuggest
        .results
        .into_iter()
        .flat_map(|group| group.suggests)
        .map(|s| s.text)
        .collect();

    tracing::debug!(count = results.len(), "Bing suggestions parsed");
    Ok(results)
}
