//! Autocomplete source implementations.
//!
//! Each module knows one provider's endpoint, how to phrase a request for
//! a query, and how to decode the provider's response body.

pub mod bing;
pub mod google;

use crate::types::Source;

/// Build the GET request for `query` against `source`'s endpoint.
pub(crate) fn build_request(
    source: Source,
    client: &reqwest::Client,
    endpoint: &str,
    query: &str,
) -> reqwest::RequestBuilder {
    match source {
        Source::Google => google::build_request(client, endpoint, query),
        Source::Bing => bing::build_request(client, endpoint, query),
    }
}
