//! Human-readable renderings of requests and response pages.
//!
//! Both functions are pure: they return indented JSON text with camelCase
//! keys in declaration order and leave printing to the caller.

use serde::Serialize;

use crate::errors::SearchError;
use retail_search_shared::{Facet, QueryExpansionInfo, SearchRequest, SearchResponse, SearchResult};

/// The fields of a page that are shown after a search.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResponseSummary<'a> {
    results: &'a [SearchResult],
    total_size: i32,
    attribution_token: &'a str,
    next_page_token: &'a str,
    facets: &'a [Facet],
    #[serde(skip_serializing_if = "Option::is_none")]
    query_expansion_info: Option<&'a QueryExpansionInfo>,
}

impl<'a> From<&'a SearchResponse> for ResponseSummary<'a> {
    fn from(page: &'a SearchResponse) -> Self {
        Self {
            results: &page.results,
            total_size: page.total_size,
            attribution_token: &page.attribution_token,
            next_page_token: &page.next_page_token,
            facets: &page.facets,
            query_expansion_info: page.query_expansion_info.as_ref(),
        }
    }
}

/// Render a request. Fields holding default values are left out.
pub fn render_request(request: &SearchRequest) -> Result<String, SearchError> {
    Ok(serde_json::to_string_pretty(request)?)
}

/// Render the diagnostic fields of a response page.
///
/// `results`, `totalSize`, `attributionToken`, `nextPageToken` and `facets`
/// are always present; `queryExpansionInfo` only when the service sent it.
pub fn render_response(page: &SearchResponse) -> Result<String, SearchError> {
    Ok(serde_json::to_string_pretty(&ResponseSummary::from(page))?)
}
