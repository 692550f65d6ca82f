//! Boosted search request construction.

use tracing::{info, warn};

use crate::config::RetailSearchConfig;
use crate::diagnostics::render_request;
use retail_search_shared::{BoostSpec, ConditionBoostSpec, SearchRequest};

/// Builds a `SearchRequest` carrying one or more boost conditions.
///
/// Nothing is validated: an empty query, a malformed placement or a boost
/// outside `[-1.0, 1.0]` is passed through and rejected by the service.
/// [`build`](Self::build) logs the rendered request before returning it.
#[derive(Debug, Clone)]
pub struct BoostedSearchRequestBuilder {
    placement: String,
    query: String,
    visitor_id: String,
    page_size: u32,
    condition_boost_specs: Vec<ConditionBoostSpec>,
}

impl BoostedSearchRequestBuilder {
    /// Start a request for the given placement.
    pub fn new(placement: impl Into<String>) -> Self {
        Self {
            placement: placement.into(),
            query: String::new(),
            visitor_id: String::new(),
            page_size: 0,
            condition_boost_specs: Vec::new(),
        }
    }

    /// Start a request with placement, visitor and page size taken from `config`.
    pub fn from_config(config: &RetailSearchConfig) -> Self {
        Self::new(config.placement())
            .visitor_id(config.visitor_id.clone())
            .page_size(config.page_size)
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn visitor_id(mut self, visitor_id: impl Into<String>) -> Self {
        self.visitor_id = visitor_id.into();
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Append a boost condition. Conditions keep the order they are added in.
    pub fn boost(mut self, condition: impl Into<String>, strength: f32) -> Self {
        self.condition_boost_specs
            .push(ConditionBoostSpec::new(condition, strength));
        self
    }

    /// Finish the request and log its rendering.
    pub fn build(self) -> SearchRequest {
        let boost_spec = (!self.condition_boost_specs.is_empty()).then(|| BoostSpec {
            condition_boost_specs: self.condition_boost_specs,
        });

        let request = SearchRequest {
            placement: self.placement,
            query: self.query,
            visitor_id: self.visitor_id,
            page_size: self.page_size,
            page_token: String::new(),
            boost_spec,
        };

        match render_request(&request) {
            Ok(rendered) => info!("Search request:\n\n{}", rendered),
            Err(e) => warn!(error = %e, "Failed to render search request"),
        }

        request
    }
}

/// Build a request with a single boost condition.
///
/// # Arguments
///
/// * `query` - Free-text query
/// * `condition` - Filter expression that selects the products to boost
/// * `boost_strength` - Strength in `[-1.0, 1.0]`; zero leaves ranking unchanged
/// * `placement` - Placement resource name
/// * `visitor_id` - Identifier of the visitor issuing the search
/// * `page_size` - Maximum number of results per page
pub fn boosted_search_request(
    query: &str,
    condition: &str,
    boost_strength: f32,
    placement: &str,
    visitor_id: &str,
    page_size: u32,
) -> SearchRequest {
    BoostedSearchRequestBuilder::new(placement)
        .query(query)
        .boost(condition, boost_strength)
        .visitor_id(visitor_id)
        .page_size(page_size)
        .build()
}
