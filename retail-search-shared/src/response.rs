//! Search response types.
//!
//! One `SearchResponse` is one page. Pages keep coming while the service
//! returns a non-empty `next_page_token`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::int64;

/// A single page of search results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchResponse {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub results: Vec<SearchResult>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub facets: Vec<Facet>,
    /// Estimated number of matches across all pages.
    #[serde(skip_serializing_if = "is_zero_i32")]
    pub total_size: i32,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub corrected_query: String,
    /// Opaque token to attach to user events caused by this search.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub attribution_token: String,
    /// Empty on the last page.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub next_page_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_expansion_info: Option<QueryExpansionInfo>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub redirect_uri: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub applied_controls: Vec<String>,
}

impl SearchResponse {
    pub fn has_next_page(&self) -> bool {
        !self.next_page_token.is_empty()
    }
}

/// A matched product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchResult {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
    #[serde(skip_serializing_if = "is_zero_i32")]
    pub matching_variant_count: i32,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub matching_variant_fields: Map<String, Value>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub variant_rollup_values: Map<String, Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub personal_labels: Vec<String>,
}

/// The subset of product fields the client reads directly.
///
/// Every other key the service returns is kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub brands: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_info: Option<ColorInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_info: Option<PriceInfo>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorInfo {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub color_families: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PriceInfo {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub currency_code: String,
    #[serde(skip_serializing_if = "is_zero_f32")]
    pub price: f32,
    #[serde(skip_serializing_if = "is_zero_f32")]
    pub original_price: f32,
}

/// Aggregated values of one attribute across the result set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Facet {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub key: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<FacetValue>,
    #[serde(skip_serializing_if = "is_false")]
    pub dynamic_facet: bool,
}

/// One bucket of a facet. Textual facets fill `value`, numerical ones `interval`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FacetValue {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<Interval>,
    #[serde(with = "int64", skip_serializing_if = "int64::is_zero")]
    pub count: i64,
    #[serde(skip_serializing_if = "is_zero_f64")]
    pub min_value: f64,
    #[serde(skip_serializing_if = "is_zero_f64")]
    pub max_value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Interval {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_minimum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_maximum: Option<f64>,
}

/// Whether the service broadened the query to find more matches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryExpansionInfo {
    #[serde(skip_serializing_if = "is_false")]
    pub expanded_query: bool,
    #[serde(with = "int64", skip_serializing_if = "int64::is_zero")]
    pub pinned_result_count: i64,
}

fn is_zero_i32(value: &i32) -> bool {
    *value == 0
}

fn is_zero_f32(value: &f32) -> bool {
    *value == 0.0
}

fn is_zero_f64(value: &f64) -> bool {
    *value == 0.0
}

fn is_false(value: &bool) -> bool {
    !*value
}
