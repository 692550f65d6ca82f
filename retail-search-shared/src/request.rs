//! Search request types.
//!
//! A `SearchRequest` is built once per call and never mutated afterwards.
//! Follow-up pages are addressed with [`SearchRequest::with_page_token`],
//! which returns a new value.

use serde::{Deserialize, Serialize};

use crate::float;

/// A single re-ranking condition.
///
/// Products matching `condition` are moved up (positive `boost`) or down
/// (negative `boost`) the result list. The service accepts strengths in
/// `[-1.0, 1.0]` and rejects anything else; no range check happens here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConditionBoostSpec {
    /// Filter expression in the service's grammar, e.g. `colorFamilies: ANY("Blue")`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub condition: String,
    /// Boost strength. Zero leaves ranking unchanged. Non-finite values are
    /// sent as strings for the service to reject.
    #[serde(with = "float", skip_serializing_if = "is_zero")]
    pub boost: f32,
}

impl ConditionBoostSpec {
    pub fn new(condition: impl Into<String>, boost: f32) -> Self {
        Self {
            condition: condition.into(),
            boost,
        }
    }
}

/// Ordered list of boost conditions applied to a search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoostSpec {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub condition_boost_specs: Vec<ConditionBoostSpec>,
}

/// Request sent to the search method of a placement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchRequest {
    /// Placement resource name, see [`crate::default_search_placement`].
    #[serde(skip_serializing_if = "String::is_empty")]
    pub placement: String,
    /// Free-text query.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub query: String,
    /// Identifier of the visitor issuing the search.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub visitor_id: String,
    /// Maximum number of results per page.
    #[serde(skip_serializing_if = "is_zero_u32")]
    pub page_size: u32,
    /// Continuation token returned as `nextPageToken` by the previous page.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub page_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boost_spec: Option<BoostSpec>,
}

impl SearchRequest {
    /// Copy of this request addressed at the page behind `page_token`.
    pub fn with_page_token(&self, page_token: impl Into<String>) -> Self {
        Self {
            page_token: page_token.into(),
            ..self.clone()
        }
    }

    /// Boost conditions in the order they were supplied.
    pub fn condition_boost_specs(&self) -> &[ConditionBoostSpec] {
        self.boost_spec
            .as_ref()
            .map(|spec| spec.condition_boost_specs.as_slice())
            .unwrap_or_default()
    }
}

fn is_zero(value: &f32) -> bool {
    *value == 0.0
}

fn is_zero_u32(value: &u32) -> bool {
    *value == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn boosted_request() -> SearchRequest {
        SearchRequest {
            placement: "projects/1/locations/global/catalogs/default_catalog/placements/default_search"
                .to_string(),
            query: "Tee".to_string(),
            visitor_id: "123456".to_string(),
            page_size: 10,
            page_token: String::new(),
            boost_spec: Some(BoostSpec {
                condition_boost_specs: vec![ConditionBoostSpec::new(
                    "colorFamilies: ANY(\"Blue\")",
                    0.5,
                )],
            }),
        }
    }

    #[test]
    fn test_serializes_camel_case() {
        let value = serde_json::to_value(boosted_request()).unwrap();

        assert_eq!(
            value,
            json!({
                "placement": "projects/1/locations/global/catalogs/default_catalog/placements/default_search",
                "query": "Tee",
                "visitorId": "123456",
                "pageSize": 10,
                "boostSpec": {
                    "conditionBoostSpecs": [
                        { "condition": "colorFamilies: ANY(\"Blue\")", "boost": 0.5 }
                    ]
                }
            })
        );
    }

    #[test]
    fn test_default_fields_are_omitted() {
        let mut request = boosted_request();
        request.boost_spec = Some(BoostSpec {
            condition_boost_specs: vec![ConditionBoostSpec::new("brands: ANY(\"x\")", 0.0)],
        });

        let value = serde_json::to_value(&request).unwrap();

        assert!(value.get("pageToken").is_none());
        assert!(value["boostSpec"]["conditionBoostSpecs"][0].get("boost").is_none());
        assert_eq!(serde_json::to_value(SearchRequest::default()).unwrap(), json!({}));
    }

    #[test]
    fn test_missing_keys_decode_to_defaults() {
        let request: SearchRequest = serde_json::from_value(json!({ "query": "Tee" })).unwrap();

        assert_eq!(request.query, "Tee");
        assert_eq!(request.page_size, 0);
        assert!(request.boost_spec.is_none());
        assert!(request.condition_boost_specs().is_empty());
    }

    #[test]
    fn test_with_page_token_leaves_original_untouched() {
        let first = boosted_request();
        let second = first.with_page_token("abc");

        assert!(first.page_token.is_empty());
        assert_eq!(second.page_token, "abc");
        assert_eq!(second.query, first.query);
        assert_eq!(second.boost_spec, first.boost_spec);
    }

    #[test]
    fn test_non_finite_boost_is_sent_and_parses_back() {
        let mut request = boosted_request();
        request.boost_spec = Some(BoostSpec {
            condition_boost_specs: vec![
                ConditionBoostSpec::new("a", f32::NAN),
                ConditionBoostSpec::new("b", f32::INFINITY),
            ],
        });

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["boostSpec"]["conditionBoostSpecs"][0]["boost"], json!("NaN"));
        assert_eq!(value["boostSpec"]["conditionBoostSpecs"][1]["boost"], json!("Infinity"));

        let parsed: SearchRequest = serde_json::from_value(value).unwrap();
        assert!(parsed.condition_boost_specs()[0].boost.is_nan());
        assert_eq!(parsed.condition_boost_specs()[1].boost, f32::INFINITY);
    }
}
