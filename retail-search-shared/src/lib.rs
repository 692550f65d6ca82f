//! # Retail Search Shared
//!
//! Value objects exchanged with the Retail search service, encoded with the
//! service's JSON mapping (camelCase keys, default values omitted).

pub mod placement;
pub mod request;
pub mod response;

mod float;
mod int64;

pub use placement::default_search_placement;
pub use request::{BoostSpec, ConditionBoostSpec, SearchRequest};
pub use response::{
    Facet, FacetValue, Interval, Product, QueryExpansionInfo, SearchResponse, SearchResult,
};
