//! Interface definitions for the search service client.
//!
//! This module defines the abstract `SearchServiceClient` trait that allows
//! for dependency injection and swappable remote implementations.

mod search_service_client;

pub use search_service_client::{paginate, SearchPages, SearchServiceClient};
