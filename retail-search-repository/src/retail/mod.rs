//! Retail API implementation of the search service client.
//!
//! This module provides a concrete implementation of `SearchServiceClient`
//! that calls the Retail v2 REST endpoint over HTTPS.

mod client;

pub use client::RetailHttpClient;
