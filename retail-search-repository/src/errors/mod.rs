//! Error types for the retail search repository.

mod search_error;

pub use search_error::SearchError;
