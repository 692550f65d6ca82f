//! Configuration and dependency wiring for the sample.

mod dependencies;

pub use dependencies::{Dependencies, SearchArgs, DEFAULT_CONDITION, DEFAULT_QUERY};
