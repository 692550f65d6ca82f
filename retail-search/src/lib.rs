//! # Retail Search
//!
//! Boosted product search sample. Builds a search request with a boost
//! condition, logs it, sends it to the Retail search service and logs the
//! first page of the answer.

pub mod config;

pub use config::{Dependencies, SearchArgs};

use futures::StreamExt;
use thiserror::Error;
use tracing::info;

use retail_search_repository::{BoostedSearchRequestBuilder, SearchPages};

/// Errors that can occur while running the sample.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Search error.
    #[error("Search error: {0}")]
    SearchError(#[from] retail_search_repository::SearchError),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}

/// Build the boosted request described by `args` and run it.
///
/// Returns the lazy page stream. Only the first page has been fetched when
/// this returns.
pub async fn run_search<'a>(
    dependencies: &'a Dependencies,
    args: &SearchArgs,
) -> Result<SearchPages<'a>, AppError> {
    let request = BoostedSearchRequestBuilder::from_config(&dependencies.config)
        .query(args.query.clone())
        .boost(args.condition.clone(), args.boost)
        .build();

    Ok(dependencies.invoker.search(request).await?)
}

/// Run the search and report the first page.
pub async fn run(dependencies: &Dependencies, args: &SearchArgs) -> Result<(), AppError> {
    let mut pages = run_search(dependencies, args).await?;

    match pages.next().await.transpose()? {
        Some(page) => info!(
            results = page.results.len(),
            total_size = page.total_size,
            has_next_page = page.has_next_page(),
            "Search completed"
        ),
        None => info!("Search completed without results"),
    }

    Ok(())
}
