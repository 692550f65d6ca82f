//! Dependency initialization and wiring for the search sample.

use std::sync::Arc;
use tracing::info;

use crate::AppError;
use retail_search_repository::{
    RetailHttpClient, RetailSearchConfig, SearchInvoker, SearchServiceClient,
};

/// Query searched for when none is given.
pub const DEFAULT_QUERY: &str = "Tee";

/// Boost condition applied when none is given.
pub const DEFAULT_CONDITION: &str = "colorFamilies: ANY(\"Blue\")";

/// What to search for and how to boost it.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchArgs {
    pub query: String,
    pub condition: String,
    /// Strength in `[-1.0, 1.0]`. Zero keeps the condition but leaves ranking unchanged.
    pub boost: f32,
}

impl Default for SearchArgs {
    fn default() -> Self {
        Self {
            query: DEFAULT_QUERY.to_string(),
            condition: DEFAULT_CONDITION.to_string(),
            boost: 0.0,
        }
    }
}

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// Settings the request is built from.
    pub config: RetailSearchConfig,
    /// Invoker bound to the remote client.
    pub invoker: SearchInvoker,
}

impl Dependencies {
    /// Initialize dependencies around the Retail HTTP client.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(AppError)` - If the client cannot be created
    pub fn new(config: RetailSearchConfig) -> Result<Self, AppError> {
        info!(
            placement = %config.placement(),
            endpoint = %config.endpoint,
            visitor_id = %config.visitor_id,
            page_size = config.page_size,
            "Initializing dependencies"
        );

        let client = RetailHttpClient::new(&config)
            .map_err(|e| AppError::config(format!("Failed to create Retail client: {}", e)))?;

        Ok(Self::with_client(config, Arc::new(client)))
    }

    /// Wire dependencies around an existing client handle.
    pub fn with_client(config: RetailSearchConfig, client: Arc<dyn SearchServiceClient>) -> Self {
        Self {
            config,
            invoker: SearchInvoker::new(client),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_search_args() {
        let args = SearchArgs::default();

        assert_eq!(args.query, "Tee");
        assert_eq!(args.condition, "colorFamilies: ANY(\"Blue\")");
        assert_eq!(args.boost, 0.0);
    }

    #[test]
    fn test_new_rejects_invalid_endpoint() {
        let config = RetailSearchConfig {
            endpoint: "::not-a-url".to_string(),
            ..RetailSearchConfig::for_project("42")
        };

        assert!(matches!(
            Dependencies::new(config),
            Err(AppError::ConfigError(_))
        ));
    }

    #[test]
    fn test_new_with_valid_config() {
        let dependencies = Dependencies::new(RetailSearchConfig::for_project("42")).unwrap();

        assert_eq!(dependencies.config.project_number, "42");
    }
}
