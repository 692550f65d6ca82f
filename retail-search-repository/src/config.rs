//! Configuration types for the retail search client.

use std::env;

use retail_search_shared::default_search_placement;
use tracing::warn;

use crate::errors::SearchError;

/// Default Retail API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://retail.googleapis.com/";

/// Visitor identifier used when none is configured.
pub const DEFAULT_VISITOR_ID: &str = "123456";

/// Default number of results per page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Configuration for the retail search client.
#[derive(Debug, Clone, PartialEq)]
pub struct RetailSearchConfig {
    /// Project number interpolated into the placement resource name.
    pub project_number: String,
    /// Base URL of the Retail API.
    pub endpoint: String,
    /// OAuth access token sent as a bearer credential.
    pub access_token: Option<String>,
    /// Identifier of the visitor issuing searches.
    pub visitor_id: String,
    /// Maximum number of results per page.
    pub page_size: u32,
}

impl Default for RetailSearchConfig {
    fn default() -> Self {
        Self {
            project_number: String::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            access_token: None,
            visitor_id: DEFAULT_VISITOR_ID.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl RetailSearchConfig {
    /// Create a config for the given project with default settings.
    pub fn for_project(project_number: impl Into<String>) -> Self {
        Self {
            project_number: project_number.into(),
            ..Self::default()
        }
    }

    /// Load configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `PROJECT_NUMBER`: project owning the catalog (default: empty)
    /// - `RETAIL_ENDPOINT`: Retail API base URL (default: https://retail.googleapis.com/)
    /// - `RETAIL_ACCESS_TOKEN`: OAuth access token (default: none)
    /// - `RETAIL_VISITOR_ID`: visitor identifier (default: 123456)
    /// - `RETAIL_PAGE_SIZE`: results per page (default: 10)
    ///
    /// Empty values count as unset.
    pub fn from_env() -> Result<Self, SearchError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SearchError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let project_number = lookup("PROJECT_NUMBER").unwrap_or_default();
        if project_number.is_empty() {
            warn!("PROJECT_NUMBER is not set, the placement will be rejected by the service");
        }

        let page_size = match lookup("RETAIL_PAGE_SIZE").filter(|raw| !raw.trim().is_empty()) {
            Some(raw) => raw.trim().parse::<u32>().map_err(|e| {
                SearchError::config(format!("Invalid RETAIL_PAGE_SIZE '{}': {}", raw, e))
            })?,
            None => DEFAULT_PAGE_SIZE,
        };

        Ok(Self {
            project_number,
            endpoint: lookup("RETAIL_ENDPOINT")
                .filter(|endpoint| !endpoint.is_empty())
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            access_token: lookup("RETAIL_ACCESS_TOKEN").filter(|token| !token.is_empty()),
            visitor_id: lookup("RETAIL_VISITOR_ID")
                .filter(|visitor_id| !visitor_id.is_empty())
                .unwrap_or_else(|| DEFAULT_VISITOR_ID.to_string()),
            page_size,
        })
    }

    /// Replace page size and visitor id where an override is given.
    pub fn with_overrides(mut self, page_size: Option<u32>, visitor_id: Option<String>) -> Self {
        if let Some(page_size) = page_size {
            self.page_size = page_size;
        }
        if let Some(visitor_id) = visitor_id {
            self.visitor_id = visitor_id;
        }
        self
    }

    /// Placement resource name of the default search placement.
    pub fn placement(&self) -> String {
        default_search_placement(&self.project_number)
    }
}
