//! Retail HTTP client implementation.
//!
//! Sends `SearchRequest` values as JSON to `v2/{placement}:search` and decodes
//! each answer as one `SearchResponse` page. No retries, no timeouts beyond
//! what reqwest applies by default.

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{error, info, instrument};
use url::Url;

use crate::config::RetailSearchConfig;
use crate::errors::SearchError;
use crate::interfaces::SearchServiceClient;
use retail_search_shared::{SearchRequest, SearchResponse};

/// Retail API client.
///
/// # Example
///
/// ```ignore
/// let config = RetailSearchConfig::from_env()?;
/// let client = RetailHttpClient::new(&config)?;
///
/// let mut pages = client.search(request);
/// let first = pages.next().await.transpose()?;
/// ```
pub struct RetailHttpClient {
    http: reqwest::Client,
    endpoint: Url,
    access_token: Option<String>,
}

impl RetailHttpClient {
    /// Create a new client for the configured endpoint.
    ///
    /// # Arguments
    ///
    /// * `config` - Endpoint and credentials to use
    ///
    /// # Returns
    ///
    /// * `Ok(RetailHttpClient)` - A new client instance
    /// * `Err(SearchError)` - If the endpoint is not a valid URL or the HTTP client cannot be built
    pub fn new(config: &RetailSearchConfig) -> Result<Self, SearchError> {
        let endpoint = parse_endpoint(&config.endpoint)?;

        let http = reqwest::Client::builder()
            .no_proxy()
            .build()
            .map_err(|e| SearchError::connection(e.to_string()))?;

        info!(
            endpoint = %endpoint,
            authenticated = config.access_token.is_some(),
            "Created Retail search client"
        );

        Ok(Self {
            http,
            endpoint,
            access_token: config.access_token.clone(),
        })
    }

    /// URL of the search method for a placement.
    fn search_url(&self, placement: &str) -> Result<Url, SearchError> {
        self.endpoint
            .join(&format!("v2/{}:search", placement))
            .map_err(|e| SearchError::config(format!("Invalid placement '{}': {}", placement, e)))
    }
}

/// Parse the endpoint, making sure it ends with a slash so relative joins
/// keep its path.
fn parse_endpoint(raw: &str) -> Result<Url, SearchError> {
    let mut endpoint =
        Url::parse(raw).map_err(|e| SearchError::config(format!("Invalid endpoint '{}': {}", raw, e)))?;

    if !endpoint.path().ends_with('/') {
        let path = format!("{}/", endpoint.path());
        endpoint.set_path(&path);
    }

    Ok(endpoint)
}

/// Map a non-success status to an error.
fn status_error(status: StatusCode, body: String) -> SearchError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            SearchError::authentication(format!("status {}: {}", status.as_u16(), body))
        }
        _ => SearchError::rejected(status.as_u16(), body),
    }
}

#[async_trait]
impl SearchServiceClient for RetailHttpClient {
    #[instrument(skip(self, request), fields(placement = %request.placement, page_token = %request.page_token))]
    async fn search_page(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
        let url = self.search_url(&request.placement)?;

        let mut call = self.http.post(url).json(request);
        if let Some(ref token) = self.access_token {
            call = call.bearer_auth(token);
        }

        let response = call
            .send()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Search request failed");
            return Err(status_error(status, error_body));
        }

        response
            .json::<SearchResponse>()
            .await
            .map_err(|e| SearchError::parse(e.to_string()))
    }
}
