//! Search invocation.
//!
//! `SearchInvoker` sends a built request through the configured client,
//! logs the first page when there is one, and hands back every page as a
//! lazy stream. Errors are passed through untouched.

use std::sync::Arc;

use futures::stream::{self, StreamExt};
use tracing::{debug, info, instrument, warn};

use crate::diagnostics::render_response;
use crate::errors::SearchError;
use crate::interfaces::{SearchPages, SearchServiceClient};
use retail_search_shared::SearchRequest;

/// Issues searches against a shared client handle.
pub struct SearchInvoker {
    client: Arc<dyn SearchServiceClient>,
}

impl SearchInvoker {
    /// Create a new invoker around a client.
    pub fn new(client: Arc<dyn SearchServiceClient>) -> Self {
        Self { client }
    }

    /// Send `request` and return its pages.
    ///
    /// The first page is fetched before returning so it can be logged; it is
    /// yielded again as the first stream item. Later pages are fetched only
    /// when the stream is polled.
    ///
    /// # Returns
    ///
    /// * `Ok(SearchPages)` - All pages, first page first; empty if the service produced none
    /// * `Err(SearchError)` - If fetching the first page fails
    #[instrument(skip(self, request), fields(placement = %request.placement, query = %request.query))]
    pub async fn search(&self, request: SearchRequest) -> Result<SearchPages<'_>, SearchError> {
        let mut pages = self.client.search(request);

        let first = match pages.next().await {
            Some(first) => first?,
            None => {
                debug!("Search produced no pages");
                return Ok(stream::empty().boxed());
            }
        };

        match render_response(&first) {
            Ok(rendered) => info!("Search response:\n\n{}\n", rendered),
            Err(e) => warn!(error = %e, "Failed to render search response"),
        }

        Ok(stream::once(async move { Ok(first) }).chain(pages).boxed())
    }
}
