//! Search service client trait definition.
//!
//! This module defines the abstract interface for calling the search method
//! of a placement, allowing for different transports (HTTP, stubs in tests).

use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt};
use tracing::{debug, warn};

use crate::errors::SearchError;
use retail_search_shared::{SearchRequest, SearchResponse};

/// Lazy, forward-only sequence of response pages.
///
/// Each page is fetched only when the stream is polled for it. The first
/// error ends the sequence.
pub type SearchPages<'a> = BoxStream<'a, Result<SearchResponse, SearchError>>;

/// Abstract interface for the remote search service.
///
/// Implementations can be swapped for different backends (HTTP, mock, etc.)
/// enabling testing without network access.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` so a single client handle can
/// be shared across calls.
#[async_trait]
pub trait SearchServiceClient: Send + Sync {
    /// Fetch the single page addressed by `request`.
    ///
    /// # Arguments
    ///
    /// * `request` - The search request, including `page_token` for follow-up pages
    ///
    /// # Returns
    ///
    /// * `Ok(SearchResponse)` - One page of results
    /// * `Err(SearchError)` - If the call fails in transport or is rejected
    async fn search_page(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError>;

    /// Issue a search and return its pages lazily.
    ///
    /// The default implementation follows `next_page_token` through
    /// [`paginate`].
    ///
    /// # Example
    ///
    /// ```ignore
    /// let mut pages = client.search(request);
    /// while let Some(page) = pages.next().await {
    ///     println!("{} results", page?.results.len());
    /// }
    /// ```
    fn search<'a>(&'a self, request: SearchRequest) -> SearchPages<'a> {
        paginate(self, request)
    }
}

/// Turn a single-page call into a lazy page sequence.
///
/// Page N+1 is requested only after page N has been consumed and only if
/// page N carried a non-empty `next_page_token` different from the token
/// that addressed page N.
pub fn paginate<'a, C>(client: &'a C, request: SearchRequest) -> SearchPages<'a>
where
    C: SearchServiceClient + ?Sized,
{
    stream::try_unfold(Some(request), move |next| async move {
        let Some(request) = next else {
            return Ok(None);
        };

        let page = client.search_page(&request).await?;
        debug!(
            page_token = %request.page_token,
            results = page.results.len(),
            has_next_page = page.has_next_page(),
            "Fetched search page"
        );

        // A repeated token would address the same page forever.
        let repeated = page.has_next_page() && page.next_page_token == request.page_token;
        if repeated {
            warn!(page_token = %request.page_token, "Service repeated the page token, stopping");
        }
        let next = (page.has_next_page() && !repeated)
            .then(|| request.with_page_token(page.next_page_token.clone()));
        Ok::<_, SearchError>(Some((page, next)))
    })
    .boxed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Serves pages keyed by the page token that addresses them.
    struct PagedStub {
        pages: Vec<(&'static str, SearchResponse)>,
        calls: AtomicUsize,
        seen_tokens: Mutex<Vec<String>>,
    }

    impl PagedStub {
        fn new(pages: Vec<(&'static str, SearchResponse)>) -> Self {
            Self {
                pages,
                calls: AtomicUsize::new(0),
                seen_tokens: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl SearchServiceClient for PagedStub {
        async fn search_page(
            &self,
            request: &SearchRequest,
        ) -> Result<SearchResponse, SearchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen_tokens
                .lock()
                .unwrap()
                .push(request.page_token.clone());

            self.pages
                .iter()
                .find(|(token, _)| *token == request.page_token)
                .map(|(_, page)| page.clone())
                .ok_or_else(|| SearchError::rejected(400, "unknown page token"))
        }
    }

    fn page(total_size: i32, next_page_token: &str) -> SearchResponse {
        SearchResponse {
            total_size,
            next_page_token: next_page_token.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_single_page() {
        let client = PagedStub::new(vec![("", page(3, ""))]);

        let pages: Vec<_> = client.search(SearchRequest::default()).collect().await;

        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].as_ref().unwrap().total_size, 3);
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_follows_next_page_token() {
        let client = PagedStub::new(vec![
            ("", page(5, "p2")),
            ("p2", page(5, "p3")),
            ("p3", page(5, "")),
        ]);

        let pages: Vec<_> = client.search(SearchRequest::default()).collect().await;

        assert_eq!(pages.len(), 3);
        assert!(pages.iter().all(|p| p.is_ok()));
        assert_eq!(
            *client.seen_tokens.lock().unwrap(),
            vec!["".to_string(), "p2".to_string(), "p3".to_string()]
        );
    }

    #[tokio::test]
    async fn test_pages_are_fetched_on_demand() {
        let client = PagedStub::new(vec![("", page(5, "p2")), ("p2", page(5, ""))]);

        let mut pages = client.search(SearchRequest::default());
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);

        pages.next().await.unwrap().unwrap();
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);

        pages.next().await.unwrap().unwrap();
        assert_eq!(client.calls.load(Ordering::SeqCst), 2);

        assert!(pages.next().await.is_none());
        assert_eq!(client.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_error_ends_the_sequence() {
        let client = PagedStub::new(vec![("", page(5, "missing"))]);

        let pages: Vec<_> = client.search(SearchRequest::default()).collect().await;

        assert_eq!(pages.len(), 2);
        assert!(pages[0].is_ok());
        assert!(matches!(
            pages[1],
            Err(SearchError::Rejected { status: 400, .. })
        ));
    }

    #[tokio::test]
    async fn test_repeated_page_token_ends_the_sequence() {
        let client = PagedStub::new(vec![("", page(5, "p2")), ("p2", page(5, "p2"))]);

        let pages: Vec<_> = client.search(SearchRequest::default()).collect().await;

        assert_eq!(pages.len(), 2);
        assert!(pages.iter().all(|p| p.is_ok()));
        assert_eq!(client.calls.load(Ordering::SeqCst), 2);
    }
}
