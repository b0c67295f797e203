//! Paginated stream for lazy iteration over list endpoints.
//!
//! Belvo list endpoints answer with a page envelope
//! (`count`/`next`/`previous`/`results`). [`PaginatedStream`] yields the
//! results of each page in server order and fetches the next page only
//! once the current one is exhausted.
//!
//! The next page is requested against the original endpoint path with the
//! query parameters carried by the `next` link; the path and host of the
//! link are ignored. Requesting the `next` URL verbatim is not supported.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_util::Stream;
use serde::de::DeserializeOwned;
use url::Url;

use super::ClientInner;
use crate::Result;

/// Query parameters sent with a list request, in order.
///
/// Repeated keys are kept as separate pairs.
pub type QueryParams = Vec<(String, String)>;

/// Response envelope of paginated endpoints.
#[derive(Debug, serde::Deserialize)]
pub struct Page<T> {
    /// Total number of results across all pages.
    pub count: u64,
    /// Link to the next page, `None` on the last page.
    pub next: Option<String>,
    /// Link to the previous page. Not used for traversal.
    pub previous: Option<String>,
    /// The results in this page.
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Check if there is a page after this one.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Query parameters for the next page, if any.
    ///
    /// `next` may be absolute or relative; `base` resolves relative links.
    pub fn next_params(&self, base: &Url) -> Result<Option<QueryParams>> {
        let Some(next) = self.next.as_deref() else {
            return Ok(None);
        };
        let next = base.join(next)?;
        Ok(Some(next.query_pairs().into_owned().collect()))
    }
}

/// Type alias for a boxed future used internally.
type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

type FetchPage<T> =
    Box<dyn Fn(QueryParams) -> BoxFuture<'static, Result<PageResult<T>>> + Send + Sync>;

/// Results of one page plus the parameters of the following one.
struct PageResult<T> {
    items: Vec<T>,
    next_params: Option<QueryParams>,
}

/// A stream that lazily walks a paginated endpoint.
///
/// The stream is finite and not restartable. An error ends it: the error is
/// yielded once and no further page is fetched.
///
/// # Example
///
/// ```no_run
/// use futures_util::StreamExt;
///
/// # async fn example(client: belvo_rs::BelvoClient) -> belvo_rs::Result<()> {
/// let mut stream = client.institutions().list_stream(None);
///
/// while let Some(result) = stream.next().await {
///     let institution = result?;
///     println!("{}", institution["name"]);
/// }
/// # Ok(())
/// # }
/// ```
pub struct PaginatedStream<T> {
    /// Function to fetch a page from its query parameters.
    fetch_page: FetchPage<T>,
    /// Items of the current page not yet yielded.
    current_items: VecDeque<T>,
    /// Parameters of the next page to fetch, None if exhausted.
    next_params: Option<QueryParams>,
    /// Current in-flight fetch future.
    pending_fetch: Option<BoxFuture<'static, Result<PageResult<T>>>>,
}

impl<T> PaginatedStream<T>
where
    T: DeserializeOwned + Send + 'static,
{
    /// Create a stream over `path`, starting from `params`.
    pub(crate) fn new(inner: Arc<ClientInner>, path: impl Into<String>, params: QueryParams) -> Self {
        let path = path.into();

        let fetch_page: FetchPage<T> = Box::new(move |query: QueryParams| {
            let inner = inner.clone();
            let path = path.clone();

            Box::pin(async move {
                tracing::trace!(%path, ?query, "fetching page");
                let page: Page<T> = inner.get(&path, &query).await?;
                let next_params = page.next_params(inner.session.base_url())?;
                tracing::debug!(
                    %path,
                    count = page.count,
                    received = page.results.len(),
                    has_next = next_params.is_some(),
                    "page fetched"
                );
                Ok(PageResult {
                    items: page.results,
                    next_params,
                })
            })
        });

        Self {
            fetch_page,
            current_items: VecDeque::new(),
            next_params: Some(params),
            pending_fetch: None,
        }
    }
}

impl<T> Stream for PaginatedStream<T> {
    type Item = Result<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;

        loop {
            if let Some(item) = this.current_items.pop_front() {
                return Poll::Ready(Some(Ok(item)));
            }

            if let Some(ref mut fut) = this.pending_fetch {
                match fut.as_mut().poll(cx) {
                    Poll::Ready(Ok(page)) => {
                        this.pending_fetch = None;
                        this.current_items = page.items.into();
                        this.next_params = page.next_params;
                        // An empty page with a next link still continues
                        continue;
                    }
                    Poll::Ready(Err(e)) => {
                        this.pending_fetch = None;
                        this.next_params = None;
                        return Poll::Ready(Some(Err(e)));
                    }
                    Poll::Pending => {
                        return Poll::Pending;
                    }
                }
            }

            if let Some(params) = this.next_params.take() {
                this.pending_fetch = Some((this.fetch_page)(params));
                continue;
            }

            return Poll::Ready(None);
        }
    }
}

impl<T> Unpin for PaginatedStream<T> {}
