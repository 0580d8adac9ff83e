//! Total-count-then-paginate walking shared by every listing

use crate::error::{HartisizeError, Result};
use crate::registry::models::{Page, PageQuery};
use futures::Stream;
use std::future::Future;

/// Items requested per listing call
pub const DEFAULT_PAGE_SIZE: u64 = 100;

/// Number of pages to request for `total_count` items.
///
/// This is `round_half_even(total / page_size + 0.6)` rather than a ceiling
/// division, so it can be one off near page boundaries (100 items in pages of
/// 100 plans two pages). Zero items means zero pages.
pub fn page_count(total_count: u64, page_size: u64) -> u64 {
    debug_assert!(page_size > 0, "page size must be positive");
    if total_count == 0 {
        return 0;
    }
    (total_count as f64 / page_size as f64 + 0.6).round_ties_even() as u64
}

/// Walks pages `1..=page_count` of one listing.
///
/// Built by [`paginate`], which issues a probe request for page 1 to learn the
/// total count before any page is yielded.
pub struct Paginator<F> {
    fetch: F,
    page_size: u64,
    pages: u64,
    next: u64,
}

impl<F, Fut, T> Paginator<F>
where
    F: FnMut(PageQuery) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    pub async fn plan(mut fetch: F, page_size: u64) -> Result<Self> {
        let probe = fetch(PageQuery::new(1, page_size)).await?;
        let pages = page_count(probe.total_count, page_size);
        tracing::debug!(
            total_count = probe.total_count,
            pages,
            "planned paginated listing"
        );

        Ok(Self {
            fetch,
            page_size,
            pages,
            next: 1,
        })
    }

    pub fn page_count(&self) -> u64 {
        self.pages
    }

    /// Fetch the next planned page, `None` once all pages were yielded
    pub async fn next_page(&mut self) -> Result<Option<Page<T>>> {
        if self.next > self.pages {
            return Ok(None);
        }
        let page = (self.fetch)(PageQuery::new(self.next, self.page_size)).await?;
        self.next += 1;
        Ok(Some(page))
    }

    /// Lazy stream over the remaining pages; stops at the first error
    pub fn into_stream(self) -> impl Stream<Item = Result<Page<T>>> {
        futures::stream::try_unfold(self, |mut paginator| async move {
            let page = paginator.next_page().await?;
            Ok::<_, HartisizeError>(page.map(|page| (page, paginator)))
        })
    }
}

/// Probe the listing behind `fetch` and return a paginator over its pages
pub async fn paginate<F, Fut, T>(fetch: F, page_size: u64) -> Result<Paginator<F>>
where
    F: FnMut(PageQuery) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    Paginator::plan(fetch, page_size).await
}
