//! Pagination helpers for API requests
//!
//! InsightVM listings are page-number based: every collection endpoint takes
//! `page` (0-indexed) and `size` and answers with
//! `{ "resources": [...], "page": { "number", "size", "totalResources", "totalPages" } }`.
//! [`fetch_all`] walks such an endpoint until it is exhausted.

use std::future::Future;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Maximum page size accepted by the InsightVM API.
///
/// Larger requests are clamped by the console itself, so we clamp too
/// instead of rejecting them.
pub const MAX_PAGE_SIZE: usize = 500;

/// Clamp a requested page size into `1..=MAX_PAGE_SIZE`.
pub fn clamp_page_size(size: usize) -> usize {
    size.clamp(1, MAX_PAGE_SIZE)
}

/// Pagination parameters for one listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageParams {
    /// Page number (0-indexed)
    pub page: usize,
    /// Number of items per page (clamped to `MAX_PAGE_SIZE`)
    pub size: usize,
}

impl PageParams {
    /// Create params for a page, clamping the size.
    pub fn new(page: usize, size: usize) -> Self {
        Self {
            page,
            size: clamp_page_size(size),
        }
    }

    /// Convert to query string parameters using InsightVM names.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        vec![("page", self.page.to_string()), ("size", self.size.to_string())]
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self::new(0, MAX_PAGE_SIZE)
    }
}

/// Page metadata returned with every listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Current page number
    #[serde(default)]
    pub number: usize,

    /// Items per page
    #[serde(default)]
    pub size: usize,

    /// Total number of items across all pages
    #[serde(default)]
    pub total_resources: u64,

    /// Total number of pages
    #[serde(default)]
    pub total_pages: usize,
}

/// One page of a listing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items on this page
    #[serde(default = "Vec::new")]
    pub resources: Vec<T>,

    /// Pagination metadata; small result sets sometimes omit it
    #[serde(default)]
    pub page: Option<PageInfo>,
}

impl<T> Page<T> {
    /// A page with no metadata.
    #[cfg(test)]
    pub fn new(resources: Vec<T>) -> Self {
        Self {
            resources,
            page: None,
        }
    }

    /// A page with metadata.
    #[cfg(test)]
    pub fn with_info(resources: Vec<T>, page: PageInfo) -> Self {
        Self {
            resources,
            page: Some(page),
        }
    }

    /// Total pages reported by the server, 0 when absent.
    pub fn total_pages(&self) -> usize {
        self.page.as_ref().map(|p| p.total_pages).unwrap_or(0)
    }

    /// Total items reported by the server, 0 when absent.
    pub fn total_resources(&self) -> u64 {
        self.page.as_ref().map(|p| p.total_resources).unwrap_or(0)
    }

    /// Whether `requested_page` was the last one worth fetching.
    ///
    /// Either signal ends the walk: an empty page, or a page number at or past
    /// `totalPages - 1`. Missing or zero `totalPages` counts as a single page.
    pub fn is_last(&self, requested_page: usize) -> bool {
        if self.resources.is_empty() {
            return true;
        }
        let total = self.total_pages();
        total == 0 || requested_page + 1 >= total
    }
}

/// Fetch every page of a listing and return all items in server order.
///
/// `list_page` is called with page 0, 1, 2, ... until [`Page::is_last`]
/// says stop. Any error aborts the walk and is returned as-is; items already
/// fetched are dropped, so callers never act on a partial listing.
///
/// # Example
///
/// ```ignore
/// let sites = fetch_all(move |params| async move { api.list_sites(&params).await }, 500).await?;
/// ```
pub async fn fetch_all<T, F, Fut>(mut list_page: F, page_size: usize) -> Result<Vec<T>>
where
    F: FnMut(PageParams) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    let size = clamp_page_size(page_size);
    let mut all_items = Vec::new();
    let mut page = 0;

    loop {
        let response = list_page(PageParams::new(page, size)).await?;
        let last = response.is_last(page);

        debug!(
            "Page {} returned {} items (totalPages={})",
            page,
            response.resources.len(),
            response.total_pages()
        );

        all_items.extend(response.resources);

        if last {
            break;
        }
        page += 1;
    }

    debug!("Fetched {} total items over {} pages", all_items.len(), page + 1);
    Ok(all_items)
}
