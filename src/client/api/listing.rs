//! Listing API trait for read-only collections

use async_trait::async_trait;

use crate::client::models::{Report, Scan};
use crate::client::pagination::{Page, PageParams};
use crate::error::Result;

/// Read-only collection listings
#[async_trait]
pub trait ListingApi: Send + Sync {
    /// List one page of report configurations
    async fn list_reports(&self, params: &PageParams) -> Result<Page<Report>>;

    /// List one page of scans, optionally only active (or only finished) ones
    async fn list_scans(&self, active: Option<bool>, params: &PageParams) -> Result<Page<Scan>>;
}
