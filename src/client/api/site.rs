//! Site API trait

use async_trait::async_trait;

use crate::client::models::{Asset, ResourceId, Site};
use crate::client::pagination::{Page, PageParams};
use crate::error::Result;

/// Site operations (`/api/3/sites`)
#[async_trait]
pub trait SiteApi: Send + Sync {
    /// List one page of sites
    async fn list_sites(&self, params: &PageParams) -> Result<Page<Site>>;

    /// Get a single site
    async fn get_site(&self, id: ResourceId) -> Result<Site>;

    /// Delete a site and its scan history
    async fn delete_site(&self, id: ResourceId) -> Result<()>;

    /// List one page of the assets in a site.
    ///
    /// Request `size = 1` and read `total_resources` to count them.
    async fn list_site_assets(&self, id: ResourceId, params: &PageParams) -> Result<Page<Asset>>;
}
