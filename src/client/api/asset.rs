//! Asset API trait

use async_trait::async_trait;

use crate::client::models::{Asset, AssetSearch, ResourceId};
use crate::client::pagination::{Page, PageParams};
use crate::error::Result;

/// Asset operations (`/api/3/assets`)
#[async_trait]
pub trait AssetApi: Send + Sync {
    /// List one page of assets
    async fn list_assets(&self, params: &PageParams) -> Result<Page<Asset>>;

    /// Get a single asset
    async fn get_asset(&self, id: ResourceId) -> Result<Asset>;

    /// Delete an asset
    async fn delete_asset(&self, id: ResourceId) -> Result<()>;

    /// Search assets with console-side filters
    async fn search_assets(&self, search: &AssetSearch, params: &PageParams)
    -> Result<Page<Asset>>;

    /// List one page of an asset's vulnerability findings.
    ///
    /// Findings are only ever counted, so they stay untyped.
    async fn list_asset_vulnerabilities(
        &self,
        id: ResourceId,
        params: &PageParams,
    ) -> Result<Page<serde_json::Value>>;
}
