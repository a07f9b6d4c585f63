//! [`ResourceOps`] implementations for the InsightVM resources that support
//! bulk cleanup.
//!
//! Each adapter borrows an API client and maps the four bulk collaborators
//! onto its endpoints. Child counts are read from `page.totalResources` of a
//! one-item listing so that counting never pages through the children.

use async_trait::async_trait;

use super::ResourceOps;
use crate::client::api::{AssetApi, SiteApi, UserApi};
use crate::client::models::{Asset, ResourceId, Site, User};
use crate::client::pagination::{Page, PageParams};
use crate::error::Result;

fn count_params() -> PageParams {
    PageParams::new(0, 1)
}

/// Sites; children are the assets in the site.
pub struct SiteOps<'a, A: ?Sized> {
    api: &'a A,
}

impl<'a, A: SiteApi + ?Sized> SiteOps<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<A: SiteApi + ?Sized> ResourceOps for SiteOps<'_, A> {
    type Item = Site;

    fn kind(&self) -> &'static str {
        "site"
    }

    fn child_label(&self) -> &'static str {
        "assets"
    }

    async fn list_page(&self, params: PageParams) -> Result<Page<Site>> {
        self.api.list_sites(&params).await
    }

    async fn get(&self, id: &ResourceId) -> Result<Site> {
        self.api.get_site(*id).await
    }

    async fn delete(&self, id: &ResourceId) -> Result<()> {
        self.api.delete_site(*id).await
    }

    async fn child_count(&self, id: &ResourceId) -> Result<u64> {
        let page = self.api.list_site_assets(*id, &count_params()).await?;
        Ok(page.total_resources())
    }
}

/// Assets; children are vulnerability findings.
pub struct AssetOps<'a, A: ?Sized> {
    api: &'a A,
}

impl<'a, A: AssetApi + ?Sized> AssetOps<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<A: AssetApi + ?Sized> ResourceOps for AssetOps<'_, A> {
    type Item = Asset;

    fn kind(&self) -> &'static str {
        "asset"
    }

    fn child_label(&self) -> &'static str {
        "vulnerabilities"
    }

    async fn list_page(&self, params: PageParams) -> Result<Page<Asset>> {
        self.api.list_assets(&params).await
    }

    async fn get(&self, id: &ResourceId) -> Result<Asset> {
        self.api.get_asset(*id).await
    }

    async fn delete(&self, id: &ResourceId) -> Result<()> {
        self.api.delete_asset(*id).await
    }

    async fn child_count(&self, id: &ResourceId) -> Result<u64> {
        let page = self
            .api
            .list_asset_vulnerabilities(*id, &count_params())
            .await?;
        Ok(page.total_resources())
    }
}

/// Users; children are the sites the user can access.
pub struct UserOps<'a, A: ?Sized> {
    api: &'a A,
}

impl<'a, A: UserApi + ?Sized> UserOps<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<A: UserApi + ?Sized> ResourceOps for UserOps<'_, A> {
    type Item = User;

    fn kind(&self) -> &'static str {
        "user"
    }

    fn child_label(&self) -> &'static str {
        "sites"
    }

    async fn list_page(&self, params: PageParams) -> Result<Page<User>> {
        self.api.list_users(&params).await
    }

    async fn get(&self, id: &ResourceId) -> Result<User> {
        self.api.get_user(*id).await
    }

    async fn delete(&self, id: &ResourceId) -> Result<()> {
        self.api.delete_user(*id).await
    }

    async fn child_count(&self, id: &ResourceId) -> Result<u64> {
        Ok(self.api.list_user_sites(*id).await?.len() as u64)
    }
}
