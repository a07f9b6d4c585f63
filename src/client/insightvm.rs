//! InsightVM console API client implementation

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as HttpClient, Method, RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::api::{AssetApi, ListingApi, SiteApi, UserApi};
use super::models::{Asset, AssetSearch, Report, ResourceId, Scan, Site, User};
use super::pagination::{Page, PageParams};
use super::response::{check_status, parse_json};
use crate::config::InsightVmConfig;
use crate::error::{ApiError, Result};

/// InsightVM API v3 client (HTTP Basic Auth)
pub struct InsightVmClient {
    http: HttpClient,
    /// `{console}/api/3`
    api_url: String,
    username: String,
    password: String,
}

impl InsightVmClient {
    /// Create a client from configuration.
    ///
    /// Fails with a configuration error when credentials are missing.
    pub fn new(config: &InsightVmConfig) -> Result<Self> {
        let creds = config.credentials()?;

        let http = HttpClient::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.read_timeout_secs))
            .danger_accept_invalid_certs(!config.verify_ssl)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            api_url: format!("{}/api/3", creds.base_url.trim_end_matches('/')),
            username: creds.username.to_string(),
            password: creds.password.to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        debug!("{} {}", method, url);
        self.http
            .request(method, url)
            .basic_auth(&self.username, Some(&self.password))
            .header("Accept", "application/json")
    }

    /// Send a request and map non-success statuses to [`ApiError`].
    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await.map_err(ApiError::from)?;
        check_status(response).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let response = self.send(self.request(Method::GET, path).query(query)).await?;
        parse_json(response).await
    }

    async fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &PageParams,
    ) -> Result<Page<T>> {
        self.get_json(path, &params.to_query_params()).await
    }

    /// DELETE; the console answers with a links-only body (or none), which
    /// is ignored.
    async fn delete_path(&self, path: &str) -> Result<()> {
        self.send(self.request(Method::DELETE, path)).await?;
        Ok(())
    }
}

#[async_trait]
impl SiteApi for InsightVmClient {
    async fn list_sites(&self, params: &PageParams) -> Result<Page<Site>> {
        self.get_page("sites", params).await
    }

    async fn get_site(&self, id: ResourceId) -> Result<Site> {
        self.get_json(&format!("sites/{}", id), &[]).await
    }

    async fn delete_site(&self, id: ResourceId) -> Result<()> {
        self.delete_path(&format!("sites/{}", id)).await
    }

    async fn list_site_assets(&self, id: ResourceId, params: &PageParams) -> Result<Page<Asset>> {
        self.get_page(&format!("sites/{}/assets", id), params).await
    }
}

#[async_trait]
impl AssetApi for InsightVmClient {
    async fn list_assets(&self, params: &PageParams) -> Result<Page<Asset>> {
        self.get_page("assets", params).await
    }

    async fn get_asset(&self, id: ResourceId) -> Result<Asset> {
        self.get_json(&format!("assets/{}", id), &[]).await
    }

    async fn delete_asset(&self, id: ResourceId) -> Result<()> {
        self.delete_path(&format!("assets/{}", id)).await
    }

    async fn search_assets(
        &self,
        search: &AssetSearch,
        params: &PageParams,
    ) -> Result<Page<Asset>> {
        let request = self
            .request(Method::POST, "assets/search")
            .query(&params.to_query_params())
            .json(search);
        parse_json(self.send(request).await?).await
    }

    async fn list_asset_vulnerabilities(
        &self,
        id: ResourceId,
        params: &PageParams,
    ) -> Result<Page<serde_json::Value>> {
        self.get_page(&format!("assets/{}/vulnerabilities", id), params)
            .await
    }
}

#[async_trait]
impl UserApi for InsightVmClient {
    async fn list_users(&self, params: &PageParams) -> Result<Page<User>> {
        self.get_page("users", params).await
    }

    async fn get_user(&self, id: ResourceId) -> Result<User> {
        self.get_json(&format!("users/{}", id), &[]).await
    }

    async fn delete_user(&self, id: ResourceId) -> Result<()> {
        self.delete_path(&format!("users/{}", id)).await
    }

    async fn list_user_sites(&self, id: ResourceId) -> Result<Vec<ResourceId>> {
        #[derive(Deserialize)]
        struct SiteIds {
            #[serde(default)]
            resources: Vec<ResourceId>,
        }

        let ids: SiteIds = self.get_json(&format!("users/{}/sites", id), &[]).await?;
        Ok(ids.resources)
    }
}

#[async_trait]
impl ListingApi for InsightVmClient {
    async fn list_reports(&self, params: &PageParams) -> Result<Page<Report>> {
        self.get_page("reports", params).await
    }

    async fn list_scans(&self, active: Option<bool>, params: &PageParams) -> Result<Page<Scan>> {
        let mut query = params.to_query_params();
        if let Some(active) = active {
            query.push(("active", active.to_string()));
        }
        self.get_json("scans", &query).await
    }
}
