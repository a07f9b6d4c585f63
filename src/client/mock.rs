//! Mock InsightVM and Cortex XDR client for testing
//!
//! Provides an in-memory implementation of every API trait so the bulk
//! helpers and command handlers can be unit tested without a console.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::api::{AssetApi, ListingApi, SiteApi, UserApi, XdrApi};
use super::models::{Asset, AssetSearch, Report, ResourceId, Scan, Site, User, XdrEndpoint};
use super::pagination::{Page, PageInfo, PageParams};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Seed records through the builder methods, then hand `&mock` to anything
/// that takes an API trait. Deletes really remove records, so a second live
/// run sees the effect of the first.
///
/// # Example
/// ```ignore
/// let mock = MockInsightVm::new()
///     .with_sites(vec![site(1, "lab")])
///     .with_failing_delete(1);
/// ```
#[derive(Default)]
pub struct MockInsightVm {
    state: Mutex<MockState>,
}

#[derive(Default)]
struct MockState {
    sites: Vec<Site>,
    assets: Vec<Asset>,
    users: Vec<User>,
    reports: Vec<Report>,
    scans: Vec<Scan>,
    endpoints: Vec<XdrEndpoint>,
    site_asset_counts: HashMap<ResourceId, u64>,
    asset_vulnerability_counts: HashMap<ResourceId, u64>,
    user_sites: HashMap<ResourceId, Vec<ResourceId>>,
    // Injected failures apply to every resource type with a matching id.
    failing_get: HashSet<ResourceId>,
    failing_delete: HashSet<ResourceId>,
    failing_child_count: HashSet<ResourceId>,
    failing_search: HashSet<String>,
    /// Error returned by the next call, consumed on first use
    error: Option<ApiError>,
    call_count: CallCounts,
    captured_requests: Vec<CapturedRequest>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub list_sites: usize,
    pub get_site: usize,
    pub delete_site: usize,
    pub list_site_assets: usize,
    pub list_assets: usize,
    pub get_asset: usize,
    pub delete_asset: usize,
    pub search_assets: usize,
    pub list_asset_vulnerabilities: usize,
    pub list_users: usize,
    pub get_user: usize,
    pub delete_user: usize,
    pub list_user_sites: usize,
    pub list_reports: usize,
    pub list_scans: usize,
    pub get_endpoints: usize,
}

impl CallCounts {
    /// Number of delete calls across all resources.
    pub fn deletes(&self) -> usize {
        self.delete_site + self.delete_asset + self.delete_user
    }
}

/// A captured API request for test assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    /// The API method called (e.g. "list_sites")
    pub method: String,
    /// Page number if the call was paged
    pub page: Option<usize>,
    /// Page size if the call was paged
    pub page_size: Option<usize>,
}

/// Minimal site fixture
pub fn site(id: ResourceId, name: &str) -> Site {
    Site {
        id,
        name: name.to_string(),
        description: None,
        site_type: Some("static".to_string()),
        importance: None,
        assets: None,
        risk_score: None,
        scan_engine: None,
        scan_template: None,
    }
}

/// Minimal asset fixture
pub fn asset(id: ResourceId, host_name: &str) -> Asset {
    Asset {
        id,
        ip: Some(format!("10.0.0.{}", id)),
        host_name: Some(host_name.to_string()),
        mac: None,
        os: Some("Linux".to_string()),
        risk_score: None,
        assessed_for_vulnerabilities: Some(true),
    }
}

/// Minimal enabled, unlocked user fixture
pub fn user(id: ResourceId, login: &str) -> User {
    User {
        id,
        login: login.to_string(),
        name: format!("User {}", login),
        email: None,
        enabled: true,
        locked: false,
        role: Default::default(),
    }
}

/// Serve one page of `items` the way the console does.
fn page_of<T: Clone>(items: &[T], params: &PageParams) -> Page<T> {
    let resources = items
        .iter()
        .skip(params.page * params.size)
        .take(params.size)
        .cloned()
        .collect();
    Page::with_info(resources, info(items.len() as u64, params))
}

fn info(total_resources: u64, params: &PageParams) -> PageInfo {
    PageInfo {
        number: params.page,
        size: params.size,
        total_resources,
        total_pages: (total_resources as usize).div_ceil(params.size),
    }
}

/// Statuses the console reports for scans still in progress
fn scan_is_active(scan: &Scan) -> bool {
    matches!(
        scan.status.as_str(),
        "running" | "paused" | "dispatched" | "integrating"
    )
}

fn not_found(path: &str, id: ResourceId) -> crate::error::Error {
    ApiError::NotFound(format!("{}/{}", path, id)).into()
}

impl MockInsightVm {
    /// Create a new mock client with no records.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sites(mut self, sites: Vec<Site>) -> Self {
        self.state.get_mut().sites = sites;
        self
    }

    pub fn with_assets(mut self, assets: Vec<Asset>) -> Self {
        self.state.get_mut().assets = assets;
        self
    }

    pub fn with_users(mut self, users: Vec<User>) -> Self {
        self.state.get_mut().users = users;
        self
    }

    pub fn with_reports(mut self, reports: Vec<Report>) -> Self {
        self.state.get_mut().reports = reports;
        self
    }

    pub fn with_scans(mut self, scans: Vec<Scan>) -> Self {
        self.state.get_mut().scans = scans;
        self
    }

    pub fn with_endpoints(mut self, endpoints: Vec<XdrEndpoint>) -> Self {
        self.state.get_mut().endpoints = endpoints;
        self
    }

    /// Number of assets reported for a site (default 0).
    pub fn with_site_asset_count(mut self, site_id: ResourceId, count: u64) -> Self {
        self.state.get_mut().site_asset_counts.insert(site_id, count);
        self
    }

    /// Number of vulnerabilities reported for an asset (default 0).
    pub fn with_asset_vulnerability_count(mut self, asset_id: ResourceId, count: u64) -> Self {
        self.state
            .get_mut()
            .asset_vulnerability_counts
            .insert(asset_id, count);
        self
    }

    /// Sites a user can access (default none).
    pub fn with_user_sites(mut self, user_id: ResourceId, sites: Vec<ResourceId>) -> Self {
        self.state.get_mut().user_sites.insert(user_id, sites);
        self
    }

    /// Make `get` fail with a server error for this id.
    pub fn with_failing_get(mut self, id: ResourceId) -> Self {
        self.state.get_mut().failing_get.insert(id);
        self
    }

    /// Make `delete` fail with a conflict for this id.
    pub fn with_failing_delete(mut self, id: ResourceId) -> Self {
        self.state.get_mut().failing_delete.insert(id);
        self
    }

    /// Make child counting fail for this id.
    pub fn with_failing_child_count(mut self, id: ResourceId) -> Self {
        self.state.get_mut().failing_child_count.insert(id);
        self
    }

    /// Make an asset search for this host name fail.
    pub fn with_failing_search(mut self, host_name: &str) -> Self {
        self.state
            .get_mut()
            .failing_search
            .insert(host_name.to_lowercase());
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub fn with_error(mut self, error: ApiError) -> Self {
        self.state.get_mut().error = Some(error);
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.state.lock().await.call_count.clone()
    }

    /// Get all captured requests for test assertions.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.state.lock().await.captured_requests.clone()
    }

    /// IDs of the sites still present.
    pub async fn site_ids(&self) -> Vec<ResourceId> {
        self.state.lock().await.sites.iter().map(|s| s.id).collect()
    }

    /// IDs of the assets still present.
    pub async fn asset_ids(&self) -> Vec<ResourceId> {
        self.state.lock().await.assets.iter().map(|a| a.id).collect()
    }

    /// IDs of the users still present.
    pub async fn user_ids(&self) -> Vec<ResourceId> {
        self.state.lock().await.users.iter().map(|u| u.id).collect()
    }
}

impl MockState {
    /// Record the call and return the pending one-shot error, if any.
    fn begin(&mut self, method: &str, params: Option<&PageParams>) -> Result<()> {
        self.captured_requests.push(CapturedRequest {
            method: method.to_string(),
            page: params.map(|p| p.page),
            page_size: params.map(|p| p.size),
        });
        match self.error.take() {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }

    fn check_get(&self, id: ResourceId) -> Result<()> {
        if self.failing_get.contains(&id) {
            return Err(ApiError::ServerError(format!("lookup of {} failed", id)).into());
        }
        Ok(())
    }

    fn check_delete(&self, id: ResourceId) -> Result<()> {
        if self.failing_delete.contains(&id) {
            return Err(ApiError::Conflict(format!("{} is in use", id)).into());
        }
        Ok(())
    }

    fn check_child_count(&self, id: ResourceId) -> Result<()> {
        if self.failing_child_count.contains(&id) {
            return Err(ApiError::Network("Request timed out".to_string()).into());
        }
        Ok(())
    }
}

// ============================================================================
// SiteApi Implementation
// ============================================================================

#[async_trait]
impl SiteApi for MockInsightVm {
    async fn list_sites(&self, params: &PageParams) -> Result<Page<Site>> {
        let mut state = self.state.lock().await;
        state.call_count.list_sites += 1;
        state.begin("list_sites", Some(params))?;
        Ok(page_of(&state.sites, params))
    }

    async fn get_site(&self, id: ResourceId) -> Result<Site> {
        let mut state = self.state.lock().await;
        state.call_count.get_site += 1;
        state.begin("get_site", None)?;
        state.check_get(id)?;
        state
            .sites
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| not_found("sites", id))
    }

    async fn delete_site(&self, id: ResourceId) -> Result<()> {
        let mut state = self.state.lock().await;
        state.call_count.delete_site += 1;
        state.begin("delete_site", None)?;
        state.check_delete(id)?;
        let before = state.sites.len();
        state.sites.retain(|s| s.id != id);
        if state.sites.len() == before {
            return Err(not_found("sites", id));
        }
        Ok(())
    }

    async fn list_site_assets(&self, id: ResourceId, params: &PageParams) -> Result<Page<Asset>> {
        let mut state = self.state.lock().await;
        state.call_count.list_site_assets += 1;
        state.begin("list_site_assets", Some(params))?;
        state.check_child_count(id)?;
        if !state.sites.iter().any(|s| s.id == id) {
            return Err(not_found("sites", id));
        }
        let total = state.site_asset_counts.get(&id).copied().unwrap_or(0);
        Ok(Page::with_info(Vec::new(), info(total, params)))
    }
}

// ============================================================================
// AssetApi Implementation
// ============================================================================

#[async_trait]
impl AssetApi for MockInsightVm {
    async fn list_assets(&self, params: &PageParams) -> Result<Page<Asset>> {
        let mut state = self.state.lock().await;
        state.call_count.list_assets += 1;
        state.begin("list_assets", Some(params))?;
        Ok(page_of(&state.assets, params))
    }

    async fn get_asset(&self, id: ResourceId) -> Result<Asset> {
        let mut state = self.state.lock().await;
        state.call_count.get_asset += 1;
        state.begin("get_asset", None)?;
        state.check_get(id)?;
        state
            .assets
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| not_found("assets", id))
    }

    async fn delete_asset(&self, id: ResourceId) -> Result<()> {
        let mut state = self.state.lock().await;
        state.call_count.delete_asset += 1;
        state.begin("delete_asset", None)?;
        state.check_delete(id)?;
        let before = state.assets.len();
        state.assets.retain(|a| a.id != id);
        if state.assets.len() == before {
            return Err(not_found("assets", id));
        }
        Ok(())
    }

    async fn search_assets(
        &self,
        search: &AssetSearch,
        params: &PageParams,
    ) -> Result<Page<Asset>> {
        let mut state = self.state.lock().await;
        state.call_count.search_assets += 1;
        state.begin("search_assets", Some(params))?;

        // Only the host-name filters used by the commands are understood.
        let wanted: Vec<String> = search
            .filters
            .iter()
            .filter(|f| f.field == "host-name")
            .map(|f| f.value.to_lowercase())
            .collect();
        if wanted.iter().any(|h| state.failing_search.contains(h)) {
            return Err(ApiError::ServerError("search failed".to_string()).into());
        }

        let matches: Vec<Asset> = state
            .assets
            .iter()
            .filter(|a| {
                let host = a.host_name.as_deref().unwrap_or("").to_lowercase();
                wanted.iter().all(|w| *w == host)
            })
            .cloned()
            .collect();
        Ok(page_of(&matches, params))
    }

    async fn list_asset_vulnerabilities(
        &self,
        id: ResourceId,
        params: &PageParams,
    ) -> Result<Page<serde_json::Value>> {
        let mut state = self.state.lock().await;
        state.call_count.list_asset_vulnerabilities += 1;
        state.begin("list_asset_vulnerabilities", Some(params))?;
        state.check_child_count(id)?;
        if !state.assets.iter().any(|a| a.id == id) {
            return Err(not_found("assets", id));
        }
        let total = state
            .asset_vulnerability_counts
            .get(&id)
            .copied()
            .unwrap_or(0);
        Ok(Page::with_info(Vec::new(), info(total, params)))
    }
}

// ============================================================================
// UserApi Implementation
// ============================================================================

#[async_trait]
impl UserApi for MockInsightVm {
    async fn list_users(&self, params: &PageParams) -> Result<Page<User>> {
        let mut state = self.state.lock().await;
        state.call_count.list_users += 1;
        state.begin("list_users", Some(params))?;
        Ok(page_of(&state.users, params))
    }

    async fn get_user(&self, id: ResourceId) -> Result<User> {
        let mut state = self.state.lock().await;
        state.call_count.get_user += 1;
        state.begin("get_user", None)?;
        state.check_get(id)?;
        state
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| not_found("users", id))
    }

    async fn delete_user(&self, id: ResourceId) -> Result<()> {
        let mut state = self.state.lock().await;
        state.call_count.delete_user += 1;
        state.begin("delete_user", None)?;
        state.check_delete(id)?;
        let before = state.users.len();
        state.users.retain(|u| u.id != id);
        if state.users.len() == before {
            return Err(not_found("users", id));
        }
        Ok(())
    }

    async fn list_user_sites(&self, id: ResourceId) -> Result<Vec<ResourceId>> {
        let mut state = self.state.lock().await;
        state.call_count.list_user_sites += 1;
        state.begin("list_user_sites", None)?;
        state.check_child_count(id)?;
        if !state.users.iter().any(|u| u.id == id) {
            return Err(not_found("users", id));
        }
        Ok(state.user_sites.get(&id).cloned().unwrap_or_default())
    }
}

// ============================================================================
// ListingApi Implementation
// ============================================================================

#[async_trait]
impl ListingApi for MockInsightVm {
    async fn list_reports(&self, params: &PageParams) -> Result<Page<Report>> {
        let mut state = self.state.lock().await;
        state.call_count.list_reports += 1;
        state.begin("list_reports", Some(params))?;
        Ok(page_of(&state.reports, params))
    }

    async fn list_scans(&self, active: Option<bool>, params: &PageParams) -> Result<Page<Scan>> {
        let mut state = self.state.lock().await;
        state.call_count.list_scans += 1;
        state.begin("list_scans", Some(params))?;
        let scans: Vec<Scan> = state
            .scans
            .iter()
            .filter(|s| active.is_none_or(|a| scan_is_active(s) == a))
            .cloned()
            .collect();
        Ok(page_of(&scans, params))
    }
}

// ============================================================================
// XdrApi Implementation
// ============================================================================

#[async_trait]
impl XdrApi for MockInsightVm {
    async fn get_endpoints(&self) -> Result<Vec<XdrEndpoint>> {
        let mut state = self.state.lock().await;
        state.call_count.get_endpoints += 1;
        state.begin("get_endpoints", None)?;
        Ok(state.endpoints.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_pages_like_the_console() {
        let mock = MockInsightVm::new().with_sites((1..=5).map(|i| site(i, "s")).collect());

        let page = mock.list_sites(&PageParams::new(2, 2)).await.unwrap();

        assert_eq!(page.resources.len(), 1);
        assert_eq!(page.total_pages(), 3);
        assert_eq!(page.total_resources(), 5);
    }

    #[tokio::test]
    async fn test_mock_one_shot_error_is_consumed() {
        let mock = MockInsightVm::new()
            .with_sites(vec![site(1, "a")])
            .with_error(ApiError::Unauthorized);

        assert!(mock.get_site(1).await.is_err());
        assert!(mock.get_site(1).await.is_ok());
        assert_eq!(mock.call_counts().await.get_site, 2);
    }

    #[tokio::test]
    async fn test_mock_delete_removes_record() {
        let mock = MockInsightVm::new().with_sites(vec![site(1, "a"), site(2, "b")]);

        mock.delete_site(1).await.unwrap();

        assert_eq!(mock.site_ids().await, vec![2]);
        assert!(matches!(
            mock.delete_site(1).await,
            Err(crate::error::Error::Api(ApiError::NotFound(_)))
        ));
    }
}
