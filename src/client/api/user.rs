//! User API trait

use async_trait::async_trait;

use crate::client::models::{ResourceId, User};
use crate::client::pagination::{Page, PageParams};
use crate::error::Result;

/// User account operations (`/api/3/users`)
#[async_trait]
pub trait UserApi: Send + Sync {
    /// List one page of users
    async fn list_users(&self, params: &PageParams) -> Result<Page<User>>;

    /// Get a single user
    async fn get_user(&self, id: ResourceId) -> Result<User>;

    /// Delete a user account
    async fn delete_user(&self, id: ResourceId) -> Result<()>;

    /// IDs of the sites a user has been granted access to.
    ///
    /// The console answers this one unpaged.
    async fn list_user_sites(&self, id: ResourceId) -> Result<Vec<ResourceId>>;
}
