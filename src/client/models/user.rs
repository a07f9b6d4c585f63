//! User models

use serde::{Deserialize, Serialize};

use super::ResourceId;
use crate::bulk::Resource;

/// Role assigned to an InsightVM user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRole {
    /// Role ID (e.g. `global-admin`, `user`)
    #[serde(default)]
    pub id: String,

    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Whether the role grants access to all sites
    #[serde(default)]
    pub all_sites: bool,

    /// Whether the role grants access to all asset groups
    #[serde(default)]
    pub all_asset_groups: bool,

    #[serde(default)]
    pub superuser: bool,
}

/// InsightVM user account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User ID
    pub id: ResourceId,

    /// Login name
    #[serde(default)]
    pub login: String,

    /// Full name
    #[serde(default)]
    pub name: String,

    /// Email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Whether the account is enabled
    #[serde(default)]
    pub enabled: bool,

    /// Whether the account is locked out
    #[serde(default)]
    pub locked: bool,

    /// Assigned role
    #[serde(default)]
    pub role: UserRole,
}

impl Resource for User {
    type Id = ResourceId;

    fn id(&self) -> ResourceId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.login
    }
}
