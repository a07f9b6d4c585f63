//! Asset models

use serde::{Deserialize, Serialize};

use super::ResourceId;
use crate::bulk::Resource;

/// InsightVM asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Asset ID
    pub id: ResourceId,

    /// Primary IPv4/IPv6 address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,

    /// Primary host name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_name: Option<String>,

    /// MAC address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac: Option<String>,

    /// Operating system description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,

    /// Risk score
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_score: Option<f64>,

    /// Whether the asset has been assessed for vulnerabilities
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessed_for_vulnerabilities: Option<bool>,
}

impl Asset {
    /// Host name, falling back to IP address.
    pub fn label(&self) -> &str {
        self.host_name
            .as_deref()
            .or(self.ip.as_deref())
            .unwrap_or("")
    }
}

impl Resource for Asset {
    type Id = ResourceId;

    fn id(&self) -> ResourceId {
        self.id
    }

    fn name(&self) -> &str {
        self.label()
    }

    fn description(&self) -> &str {
        self.os.as_deref().unwrap_or("")
    }
}

/// Body for `POST /api/3/assets/search`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetSearch {
    /// `all` or `any`
    #[serde(rename = "match")]
    pub match_mode: String,

    /// Search filters
    pub filters: Vec<SearchFilter>,
}

/// One asset search filter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchFilter {
    pub field: String,
    pub operator: String,
    pub value: String,
}

impl AssetSearch {
    /// Exact host name match.
    pub fn host_name_is(host_name: &str) -> Self {
        Self {
            match_mode: "all".to_string(),
            filters: vec![SearchFilter {
                field: "host-name".to_string(),
                operator: "is".to_string(),
                value: host_name.to_string(),
            }],
        }
    }
}
