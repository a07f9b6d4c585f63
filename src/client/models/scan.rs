//! Scan models

use serde::{Deserialize, Serialize};

use super::ResourceId;

/// InsightVM scan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scan {
    /// Scan ID
    pub id: ResourceId,

    /// Scan name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scan_name: Option<String>,

    /// Site ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_id: Option<ResourceId>,

    /// Site name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,

    /// Scan status (running, finished, stopped, error, ...)
    #[serde(default)]
    pub status: String,

    /// Start time (ISO 8601)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,

    /// End time (ISO 8601)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,

    /// Number of assets discovered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets: Option<u64>,

    /// Scan engine name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine_name: Option<String>,
}
