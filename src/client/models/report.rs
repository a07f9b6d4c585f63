//! Report models

use serde::{Deserialize, Serialize};

use super::ResourceId;

/// InsightVM report configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Report ID
    pub id: ResourceId,

    /// Report name
    #[serde(default)]
    pub name: String,

    /// Output format (pdf, csv, xml, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Report template ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    /// Owner user ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<i64>,
}
