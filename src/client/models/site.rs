//! Site models

use serde::{Deserialize, Serialize};

use super::ResourceId;
use crate::bulk::Resource;

/// InsightVM site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    /// Site ID
    pub id: ResourceId,

    /// Site name
    #[serde(default)]
    pub name: String,

    /// Site description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Site type (static, dynamic, agent)
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub site_type: Option<String>,

    /// Importance (very_low .. very_high)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importance: Option<String>,

    /// Number of assets as reported by the console
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets: Option<u64>,

    /// Aggregate risk score
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_score: Option<f64>,

    /// Scan engine ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scan_engine: Option<i64>,

    /// Scan template ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scan_template: Option<String>,
}

impl Resource for Site {
    type Id = ResourceId;

    fn id(&self) -> ResourceId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}
