//! Host comparison display model

use serde::Serialize;
use tabled::Tabled;

use crate::cli::compare::HostComparison;
use crate::output::formatters::or_dash;

/// One XDR host and whether InsightVM knows it.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ComparisonDisplay {
    #[tabled(rename = "HOST NAME")]
    pub host_name: String,

    #[tabled(rename = "XDR STATUS")]
    pub agent_status: String,

    #[tabled(rename = "INSIGHTVM")]
    pub presence: String,

    #[tabled(rename = "ASSET IDS")]
    pub asset_ids: String,
}

impl From<HostComparison> for ComparisonDisplay {
    fn from(row: HostComparison) -> Self {
        let asset_ids = if row.asset_ids.is_empty() {
            "--".to_string()
        } else {
            row.asset_ids
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };

        Self {
            host_name: row.host_name,
            agent_status: or_dash(row.agent_status),
            presence: row.presence.to_string(),
            asset_ids,
        }
    }
}
