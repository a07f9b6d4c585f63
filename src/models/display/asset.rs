//! Asset display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::{Asset, ResourceId};
use crate::output::formatters::{or_dash, truncate};

/// Asset row for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct AssetDisplay {
    #[tabled(rename = "ASSET ID")]
    pub id: ResourceId,

    #[tabled(rename = "HOST NAME")]
    pub host_name: String,

    #[tabled(rename = "IP")]
    pub ip: String,

    #[tabled(rename = "OS")]
    pub os: String,

    #[tabled(rename = "RISK")]
    pub risk_score: String,
}

impl From<Asset> for AssetDisplay {
    fn from(asset: Asset) -> Self {
        Self {
            id: asset.id,
            host_name: or_dash(asset.host_name),
            ip: or_dash(asset.ip),
            os: truncate(asset.os.as_deref().unwrap_or("--"), 40),
            risk_score: or_dash(asset.risk_score.map(|r| format!("{:.0}", r))),
        }
    }
}
