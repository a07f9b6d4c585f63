//! Scan display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::{ResourceId, Scan};
use crate::output::formatters::{format_iso_short, or_dash};

/// Scan row for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ScanDisplay {
    #[tabled(rename = "SCAN ID")]
    pub id: ResourceId,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "SITE")]
    pub site: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "STARTED")]
    pub started: String,

    #[tabled(rename = "ENDED")]
    pub ended: String,

    #[tabled(rename = "ASSETS")]
    pub assets: String,
}

impl From<Scan> for ScanDisplay {
    fn from(scan: Scan) -> Self {
        let site = scan
            .site_name
            .or_else(|| scan.site_id.map(|id| id.to_string()));

        Self {
            id: scan.id,
            name: or_dash(scan.scan_name),
            site: or_dash(site),
            status: scan.status,
            started: format_iso_short(scan.start_time.as_deref()),
            ended: format_iso_short(scan.end_time.as_deref()),
            assets: or_dash(scan.assets),
        }
    }
}
