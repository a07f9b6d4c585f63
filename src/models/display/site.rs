//! Site display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::{ResourceId, Site};
use crate::output::formatters::{or_dash, truncate};

/// Site row for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct SiteDisplay {
    #[tabled(rename = "SITE ID")]
    pub id: ResourceId,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "TYPE")]
    pub site_type: String,

    /// Asset count as reported by the console
    #[tabled(rename = "ASSETS")]
    pub assets: String,

    #[tabled(rename = "RISK")]
    pub risk_score: String,

    #[tabled(rename = "DESCRIPTION")]
    pub description: String,
}

impl From<Site> for SiteDisplay {
    fn from(site: Site) -> Self {
        Self {
            id: site.id,
            name: site.name,
            site_type: or_dash(site.site_type),
            assets: or_dash(site.assets),
            risk_score: or_dash(site.risk_score.map(|r| format!("{:.0}", r))),
            description: truncate(site.description.as_deref().unwrap_or(""), 40),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::site;

    #[test]
    fn test_site_display_fills_gaps() {
        let display = SiteDisplay::from(site(4, "sn_lab"));
        assert_eq!(display.id, 4);
        assert_eq!(display.site_type, "static");
        assert_eq!(display.assets, "--");
        assert_eq!(display.description, "");
    }

    #[test]
    fn test_site_display_rounds_risk() {
        let mut record = site(4, "hq");
        record.risk_score = Some(10234.6);
        record.assets = Some(12);
        let display = SiteDisplay::from(record);
        assert_eq!(display.risk_score, "10235");
        assert_eq!(display.assets, "12");
    }
}
